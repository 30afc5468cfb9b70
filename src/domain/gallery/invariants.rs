use super::entity::GalleryCollection;
use crate::domain::media_item::{validate_media_item, UploadState};
use crate::domain::{DomainError, DomainResult};

/// Validates all GalleryCollection invariants
pub fn validate_gallery(gallery: &GalleryCollection) -> DomainResult<()> {
    for item in &gallery.items {
        validate_media_item(item)?;
    }
    validate_local_id_uniqueness(gallery)?;
    Ok(())
}

/// Local id uniqueness:
/// While an item is Pending or Uploading, its local_id must not collide with
/// any other item's local_id. Without this, bus events cannot be routed
/// unambiguously.
fn validate_local_id_uniqueness(gallery: &GalleryCollection) -> DomainResult<()> {
    for (index, item) in gallery.items.iter().enumerate() {
        let in_flight = matches!(
            item.upload_state,
            UploadState::Pending | UploadState::Uploading { .. }
        );
        if !in_flight {
            continue;
        }

        let collides = gallery
            .items
            .iter()
            .enumerate()
            .any(|(other_index, other)| other_index != index && other.local_id == item.local_id);
        if collides {
            return Err(DomainError::DuplicateLocalId {
                local_id: item.local_id,
            });
        }
    }
    Ok(())
}

/// Critical GalleryCollection Invariants:
///
/// 1. Item order is display order; insertion order is preserved
/// 2. In-flight local ids are unique within the collection
/// 3. Items are removed only by explicit user action, never by events
/// 4. One item's failure never affects a sibling's state
/// 5. The collection caption is independent of item captions and upload state
