use super::entity::{MediaItem, UploadState};
use crate::domain::{DomainError, DomainResult};

/// Validates all MediaItem invariants
pub fn validate_media_item(item: &MediaItem) -> DomainResult<()> {
    validate_progress(item)?;
    validate_server_identity(item)?;
    Ok(())
}

/// Progress invariants:
/// 1. Progress is only meaningful while uploading
/// 2. Progress stays within 0.0..=1.0
fn validate_progress(item: &MediaItem) -> DomainResult<()> {
    if let UploadState::Uploading { progress } = item.upload_state {
        if !(0.0..=1.0).contains(&progress) {
            return Err(DomainError::ProgressOutOfRange { progress });
        }
    }
    Ok(())
}

/// Server identity invariants:
/// 1. A succeeded item carries both server_id and server_url
/// 2. An item that has not succeeded carries neither
fn validate_server_identity(item: &MediaItem) -> DomainResult<()> {
    let has_identity = item.server_id.is_some() && item.server_url.is_some();
    let has_partial = item.server_id.is_some() != item.server_url.is_some();

    if has_partial {
        return Err(DomainError::InvariantViolation(format!(
            "item {} carries partial server identity",
            item.local_id
        )));
    }

    match item.upload_state {
        UploadState::Succeeded if !has_identity => Err(DomainError::InvariantViolation(format!(
            "succeeded item {} is missing server identity",
            item.local_id
        ))),
        UploadState::Pending | UploadState::Uploading { .. } | UploadState::Failed
            if has_identity =>
        {
            Err(DomainError::InvariantViolation(format!(
                "item {} carries server identity before succeeding",
                item.local_id
            )))
        }
        _ => Ok(()),
    }
}

/// Critical MediaItem Invariants:
///
/// 1. local_id is assigned at creation and never changes
/// 2. server_id/server_url appear together, only on success, and never change after
/// 3. The displayed resource switches to the server URL on success
/// 4. A failed item keeps local_id/local_url for retry or removal
/// 5. Terminal states absorb later events (idempotent re-delivery)
/// 6. Captions are editable in every state

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media_item::{MediaItem, MediaType, UploadState};

    #[test]
    fn test_valid_pending_item() {
        let item = MediaItem::pending(1, "file:///local-image-1.jpeg".into(), MediaType::Image);
        assert!(validate_media_item(&item).is_ok());
    }

    #[test]
    fn test_valid_uploaded_item() {
        let item = MediaItem::uploaded(
            2000,
            "https://test-site.files.example.com/image-1.jpeg".into(),
            MediaType::Image,
        );
        assert!(validate_media_item(&item).is_ok());
    }

    #[test]
    fn test_progress_out_of_range_fails() {
        let mut item = MediaItem::pending(1, "file:///a.jpeg".into(), MediaType::Image);
        item.upload_state = UploadState::Uploading { progress: 1.5 };
        assert!(matches!(
            validate_media_item(&item),
            Err(DomainError::ProgressOutOfRange { .. })
        ));
    }

    #[test]
    fn test_succeeded_without_server_identity_fails() {
        let mut item = MediaItem::pending(1, "file:///a.jpeg".into(), MediaType::Image);
        item.upload_state = UploadState::Succeeded;
        assert!(validate_media_item(&item).is_err());
    }

    #[test]
    fn test_pending_with_server_identity_fails() {
        let mut item = MediaItem::pending(1, "file:///a.jpeg".into(), MediaType::Image);
        item.server_id = Some(2000);
        item.server_url = Some("https://example.com/a.jpeg".into());
        assert!(validate_media_item(&item).is_err());
    }

    #[test]
    fn test_partial_server_identity_fails() {
        let mut item = MediaItem::pending(1, "file:///a.jpeg".into(), MediaType::Image);
        item.server_id = Some(2000);
        assert!(validate_media_item(&item).is_err());
    }
}
