use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::media_item::{MediaItem, UploadState};
use crate::domain::MediaId;
use crate::events::MediaUploadEvent;

/// The ordered collection of media items behind one gallery block
///
/// Item order is display order and is insertion-order preserving. The
/// collection caption is independent of the per-item captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryCollection {
    /// Caption for the whole gallery
    pub caption: String,

    /// Items in display order
    pub items: Vec<MediaItem>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl GalleryCollection {
    /// Create an empty gallery
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            caption: String::new(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a gallery from already-parsed items, preserving their order
    pub fn from_items(items: Vec<MediaItem>) -> Self {
        let now = Utc::now();
        Self {
            caption: String::new(),
            items,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an item at the end of the display order
    /// Uniqueness of in-flight local ids is the caller's concern (validated
    /// by `validate_gallery`)
    pub fn add_item(&mut self, item: MediaItem) {
        self.items.push(item);
        self.updated_at = Utc::now();
    }

    /// Remove an item by local id (explicit user action)
    pub fn remove_item(&mut self, local_id: MediaId) -> Option<MediaItem> {
        let position = self.items.iter().position(|i| i.local_id == local_id)?;
        self.updated_at = Utc::now();
        Some(self.items.remove(position))
    }

    /// Look up an item by local id
    pub fn item(&self, local_id: MediaId) -> Option<&MediaItem> {
        self.items.iter().find(|i| i.local_id == local_id)
    }

    /// Look up an item mutably by local id
    pub fn item_mut(&mut self, local_id: MediaId) -> Option<&mut MediaItem> {
        self.items.iter_mut().find(|i| i.local_id == local_id)
    }

    /// Fan one upload event out to every item
    /// Each item decides relevance by local id match, so an event that
    /// matches nothing is a no-op for the whole collection
    pub fn apply_upload_event(&mut self, event: &MediaUploadEvent) {
        for item in &mut self.items {
            item.apply_upload_event(event);
        }
    }

    /// Update the gallery caption
    /// Always succeeds, independent of any item's upload state
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
        self.updated_at = Utc::now();
    }

    /// Number of items still waiting on the upload subsystem
    pub fn pending_upload_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| {
                matches!(
                    i.upload_state,
                    UploadState::Pending | UploadState::Uploading { .. }
                )
            })
            .count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for GalleryCollection {
    fn default() -> Self {
        Self::new()
    }
}
