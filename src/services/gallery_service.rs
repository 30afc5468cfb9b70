// src/services/gallery_service.rs
//
// Gallery Service - owns the item collection and routes upload events to it
//
// CRITICAL RULES:
// - Exactly one bus handler per service, no matter how often subscription
//   is requested
// - Events reach items only between subscribe and unsubscribe
// - All operations are local and synchronous; upload failures arrive as
//   Failed events, never as Err

use std::sync::{Arc, Mutex};

use crate::domain::gallery::GalleryCollection;
use crate::domain::media_item::{validate_media_item, MediaItem, MediaType};
use crate::domain::{DomainError, MediaId};
use crate::error::{AppError, AppResult};
use crate::events::{UploadEventBus, UploadSubscription};
use crate::services::media_picker::{MediaPickerBridge, MediaSelection, MediaSource};

pub struct GalleryService {
    collection: Arc<Mutex<GalleryCollection>>,
    event_bus: UploadEventBus,
    subscription: Option<UploadSubscription>,
}

impl GalleryService {
    /// Create a service around an empty gallery
    pub fn new(event_bus: UploadEventBus) -> Self {
        Self::with_collection(GalleryCollection::new(), event_bus)
    }

    /// Create a service around an existing gallery, e.g. one parsed from
    /// persisted content when the editor reopens
    pub fn with_collection(collection: GalleryCollection, event_bus: UploadEventBus) -> Self {
        Self {
            collection: Arc::new(Mutex::new(collection)),
            event_bus,
            subscription: None,
        }
    }

    /// Register the single bus handler for this collection
    ///
    /// Called when the collection becomes active: editor opened with pending
    /// uploads still in flight, or items freshly added. Re-entrant safe; a
    /// prior registration is removed first, never duplicated.
    pub fn subscribe_to_uploads(&mut self) {
        self.unsubscribe_from_uploads();

        let collection = Arc::clone(&self.collection);
        let subscription = self.event_bus.subscribe(move |event| {
            collection.lock().unwrap().apply_upload_event(event);
        });
        self.subscription = Some(subscription);
    }

    /// Deregister the bus handler
    ///
    /// Must be called when the collection is torn down so events stop
    /// reaching it.
    pub fn unsubscribe_from_uploads(&mut self) {
        // Dropping the token deregisters the handler
        self.subscription.take();
    }

    /// Whether upload events currently reach this collection
    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .map(|s| s.is_active())
            .unwrap_or(false)
    }

    /// Append one Pending item per selection, in selection order
    ///
    /// Selections of a non-image type are rejected and skipped. A selection
    /// whose id collides with an existing item, or with another selection in
    /// the same batch, fails the whole batch before anything is added; the
    /// collision would make upload event routing ambiguous.
    ///
    /// Returns the number of items added.
    pub fn add_items_from_selection(
        &self,
        selections: Vec<MediaSelection>,
    ) -> AppResult<usize> {
        let mut collection = self.collection.lock().unwrap();

        let accepted: Vec<&MediaSelection> = selections
            .iter()
            .filter(|selection| {
                if selection.media_type == MediaType::Image {
                    true
                } else {
                    log::warn!(
                        "rejecting selection {} of unsupported type {}",
                        selection.id,
                        selection.media_type
                    );
                    false
                }
            })
            .collect();

        for (index, selection) in accepted.iter().enumerate() {
            let in_batch = accepted[..index]
                .iter()
                .any(|earlier| earlier.id == selection.id);
            if in_batch || collection.item(selection.id).is_some() {
                return Err(AppError::Domain(DomainError::DuplicateLocalId {
                    local_id: selection.id,
                }));
            }
        }

        let added = accepted.len();
        for selection in accepted {
            let item = MediaItem::pending(
                selection.id,
                selection.url.clone(),
                selection.media_type,
            );
            validate_media_item(&item).map_err(AppError::Domain)?;
            collection.add_item(item);
        }

        Ok(added)
    }

    /// Drive the host picker and append whatever the user selected
    ///
    /// Both device-library and camera flows land here; the camera simply
    /// returns a single selection. An empty response (user cancelled) leaves
    /// the collection untouched.
    pub fn add_from_picker(
        &self,
        picker: &dyn MediaPickerBridge,
        source: MediaSource,
    ) -> AppResult<usize> {
        let selections = picker.request_media(source, &[MediaType::Image], true);
        if selections.is_empty() {
            log::debug!("media picker returned no selections");
            return Ok(0);
        }
        self.add_items_from_selection(selections)
    }

    /// Remove an item (explicit user action)
    pub fn remove_item(&self, local_id: MediaId) -> AppResult<MediaItem> {
        self.collection
            .lock()
            .unwrap()
            .remove_item(local_id)
            .ok_or(AppError::NotFound)
    }

    /// Update the gallery-level caption
    /// Succeeds unconditionally, independent of any upload in flight
    pub fn set_collection_caption(&self, caption: impl Into<String>) {
        self.collection.lock().unwrap().set_caption(caption);
    }

    /// Update one item's caption
    pub fn set_item_caption(
        &self,
        local_id: MediaId,
        caption: impl Into<String>,
    ) -> AppResult<()> {
        let mut collection = self.collection.lock().unwrap();
        let item = collection.item_mut(local_id).ok_or(AppError::NotFound)?;
        item.set_caption(caption);
        Ok(())
    }

    /// Snapshot of the whole collection
    pub fn collection(&self) -> GalleryCollection {
        self.collection.lock().unwrap().clone()
    }

    /// Snapshot of one item
    pub fn item(&self, local_id: MediaId) -> Option<MediaItem> {
        self.collection.lock().unwrap().item(local_id).cloned()
    }

    pub fn item_count(&self) -> usize {
        self.collection.lock().unwrap().len()
    }

    /// Number of items still waiting on the upload subsystem
    pub fn pending_upload_count(&self) -> usize {
        self.collection.lock().unwrap().pending_upload_count()
    }
}

impl Drop for GalleryService {
    fn drop(&mut self) {
        // Teardown implies unsubscription; destroyed collections must not
        // receive events
        self.unsubscribe_from_uploads();
    }
}
