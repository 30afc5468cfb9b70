// src/content/document.rs
//
// Parsed in-memory shape of a persisted gallery
//
// The textual grammar (block markup) is owned by an external serializer; this
// module only defines the structured form it parses into and the rules for
// mapping it to and from the live collection.

use serde::{Deserialize, Serialize};

use crate::domain::gallery::GalleryCollection;
use crate::domain::media_item::{MediaItem, MediaType, UploadState};
use crate::domain::MediaId;
use crate::error::AppResult;

/// URL schemes that denote a device-local, not-yet-uploaded resource
const LOCAL_URL_SCHEMES: [&str; 3] = ["file://", "content://", "ph://"];

fn is_local_url(url: &str) -> bool {
    LOCAL_URL_SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// One persisted gallery item
///
/// A settled item carries its server id and URL and no local-only fields.
/// An item persisted mid-upload carries its local id and device-local URL so
/// the upload can be picked up again when the editor reopens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    pub id: MediaId,
    pub url: String,
    #[serde(default)]
    pub caption: String,
}

/// The persisted form of a whole gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryDocument {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub items: Vec<ItemDocument>,
}

impl GalleryDocument {
    /// Project the live collection into its persisted form
    pub fn from_collection(collection: &GalleryCollection) -> Self {
        let items = collection
            .items
            .iter()
            .map(|item| {
                let (id, url) = match (
                    &item.upload_state,
                    item.server_id,
                    item.server_url.as_ref(),
                ) {
                    (UploadState::Succeeded, Some(server_id), Some(server_url)) => {
                        (server_id, server_url.clone())
                    }
                    // Still in flight (or failed): persist local identity so
                    // the upload survives closing the editor
                    _ => (item.local_id, item.local_url.clone()),
                };
                ItemDocument {
                    id,
                    url,
                    caption: item.caption.clone(),
                }
            })
            .collect();

        Self {
            caption: collection.caption.clone(),
            items,
        }
    }

    /// Rebuild a live collection from persisted form
    ///
    /// Items with a device-local URL come back Pending, awaiting their bus
    /// events; everything else is a settled upload carrying server identity.
    pub fn into_collection(self) -> GalleryCollection {
        let items = self
            .items
            .into_iter()
            .map(|doc| {
                let mut item = if is_local_url(&doc.url) {
                    MediaItem::pending(doc.id, doc.url, MediaType::Image)
                } else {
                    MediaItem::uploaded(doc.id, doc.url, MediaType::Image)
                };
                item.caption = doc.caption;
                item
            })
            .collect();

        let mut collection = GalleryCollection::from_items(items);
        collection.caption = self.caption;
        collection
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
