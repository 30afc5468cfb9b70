use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::MediaId;
use crate::events::{MediaUploadEvent, UploadPayload};

/// User-facing notice rendered on an item whose upload failed
pub const FAILURE_NOTICE: &str = "Failed to insert media";

/// Kind of media a gallery entry holds
/// Only images are accepted today; other kinds are rejected at add time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
            MediaType::Audio => write!(f, "audio"),
        }
    }
}

/// Upload lifecycle of a single media item
///
/// Pending → Uploading → {Succeeded | Failed}
/// Succeeded and Failed are terminal for the attempt; a retry is a new item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UploadState {
    Pending,
    Uploading { progress: f32 },
    Succeeded,
    Failed,
}

/// One media entry within a gallery, independently uploadable and captionable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Client-assigned identifier, stable for the lifetime of the pending upload
    pub local_id: MediaId,

    /// Device-local resource reference, present from creation
    pub local_url: String,

    /// Remote identifier; set once on successful upload, immutable after
    pub server_id: Option<MediaId>,

    /// Remote resource reference; same lifecycle as server_id
    pub server_url: Option<String>,

    /// Current position in the upload lifecycle
    pub upload_state: UploadState,

    /// User-editable caption, independent of upload state
    pub caption: String,

    /// Kind of media this entry holds
    pub media_type: MediaType,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl MediaItem {
    /// Create an item from a fresh picker/camera selection
    /// The upload has not started yet; the first matching bus event moves it on
    pub fn pending(local_id: MediaId, local_url: String, media_type: MediaType) -> Self {
        let now = Utc::now();
        Self {
            local_id,
            local_url,
            server_id: None,
            server_url: None,
            upload_state: UploadState::Pending,
            caption: String::new(),
            media_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an item from persisted content that already carries server identity
    pub fn uploaded(server_id: MediaId, server_url: String, media_type: MediaType) -> Self {
        let now = Utc::now();
        Self {
            local_id: server_id,
            local_url: server_url.clone(),
            server_id: Some(server_id),
            server_url: Some(server_url),
            upload_state: UploadState::Succeeded,
            caption: String::new(),
            media_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Consume one upload event from the bus
    ///
    /// Events whose media_id does not match this item's local_id are ignored
    /// with no side effect. Terminal states absorb every later event for the
    /// attempt, which makes re-delivery of a terminal event a no-op.
    pub fn apply_upload_event(&mut self, event: &MediaUploadEvent) {
        if event.media_id != self.local_id {
            return;
        }
        if self.is_terminal() {
            return;
        }

        match &event.payload {
            UploadPayload::Uploading { progress } => {
                self.upload_state = UploadState::Uploading {
                    progress: *progress,
                };
            }
            UploadPayload::Succeeded {
                media_url,
                media_server_id,
            } => {
                self.server_id = Some(*media_server_id);
                self.server_url = Some(media_url.clone());
                self.upload_state = UploadState::Succeeded;
            }
            UploadPayload::Failed => {
                // local_id and local_url are retained for user-initiated
                // retry or removal
                self.upload_state = UploadState::Failed;
            }
        }

        self.updated_at = Utc::now();
    }

    /// Update the caption
    /// Always succeeds; captions are independent of the upload lifecycle
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
        self.updated_at = Utc::now();
    }

    /// The resource reference the renderer should display right now
    pub fn display_url(&self) -> &str {
        match (&self.upload_state, self.server_url.as_deref()) {
            (UploadState::Succeeded, Some(url)) => url,
            _ => &self.local_url,
        }
    }

    /// Whether the renderer should show a loading indicator
    pub fn is_loading(&self) -> bool {
        matches!(
            self.upload_state,
            UploadState::Pending | UploadState::Uploading { .. }
        )
    }

    /// Determinate progress, if the upload has reported any
    pub fn progress(&self) -> Option<f32> {
        match self.upload_state {
            UploadState::Uploading { progress } => Some(progress),
            _ => None,
        }
    }

    /// Inline notice text to render while the item is in the failed state
    pub fn failure_notice(&self) -> Option<&'static str> {
        match self.upload_state {
            UploadState::Failed => Some(FAILURE_NOTICE),
            _ => None,
        }
    }

    /// Whether the upload attempt has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.upload_state,
            UploadState::Succeeded | UploadState::Failed
        )
    }
}
