// events/types.rs
//
// Upload events delivered by the host platform's media upload subsystem.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::MediaId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// State carried by an upload event
///
/// A tagged variant rather than a string-typed state field, so each case's
/// required data is statically enforced: progress only exists while
/// uploading, server identity only arrives on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UploadPayload {
    Uploading {
        /// Fraction complete, 0.0..=1.0
        progress: f32,
    },
    Succeeded {
        media_url: String,
        media_server_id: MediaId,
    },
    Failed,
}

/// One notification from the upload subsystem about a single media item
///
/// Routed to items by media_id; items whose local_id does not match ignore
/// the event silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUploadEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub media_id: MediaId,
    pub payload: UploadPayload,
}

impl MediaUploadEvent {
    pub fn uploading(media_id: MediaId, progress: f32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            payload: UploadPayload::Uploading { progress },
        }
    }

    pub fn succeeded(media_id: MediaId, media_url: String, media_server_id: MediaId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            payload: UploadPayload::Succeeded {
                media_url,
                media_server_id,
            },
        }
    }

    pub fn failed(media_id: MediaId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            payload: UploadPayload::Failed,
        }
    }
}

impl DomainEvent for MediaUploadEvent {
    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_type(&self) -> &'static str {
        match self.payload {
            UploadPayload::Uploading { .. } => "MediaUploadUploading",
            UploadPayload::Succeeded { .. } => "MediaUploadSucceeded",
            UploadPayload::Failed => "MediaUploadFailed",
        }
    }
}
