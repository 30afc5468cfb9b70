pub mod entity;
pub mod invariants;

pub use entity::{MediaItem, MediaType, UploadState, FAILURE_NOTICE};
pub use invariants::validate_media_item;
