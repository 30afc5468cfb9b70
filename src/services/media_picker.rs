// src/services/media_picker.rs
//
// Media Picker Bridge - boundary to the host platform's media selection UI
//
// CRITICAL RULES:
// - The host invokes the picker UI; this crate only consumes the result
// - One request yields exactly one response
// - An empty response means the user cancelled

use crate::domain::{MediaId, MediaType};

/// Where the host platform sources media from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    DeviceMediaLibrary,
    DeviceCamera,
}

/// One entry returned by the host media picker
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSelection {
    pub media_type: MediaType,
    pub url: String,
    pub id: MediaId,
}

/// Host-platform media picker
///
/// Implemented by the embedding application; mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait MediaPickerBridge: Send + Sync {
    /// Request media from the given source
    ///
    /// Returns the user's selections in selection order. The returned ids are
    /// client-assigned local ids; uploads for them are reported later through
    /// the upload event bus.
    fn request_media(
        &self,
        source: MediaSource,
        allowed_types: &[MediaType],
        multiple: bool,
    ) -> Vec<MediaSelection>;
}
