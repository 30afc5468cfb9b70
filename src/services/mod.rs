// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod gallery_service;
pub mod media_picker;


// Re-export all services and their types
pub use gallery_service::GalleryService;

pub use media_picker::{MediaPickerBridge, MediaSelection, MediaSource};
