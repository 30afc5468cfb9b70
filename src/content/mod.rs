// src/content/mod.rs
//
// Persisted Content - parsed shape of serialized gallery markup

pub mod document;

pub use document::{GalleryDocument, ItemDocument};
