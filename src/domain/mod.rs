// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod gallery;
pub mod media_item;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Media Item Domain
pub use media_item::{validate_media_item, MediaItem, MediaType, UploadState, FAILURE_NOTICE};

// Gallery Domain
pub use gallery::{validate_gallery, GalleryCollection};

/// Client-assigned and server-assigned media identifiers share this
/// representation; which one a value means depends on where it lives.
pub type MediaId = i64;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Upload progress {progress} is outside 0.0..=1.0")]
    ProgressOutOfRange { progress: f32 },

    #[error("Duplicate local id {local_id} among in-flight uploads")]
    DuplicateLocalId { local_id: MediaId },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
