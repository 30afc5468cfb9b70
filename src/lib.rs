// src/lib.rs
// Gallery Block - media upload synchronization core for a mobile editor
//
// Architecture:
// - Domain-centric: item and collection rules live in domain entities
// - Event-driven: upload progress arrives through a synchronous bus
// - Explicit: no implicit behavior, no magic
// - Host-agnostic: the picker and upload subsystem sit behind boundaries

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod content;
pub mod domain;
pub mod error;
pub mod events;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_gallery,
    validate_media_item,
    // Gallery
    GalleryCollection,
    MediaId,
    // Media Item
    MediaItem,
    MediaType,
    UploadState,
    FAILURE_NOTICE,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventLogEntry,
    MediaUploadEvent,
    UploadEventBus,
    UploadPayload,
    UploadSubscription,
};

// ============================================================================
// PUBLIC API - Persisted Content
// ============================================================================

pub use content::{GalleryDocument, ItemDocument};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Gallery Service
    GalleryService,
    // Media Picker Bridge
    MediaPickerBridge,
    MediaSelection,
    MediaSource,
};
