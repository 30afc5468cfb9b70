// src/events/mod.rs
//
// Upload Event System - Public API
//
// CRITICAL: the handler registry is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::{DomainEvent, MediaUploadEvent, UploadPayload};

pub use bus::{EventLogEntry, UploadEventBus, UploadSubscription};

/// Initialize a new upload event bus
pub fn create_event_bus() -> UploadEventBus {
    UploadEventBus::new()
}
