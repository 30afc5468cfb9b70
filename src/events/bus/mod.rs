pub mod event_bus;

pub use event_bus::{EventLogEntry, UploadEventBus, UploadSubscription};
