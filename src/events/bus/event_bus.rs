// events/bus/event_bus.rs
//
// Upload event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events → same result
// 3. Observable - every emission is logged
// 4. Scoped - subscriptions are owned tokens, removed on drop
// 5. No magic - explicit, straightforward code

use std::sync::{Arc, RwLock, Weak};

use crate::domain::MediaId;
use crate::events::types::{DomainEvent, MediaUploadEvent};

/// Handler invoked for every emitted upload event
type UploadHandler = Box<dyn Fn(&MediaUploadEvent) + Send + Sync>;

struct Registry {
    next_id: u64,
    /// Handlers in subscription order, keyed by token id
    handlers: Vec<(u64, UploadHandler)>,
}

/// The Upload Event Bus
///
/// The channel through which the host platform reports upload progress,
/// completion and failure. Collection controllers subscribe one handler and
/// fan the events out to their items.
///
/// Key characteristics:
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in subscription order, one event at a time
/// - Unsubscription through owned tokens, not global listener arrays
/// - Observable through logging
pub struct UploadEventBus {
    registry: Arc<RwLock<Registry>>,

    /// Event emission log (for debugging)
    event_log: Arc<RwLock<Vec<EventLogEntry>>>,
}

/// A logged event for debugging and tracing
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub media_id: MediaId,
    pub occurred_at: String,
    pub handler_count: usize,
}

/// Token returned by `UploadEventBus::subscribe`
///
/// The subscription lives as long as the token: dropping it (or calling
/// `remove`) deregisters the handler, so events can never reach a handler
/// whose owner is gone.
pub struct UploadSubscription {
    id: u64,
    registry: Weak<RwLock<Registry>>,
}

impl UploadSubscription {
    /// Deregister the handler
    pub fn remove(self) {
        // Deregistration happens in Drop
    }

    /// Whether the handler is still registered on a live bus
    pub fn is_active(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => {
                let guard = registry.read().unwrap();
                guard.handlers.iter().any(|(id, _)| *id == self.id)
            }
            None => false,
        }
    }
}

impl Drop for UploadSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut guard = registry.write().unwrap();
            guard.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl UploadEventBus {
    /// Create a new upload event bus
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
            event_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe a handler to every upload event
    ///
    /// Handlers are executed in the order they are subscribed. The returned
    /// token must be kept alive for as long as delivery is wanted.
    pub fn subscribe<F>(&self, handler: F) -> UploadSubscription
    where
        F: Fn(&MediaUploadEvent) + Send + Sync + 'static,
    {
        let mut registry = self.registry.write().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Box::new(handler)));

        UploadSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Emit an event
    ///
    /// This will:
    /// 1. Log the event
    /// 2. Execute all handlers in subscription order
    /// 3. Return once every handler has run (synchronous)
    ///
    /// If a handler panics, the panic is caught and logged, but other handlers
    /// still execute.
    pub fn emit(&self, event: &MediaUploadEvent) {
        let registry = self.registry.read().unwrap();
        let handler_count = registry.handlers.len();

        let log_entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id.to_string(),
            media_id: event.media_id,
            occurred_at: event.occurred_at.to_rfc3339(),
            handler_count,
        };

        {
            let mut log = self.event_log.write().unwrap();
            log.push(log_entry.clone());
        }

        log::debug!(
            "[EVENT] {} (media_id: {}) | {} handlers",
            log_entry.event_type,
            log_entry.media_id,
            log_entry.handler_count
        );

        for (id, handler) in &registry.handlers {
            // Catch panics to prevent one handler from breaking others
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(event);
            }));

            if result.is_err() {
                log::warn!(
                    "Handler {} for {} panicked",
                    id,
                    event.event_type()
                );
            }
        }
    }

    /// Get the event log (for debugging)
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log.read().unwrap().clone()
    }

    /// Clear the event log
    pub fn clear_event_log(&self) {
        self.event_log.write().unwrap().clear();
    }

    /// Get the number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.registry.read().unwrap().handlers.len()
    }
}

impl Default for UploadEventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Make UploadEventBus cloneable (shared reference)
impl Clone for UploadEventBus {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            event_log: Arc::clone(&self.event_log),
        }
    }
}
