use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::Event;

/// Durable storage for events.
///
/// Callers bound each call with a deadline by dropping the returned future;
/// implementations must tolerate being cancelled at any await point.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event. An existing id is an error, never overwritten.
    async fn create_event(&self, event: Event) -> EventResult<()>;

    /// Fetch one event, `EventError::NotFound` when the id is unknown
    async fn get_event_by_id(&self, id: Uuid) -> EventResult<Event>;

    /// All events, ascending by start time
    async fn get_all_events(&self) -> EventResult<Vec<Event>>;

    /// Release held resources. Safe to call more than once.
    async fn close(&self) -> EventResult<()>;
}

/// In-memory implementation of EventRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create_event(&self, event: Event) -> EventResult<()> {
        let mut events = self.events.write().await;

        match events.entry(event.id) {
            Entry::Occupied(_) => Err(EventError::storage(
                "create event",
                format!("duplicate event id {}", event.id),
            )),
            Entry::Vacant(slot) => {
                tracing::info!(event_id = %event.id, "Created event");
                slot.insert(event);
                Ok(())
            }
        }
    }

    async fn get_event_by_id(&self, id: Uuid) -> EventResult<Event> {
        let events = self.events.read().await;
        events.get(&id).cloned().ok_or(EventError::NotFound(id))
    }

    async fn get_all_events(&self) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;

        let mut result: Vec<Event> = events.values().cloned().collect();
        result.sort_by_key(|e| (e.start_time, e.created_at));

        Ok(result)
    }

    async fn close(&self) -> EventResult<()> {
        Ok(())
    }
}
