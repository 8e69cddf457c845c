use std::sync::Arc;
use uuid::Uuid;

use crate::error::EventResult;
use crate::models::{CreateEvent, Event};
use crate::repository::EventRepository;

/// Service layer for Event business logic
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate the request, build the event and store it
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<Event> {
        let valid = input.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected event");
        })?;

        let event = Event::new(valid);
        self.repository
            .create_event(event.clone())
            .await
            .inspect_err(|e| tracing::warn!(event_id = %event.id, error = %e, "Failed to store event"))?;

        Ok(event)
    }

    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        self.repository.get_event_by_id(id).await.inspect_err(|e| {
            if !e.is_not_found() {
                tracing::warn!(event_id = %id, error = %e, "Failed to load event");
            }
        })
    }

    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        self.repository
            .get_all_events()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to list events"))
    }

    /// Release the repository's resources
    pub async fn close(&self) -> EventResult<()> {
        self.repository.close().await
    }
}
