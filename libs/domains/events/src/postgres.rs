use async_trait::async_trait;
use database::common::RetryConfig;
use database::postgres::{self, PostgresConfig};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use crate::{
    entity,
    error::{EventError, EventResult},
    models::Event,
    repository::EventRepository,
};

/// PostgreSQL-backed repository owning the connection pool
pub struct PgEventRepository {
    db: DatabaseConnection,
    closed: AtomicBool,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            closed: AtomicBool::new(false),
        }
    }

    /// Open the pool described by `config`, retrying transient failures.
    ///
    /// Fails when the server is still unreachable once retries are spent.
    pub async fn connect(config: PostgresConfig, retry: Option<RetryConfig>) -> Result<Self, DbErr> {
        let db = postgres::connect_from_config_with_retry(config, retry).await?;
        Ok(Self::new(db))
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create_event(&self, event: Event) -> EventResult<()> {
        let id = event.id;
        let active_model: entity::ActiveModel = event.into();

        entity::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| EventError::storage("create event", format!("event_id={}: {}", id, e)))?;

        tracing::info!(event_id = %id, "Created event");
        Ok(())
    }

    async fn get_event_by_id(&self, id: Uuid) -> EventResult<Event> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EventError::storage("get event", format!("event_id={}: {}", id, e)))?
            .map(Event::from)
            .ok_or(EventError::NotFound(id))
    }

    async fn get_all_events(&self) -> EventResult<Vec<Event>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::StartTime)
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| EventError::storage("list events", e))?;

        Ok(models.into_iter().map(Event::from).collect())
    }

    async fn close(&self) -> EventResult<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        self.db
            .close_by_ref()
            .await
            .map_err(|e| EventError::storage("close connection pool", e))?;

        tracing::info!("PostgreSQL connection pool closed");
        Ok(())
    }
}
