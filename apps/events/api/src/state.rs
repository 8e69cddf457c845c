//! Shared application state

use database::postgres::DatabaseConnection;
use domain_events::{EventService, PgEventRepository};

/// Cloned into handlers; every field is a cheap handle to shared resources.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Pool handle used by the readiness probe
    pub db: DatabaseConnection,
    pub events: EventService<PgEventRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config, db: DatabaseConnection) -> Self {
        let events = EventService::new(PgEventRepository::new(db.clone()));
        Self { config, db, events }
    }
}
