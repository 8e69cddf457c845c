//! Events Domain
//!
//! Scheduled events with a title, optional description and a time interval,
//! stored in PostgreSQL and served over JSON HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, per-request deadline, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, event construction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Event, CreateEvent, response envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{handlers, EventService, InMemoryEventRepository};
//!
//! let service = EventService::new(InMemoryEventRepository::new());
//! let router = axum::Router::new().nest("/events", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{EventError, EventResult, ValidationError};
pub use handlers::ApiDoc;
pub use models::{CreateEvent, Event, EventResponse, EventsResponse, NewEvent};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
