use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ValidationError;

/// Maximum title length, in characters
pub const MAX_TITLE_LENGTH: usize = 100;

/// A scheduled event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating an event.
///
/// Missing or `null` fields deserialize to their unset value so that
/// validation, not decoding, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateEvent {
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(max_length = 100, example = "Standup")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `0001-01-01T00:00:00Z`, which clients send to mean "no time given"
const UNSET_INSTANT_SECS: i64 = -62_135_596_800;

/// Drop the unset instant and cut to the microsecond resolution PostgreSQL
/// stores, so validation sees exactly what will be persisted.
fn stored_time(time: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    time.filter(|t| !(t.timestamp() == UNSET_INSTANT_SECS && t.timestamp_subsec_nanos() == 0))
        .map(truncate_to_micros)
}

fn truncate_to_micros(time: DateTime<Utc>) -> DateTime<Utc> {
    time.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(time)
}

/// A create request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CreateEvent {
    /// Check the request, reporting the first failing rule.
    ///
    /// Order: title present, title length, start present, end present,
    /// start strictly before end. Times are compared at microsecond resolution.
    pub fn validate(self) -> Result<NewEvent, ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong);
        }
        let start_time = stored_time(self.start_time).ok_or(ValidationError::StartTimeRequired)?;
        let end_time = stored_time(self.end_time).ok_or(ValidationError::EndTimeRequired)?;
        if start_time >= end_time {
            return Err(ValidationError::StartNotBeforeEnd);
        }

        Ok(NewEvent {
            title: self.title,
            description: self.description,
            start_time,
            end_time,
        })
    }
}

impl Event {
    /// Assign an id and creation time to a validated request.
    ///
    /// `created_at` is truncated to microseconds, the resolution PostgreSQL
    /// stores, so a stored event reads back unchanged.
    pub fn new(input: NewEvent) -> Self {
        let created_at = truncate_to_micros(Utc::now());

        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            start_time: input.start_time,
            end_time: input.end_time,
            created_at,
        }
    }
}

/// `{"event": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event: Event,
}

/// `{"events": [...], "count": N}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventsResponse {
    pub events: Vec<Event>,
    pub count: usize,
}

impl From<Vec<Event>> for EventsResponse {
    fn from(events: Vec<Event>) -> Self {
        Self {
            count: events.len(),
            events,
        }
    }
}
