use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::Event;

/// Sea-ORM Entity for the events table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_time: DateTimeWithTimeZone,
    pub end_time: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Mount point of the events router
    pub const URL: &'static str = "/events";
    /// OpenAPI tag
    pub const TAG: &'static str = "events";
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            start_time: model.start_time.into(),
            end_time: model.end_time.into(),
            created_at: model.created_at.into(),
        }
    }
}

impl From<Event> for ActiveModel {
    fn from(event: Event) -> Self {
        ActiveModel {
            id: Set(event.id),
            title: Set(event.title),
            description: Set(event.description),
            start_time: Set(event.start_time.into()),
            end_time: Set(event.end_time.into()),
            created_at: Set(event.created_at.into()),
        }
    }
}
