use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 254)]
    pub email: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub subject: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    #[sea_orm(column_type = "Text", string_len = 30, nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 200, nullable)]
    pub company: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 10)]
    pub priority: String,

    pub is_read: bool,

    pub is_replied: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub reply_message: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
