use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::shared::text::slug::slugify;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // JSONB string array; comma-string form only exists at the text boundary
    #[sea_orm(column_type = "JsonBinary")]
    pub frameworks: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    pub is_featured: bool,

    pub is_public: bool,

    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            let title = title.trim().to_string();

            // Slug is derived exactly once, at creation, and never recomputed.
            if insert && !matches!(self.slug, ActiveValue::Set(ref s) if !s.is_empty()) {
                self.slug = Set(slugify(&title));
            }

            self.title = Set(title);
        }

        if !insert {
            use chrono::Utc;
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
