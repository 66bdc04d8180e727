use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set};

use crate::modules::about::adapter::outgoing::sea_orm_entity::{self, Column, Entity};
use crate::modules::about::application::ports::outgoing::about_store::{
    AboutStore, AboutStoreError, AboutView, NewAbout,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct AboutStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AboutStore for AboutStorePostgres {
    async fn find_first(&self) -> Result<Option<AboutView>, AboutStoreError> {
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(model_to_view).transpose()
    }

    async fn insert(&self, profile: NewAbout) -> Result<AboutView, AboutStoreError> {
        let skills = serde_json::to_value(&profile.skills)
            .map_err(|e| AboutStoreError::SerializationError(e.to_string()))?;

        let row = sea_orm_entity::ActiveModel {
            id: NotSet,
            name: Set(profile.name),
            headline: Set(profile.headline),
            description: Set(profile.description),
            profile_image_url: Set(profile.profile_image_url),
            resume_url: Set(profile.resume_url),
            github_username: Set(profile.github_username),
            telegram_username: Set(profile.telegram_username),
            blog_handle: Set(profile.blog_handle),
            channel_handle: Set(profile.channel_handle),
            skills: Set(skills),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        model_to_view(row)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: sea_orm_entity::Model) -> Result<AboutView, AboutStoreError> {
    let skills = serde_json::from_value(model.skills.clone())
        .map_err(|e| AboutStoreError::SerializationError(e.to_string()))?;

    Ok(AboutView {
        id: model.id,
        name: model.name,
        headline: model.headline,
        description: model.description,
        profile_image_url: model.profile_image_url,
        resume_url: model.resume_url,
        github_username: model.github_username,
        telegram_username: model.telegram_username,
        blog_handle: model.blog_handle,
        channel_handle: model.channel_handle,
        skills,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> AboutStoreError {
    AboutStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
