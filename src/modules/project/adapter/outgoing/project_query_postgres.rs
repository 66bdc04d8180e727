// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{self, Column, Entity};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_public(&self) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let projects = Entity::find()
            .filter(Column::IsPublic.eq(true))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        projects.into_iter().map(model_to_view).collect()
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        let project = Entity::find_by_id(project_id)
            .filter(Column::IsPublic.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_view(project)
    }

    async fn featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let projects = Entity::find()
            .filter(Column::IsPublic.eq(true))
            .filter(Column::IsFeatured.eq(true))
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        projects.into_iter().map(model_to_view).collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: sea_orm_entity::Model) -> Result<ProjectView, ProjectQueryError> {
    Ok(ProjectView {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        frameworks: from_json(&model.frameworks)?,
        project_link: model.project_link,
        github_link: model.github_link,
        demo_link: model.demo_link,
        image_url: model.image_url,
        is_featured: model.is_featured,
        is_public: model.is_public,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
