use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::modules::experience::adapter::outgoing::sea_orm_entity::{self, Column, Entity};
use crate::modules::experience::application::domain::timeline::ExperienceType;
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceQueryError, ExperienceView,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list_all(&self) -> Result<Vec<ExperienceView>, ExperienceQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_view).collect()
    }

    async fn recent(&self, limit: u64) -> Result<Vec<ExperienceView>, ExperienceQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::SortOrder)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_view).collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: sea_orm_entity::Model) -> Result<ExperienceView, ExperienceQueryError> {
    let experience_type = ExperienceType::from_str(&model.experience_type)
        .map_err(ExperienceQueryError::SerializationError)?;

    Ok(ExperienceView {
        id: model.id,
        title: model.title,
        organization: model.organization,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        is_current: model.is_current,
        description: model.description,
        experience_type,
        sort_order: model.sort_order,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
