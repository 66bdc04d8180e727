use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::modules::skill::adapter::outgoing::sea_orm_entity::{self, Column, Entity};
use crate::modules::skill::application::domain::proficiency::{Proficiency, SkillCategory};
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError, SkillView,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_all(&self) -> Result<Vec<SkillView>, SkillQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_view).collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(model: sea_orm_entity::Model) -> Result<SkillView, SkillQueryError> {
    let category = SkillCategory::from_str(&model.category)
        .map_err(SkillQueryError::SerializationError)?;
    let proficiency = Proficiency::from_str(&model.proficiency)
        .map_err(SkillQueryError::SerializationError)?;

    Ok(SkillView {
        id: model.id,
        name: model.name,
        category,
        proficiency,
        sort_order: model.sort_order,
    })
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
