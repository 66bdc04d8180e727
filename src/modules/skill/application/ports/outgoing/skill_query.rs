use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::skill::application::domain::proficiency::{Proficiency, SkillCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillView {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: Proficiency,
    pub sort_order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read-side for skills, ordered sort_order asc, name asc.
#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<SkillView>, SkillQueryError>;
}
