use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    NotSet, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::{self, Column, Entity};
use crate::modules::contact::application::ports::outgoing::contact_message_repository::{
    ContactMessageRecord, ContactMessageRepository, ContactMessageRepositoryError,
    MessagePriority, NewContactMessage,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError> {
        // id, priority, flags and created_at come from column defaults.
        let row = sea_orm_entity::ActiveModel {
            id: NotSet,
            name: Set(message.name),
            email: Set(message.email),
            subject: Set(message.subject),
            message: Set(message.message),
            phone: NotSet,
            company: NotSet,
            priority: NotSet,
            is_read: NotSet,
            is_replied: NotSet,
            reply_message: NotSet,
            created_at: NotSet,
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        model_to_record(row)
    }

    async fn list(
        &self,
        unread_only: bool,
    ) -> Result<Vec<ContactMessageRecord>, ContactMessageRepositoryError> {
        let mut select = Entity::find().order_by_desc(Column::CreatedAt);

        if unread_only {
            select = select.filter(Column::IsRead.eq(false));
        }

        let rows = select.all(&*self.db).await.map_err(map_db_err)?;

        rows.into_iter().map(model_to_record).collect()
    }

    async fn mark_read(&self, ids: &[Uuid]) -> Result<u64, ContactMessageRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.is_in(ids.to_vec()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn record_reply(
        &self,
        id: Uuid,
        reply: String,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactMessageRepositoryError::NotFound)?;

        let mut active = row.into_active_model();
        active.is_replied = Set(true);
        active.reply_message = Set(Some(reply));

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        model_to_record(updated)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(
    model: sea_orm_entity::Model,
) -> Result<ContactMessageRecord, ContactMessageRepositoryError> {
    let priority = MessagePriority::from_str(&model.priority)
        .map_err(ContactMessageRepositoryError::SerializationError)?;

    Ok(ContactMessageRecord {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        phone: model.phone,
        company: model.company,
        priority,
        is_read: model.is_read,
        is_replied: model.is_replied,
        reply_message: model.reply_message,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
