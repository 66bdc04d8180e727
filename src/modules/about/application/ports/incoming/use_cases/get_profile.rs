use async_trait::async_trait;

use crate::modules::about::application::ports::outgoing::about_store::{
    AboutStoreError, AboutView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<AboutStoreError> for GetProfileError {
    fn from(err: AboutStoreError) -> Self {
        GetProfileError::QueryFailed(err.to_string())
    }
}

/// Returns the profile singleton, seeding it with default content on the
/// first call ever made against an empty store.
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutView, GetProfileError>;
}
