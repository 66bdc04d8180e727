use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    BrowseProjectsUseCase, GetFeaturedProjectsUseCase, GetProjectDetailUseCase,
    ListPublicProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub browse: Arc<dyn BrowseProjectsUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
    pub list_public: Arc<dyn ListPublicProjectsUseCase + Send + Sync>,
    pub get_featured: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
}
