mod browse_projects;
mod get_featured_projects;
mod get_project_detail;
mod list_public_projects;

pub use browse_projects::{BrowseProjectsError, BrowseProjectsUseCase};
pub use get_featured_projects::{GetFeaturedProjectsError, GetFeaturedProjectsUseCase};
pub use get_project_detail::{GetProjectDetailError, GetProjectDetailUseCase, ProjectDetail};
pub use list_public_projects::{ListPublicProjectsError, ListPublicProjectsUseCase};
