mod browse_projects_service;
mod get_featured_projects_service;
mod get_project_detail_service;
mod list_public_projects_service;

pub use browse_projects_service::BrowseProjectsService;
pub use get_featured_projects_service::GetFeaturedProjectsService;
pub use get_project_detail_service::GetProjectDetailService;
pub use list_public_projects_service::ListPublicProjectsService;
