mod api_projects;
mod browse_projects;
mod get_project_detail;

pub use api_projects::*;
pub use browse_projects::{browse_projects_handler, BrowseProjectsQuery};
pub use get_project_detail::get_project_detail_handler;
