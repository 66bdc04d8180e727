mod get_recent_experiences_service;
mod list_experiences_service;

pub use get_recent_experiences_service::GetRecentExperiencesService;
pub use list_experiences_service::ListExperiencesService;
