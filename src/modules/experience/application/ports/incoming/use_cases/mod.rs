mod get_recent_experiences;
mod list_experiences;

pub use get_recent_experiences::{GetRecentExperiencesError, GetRecentExperiencesUseCase};
pub use list_experiences::{ListExperiencesError, ListExperiencesUseCase};
