mod get_profile_service;
mod get_skill_list_service;

pub use get_profile_service::GetProfileService;
pub use get_skill_list_service::GetSkillListService;
