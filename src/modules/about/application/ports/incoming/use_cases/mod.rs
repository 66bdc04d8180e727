mod get_profile;
mod get_skill_list;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use get_skill_list::{GetSkillListError, GetSkillListUseCase};
