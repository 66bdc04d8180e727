mod get_skill_overview;

pub use get_skill_overview::{GetSkillOverviewError, GetSkillOverviewUseCase};
