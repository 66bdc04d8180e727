mod get_skill_overview_service;

pub use get_skill_overview_service::GetSkillOverviewService;
