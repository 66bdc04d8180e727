//! Skill categories and proficiency levels, plus the grouping the about page
//! renders.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::skill::application::ports::outgoing::skill_query::SkillView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Tool,
    Other,
}

impl SkillCategory {
    /// Display order in the skill overview.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Language,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Tool,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Framework => "framework",
            SkillCategory::Database => "database",
            SkillCategory::Tool => "tool",
            SkillCategory::Other => "other",
        }
    }
}

impl std::str::FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" => Ok(SkillCategory::Language),
            "framework" => Ok(SkillCategory::Framework),
            "database" => Ok(SkillCategory::Database),
            "tool" => Ok(SkillCategory::Tool),
            "other" => Ok(SkillCategory::Other),
            unknown => Err(format!("unknown skill category: {unknown}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }

    /// Width of the proficiency bar.
    pub fn percent(&self) -> u8 {
        match self {
            Proficiency::Beginner => 25,
            Proficiency::Intermediate => 50,
            Proficiency::Advanced => 75,
            Proficiency::Expert => 100,
        }
    }
}

impl std::str::FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Proficiency::Beginner),
            "intermediate" => Ok(Proficiency::Intermediate),
            "advanced" => Ok(Proficiency::Advanced),
            "expert" => Ok(Proficiency::Expert),
            unknown => Err(format!("unknown proficiency: {unknown}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub items: Vec<SkillView>,
}

/// Splits an already-ordered skill list into per-category groups. Category
/// order is fixed; item order inside each group is the input order. Empty
/// categories are omitted.
pub fn group_by_category(skills: Vec<SkillView>) -> Vec<SkillGroup> {
    SkillCategory::ALL
        .iter()
        .filter_map(|&category| {
            let items: Vec<SkillView> = skills
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(SkillGroup { category, items })
            }
        })
        .collect()
}
