//! Experience kinds and the grouping used by the about page.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    Work,
    Education,
    Certification,
    Volunteer,
    Freelance,
}

impl ExperienceType {
    /// Display order on the about page.
    pub const ALL: [ExperienceType; 5] = [
        ExperienceType::Work,
        ExperienceType::Education,
        ExperienceType::Certification,
        ExperienceType::Volunteer,
        ExperienceType::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Work => "work",
            ExperienceType::Education => "education",
            ExperienceType::Certification => "certification",
            ExperienceType::Volunteer => "volunteer",
            ExperienceType::Freelance => "freelance",
        }
    }
}

impl std::str::FromStr for ExperienceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(ExperienceType::Work),
            "education" => Ok(ExperienceType::Education),
            "certification" => Ok(ExperienceType::Certification),
            "volunteer" => Ok(ExperienceType::Volunteer),
            "freelance" => Ok(ExperienceType::Freelance),
            other => Err(format!("unknown experience type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExperienceGroup {
    pub experience_type: ExperienceType,
    pub items: Vec<ExperienceView>,
}

/// Splits an already-ordered timeline into per-type groups. Group order is
/// fixed; item order inside each group is the input order. Empty groups are
/// omitted.
pub fn group_by_type(experiences: Vec<ExperienceView>) -> Vec<ExperienceGroup> {
    ExperienceType::ALL
        .iter()
        .filter_map(|&experience_type| {
            let items: Vec<ExperienceView> = experiences
                .iter()
                .filter(|e| e.experience_type == experience_type)
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(ExperienceGroup {
                    experience_type,
                    items,
                })
            }
        })
        .collect()
}
