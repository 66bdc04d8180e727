mod api_skills;

pub use api_skills::*;
