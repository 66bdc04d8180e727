use chrono::Utc;
use uuid::Uuid;

use crate::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::text::slug::slugify;

pub fn sample_project_view(title: &str) -> ProjectView {
    let now = Utc::now();

    ProjectView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: slugify(title),
        description: "A sample project used in route tests".to_string(),
        frameworks: vec!["Rust".to_string(), "Actix".to_string()],
        project_link: Some("https://example.com".to_string()),
        github_link: Some("https://github.com/example/sample".to_string()),
        demo_link: None,
        image_url: None,
        is_featured: false,
        is_public: true,
        sort_order: 0,
        created_at: now,
        updated_at: now,
    }
}
