use async_trait::async_trait;

use crate::modules::about::application::ports::incoming::use_cases::{
    GetSkillListError, GetSkillListUseCase,
};
use crate::modules::about::application::ports::outgoing::about_store::AboutStore;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetSkillListService<S>
where
    S: AboutStore,
{
    store: S,
}

impl<S> GetSkillListService<S>
where
    S: AboutStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetSkillListUseCase for GetSkillListService<S>
where
    S: AboutStore + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetSkillListError> {
        let profile = self
            .store
            .find_first()
            .await?
            .ok_or(GetSkillListError::NotFound)?;

        Ok(profile.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::about::application::ports::outgoing::about_store::{
        AboutStoreError, AboutView, NewAbout,
    };

    struct MockAboutStore {
        result: Result<Option<AboutView>, AboutStoreError>,
    }

    #[async_trait]
    impl AboutStore for MockAboutStore {
        async fn find_first(&self) -> Result<Option<AboutView>, AboutStoreError> {
            self.result.clone()
        }

        async fn insert(&self, _profile: NewAbout) -> Result<AboutView, AboutStoreError> {
            unimplemented!("skill listing never seeds the profile")
        }
    }

    fn profile_with_skills(skills: &[&str]) -> AboutView {
        let now = Utc::now();
        AboutView {
            id: Uuid::new_v4(),
            name: "Name".to_string(),
            headline: "Headline".to_string(),
            description: "Description".to_string(),
            profile_image_url: None,
            resume_url: None,
            github_username: "gh".to_string(),
            telegram_username: "tg".to_string(),
            blog_handle: "@blog".to_string(),
            channel_handle: "@channel".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn execute_returns_skills_from_profile() {
        let service = GetSkillListService::new(MockAboutStore {
            result: Ok(Some(profile_with_skills(&["Rust", "Actix"]))),
        });

        let skills = service.execute().await.unwrap();

        assert_eq!(skills, vec!["Rust", "Actix"]);
    }

    #[tokio::test]
    async fn execute_reports_not_found_for_empty_store() {
        let service = GetSkillListService::new(MockAboutStore { result: Ok(None) });

        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, GetSkillListError::NotFound));
    }

    #[tokio::test]
    async fn execute_maps_store_error() {
        let service = GetSkillListService::new(MockAboutStore {
            result: Err(AboutStoreError::DatabaseError("db down".to_string())),
        });

        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, GetSkillListError::QueryFailed(_)));
    }
}
