use async_trait::async_trait;
use tracing::info;

use crate::modules::about::application::domain::profile::default_profile;
use crate::modules::about::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::about::application::ports::outgoing::about_store::{AboutStore, AboutView};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProfileService<S>
where
    S: AboutStore,
{
    store: S,
}

impl<S> GetProfileService<S>
where
    S: AboutStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetProfileUseCase for GetProfileService<S>
where
    S: AboutStore + Send + Sync,
{
    async fn execute(&self) -> Result<AboutView, GetProfileError> {
        if let Some(profile) = self.store.find_first().await? {
            return Ok(profile);
        }

        info!("no profile row found, seeding default content");

        Ok(self.store.insert(default_profile()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::about::application::ports::outgoing::about_store::{
        AboutStoreError, NewAbout,
    };

    /* --------------------------------------------------
     * Mock AboutStore
     * -------------------------------------------------- */

    struct MockAboutStore {
        row: Mutex<Option<AboutView>>,
        inserts: AtomicU32,
        fail: bool,
    }

    impl MockAboutStore {
        fn empty() -> Self {
            Self {
                row: Mutex::new(None),
                inserts: AtomicU32::new(0),
                fail: false,
            }
        }

        fn with_row(view: AboutView) -> Self {
            Self {
                row: Mutex::new(Some(view)),
                inserts: AtomicU32::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                row: Mutex::new(None),
                inserts: AtomicU32::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl AboutStore for MockAboutStore {
        async fn find_first(&self) -> Result<Option<AboutView>, AboutStoreError> {
            if self.fail {
                return Err(AboutStoreError::DatabaseError("db down".to_string()));
            }
            Ok(self.row.lock().unwrap().clone())
        }

        async fn insert(&self, profile: NewAbout) -> Result<AboutView, AboutStoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);

            let now = Utc::now();
            let view = AboutView {
                id: Uuid::new_v4(),
                name: profile.name,
                headline: profile.headline,
                description: profile.description,
                profile_image_url: profile.profile_image_url,
                resume_url: profile.resume_url,
                github_username: profile.github_username,
                telegram_username: profile.telegram_username,
                blog_handle: profile.blog_handle,
                channel_handle: profile.channel_handle,
                skills: profile.skills,
                created_at: now,
                updated_at: now,
            };
            *self.row.lock().unwrap() = Some(view.clone());
            Ok(view)
        }
    }

    fn existing_profile() -> AboutView {
        let now = Utc::now();
        AboutView {
            id: Uuid::new_v4(),
            name: "Existing Name".to_string(),
            headline: "Existing Headline".to_string(),
            description: "Existing description".to_string(),
            profile_image_url: None,
            resume_url: None,
            github_username: "existing".to_string(),
            telegram_username: "existing".to_string(),
            blog_handle: "@existing".to_string(),
            channel_handle: "@existing".to_string(),
            skills: vec!["Rust".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn execute_returns_existing_row_without_inserting() {
        let service = GetProfileService::new(MockAboutStore::with_row(existing_profile()));

        let profile = service.execute().await.unwrap();

        assert_eq!(profile.name, "Existing Name");
        assert_eq!(service.store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn execute_seeds_default_content_once_for_empty_store() {
        let service = GetProfileService::new(MockAboutStore::empty());

        let first = service.execute().await.unwrap();
        let second = service.execute().await.unwrap();

        // One insert total; the second fetch sees the seeded row.
        assert_eq!(service.store.inserts.load(Ordering::SeqCst), 1);
        assert_eq!(first.id, second.id);
        assert!(!first.skills.is_empty());
    }

    #[tokio::test]
    async fn execute_maps_store_error() {
        let service = GetProfileService::new(MockAboutStore::failing());

        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, GetProfileError::QueryFailed(_)));
    }
}
