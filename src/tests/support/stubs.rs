//! Default stand-ins for every use case. Route tests swap in a purpose-built
//! mock for the handler under test and leave the rest as these stubs.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::about::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, GetSkillListError, GetSkillListUseCase,
};
use crate::about::application::ports::outgoing::about_store::AboutView;
use crate::contact::application::domain::intake::ContactSubmission;
use crate::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase, MarkMessagesReadError,
    MarkMessagesReadUseCase, ReplyToMessageError, ReplyToMessageUseCase, SubmissionReceipt,
    SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::contact::application::ports::outgoing::contact_message_repository::ContactMessageRecord;
use crate::experience::application::ports::incoming::use_cases::{
    GetRecentExperiencesError, GetRecentExperiencesUseCase, ListExperiencesError,
    ListExperiencesUseCase,
};
use crate::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::project::application::domain::catalog::{BrowseRequest, BrowseResult};
use crate::project::application::ports::incoming::use_cases::{
    BrowseProjectsError, BrowseProjectsUseCase, GetFeaturedProjectsError,
    GetFeaturedProjectsUseCase, GetProjectDetailError, GetProjectDetailUseCase,
    ListPublicProjectsError, ListPublicProjectsUseCase, ProjectDetail,
};
use crate::project::application::ports::outgoing::project_query::ProjectView;
use crate::skill::application::domain::proficiency::SkillGroup;
use crate::skill::application::ports::incoming::use_cases::{
    GetSkillOverviewError, GetSkillOverviewUseCase,
};

fn stub_profile() -> AboutView {
    let now = Utc::now();

    AboutView {
        id: Uuid::new_v4(),
        name: "Stub Name".to_string(),
        headline: "Stub Headline".to_string(),
        description: "Stub description".to_string(),
        profile_image_url: None,
        resume_url: None,
        github_username: "stub".to_string(),
        telegram_username: "stub".to_string(),
        blog_handle: "@stub".to_string(),
        channel_handle: "@stub".to_string(),
        skills: vec!["Rust".to_string()],
        created_at: now,
        updated_at: now,
    }
}

/* --------------------------------------------------
 * About
 * -------------------------------------------------- */

pub struct StubGetProfile {
    fail: bool,
}

impl StubGetProfile {
    pub fn success() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl GetProfileUseCase for StubGetProfile {
    async fn execute(&self) -> Result<AboutView, GetProfileError> {
        if self.fail {
            Err(GetProfileError::QueryFailed("stub failure".to_string()))
        } else {
            Ok(stub_profile())
        }
    }
}

pub struct StubGetSkillList;

#[async_trait]
impl GetSkillListUseCase for StubGetSkillList {
    async fn execute(&self) -> Result<Vec<String>, GetSkillListError> {
        Ok(vec!["Rust".to_string()])
    }
}

/* --------------------------------------------------
 * Experience
 * -------------------------------------------------- */

pub struct StubListExperiences {
    fail: bool,
}

impl StubListExperiences {
    pub fn success() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ListExperiencesUseCase for StubListExperiences {
    async fn execute(&self) -> Result<Vec<ExperienceView>, ListExperiencesError> {
        if self.fail {
            Err(ListExperiencesError::QueryFailed("stub failure".to_string()))
        } else {
            Ok(Vec::new())
        }
    }
}

pub struct StubGetRecentExperiences {
    fail: bool,
}

impl StubGetRecentExperiences {
    pub fn success() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl GetRecentExperiencesUseCase for StubGetRecentExperiences {
    async fn execute(
        &self,
        _limit: u64,
    ) -> Result<Vec<ExperienceView>, GetRecentExperiencesError> {
        if self.fail {
            Err(GetRecentExperiencesError::QueryFailed(
                "stub failure".to_string(),
            ))
        } else {
            Ok(Vec::new())
        }
    }
}

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

pub struct StubBrowseProjects;

#[async_trait]
impl BrowseProjectsUseCase for StubBrowseProjects {
    async fn execute(&self, _request: BrowseRequest) -> Result<BrowseResult, BrowseProjectsError> {
        Ok(BrowseResult {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            facets: Vec::new(),
        })
    }
}

pub struct StubGetProjectDetail;

#[async_trait]
impl GetProjectDetailUseCase for StubGetProjectDetail {
    async fn execute(&self, _project_id: Uuid) -> Result<ProjectDetail, GetProjectDetailError> {
        Err(GetProjectDetailError::NotFound)
    }
}

pub struct StubListPublicProjects;

#[async_trait]
impl ListPublicProjectsUseCase for StubListPublicProjects {
    async fn execute(&self) -> Result<Vec<ProjectView>, ListPublicProjectsError> {
        Ok(Vec::new())
    }
}

pub struct StubGetFeaturedProjects {
    fail: bool,
}

impl StubGetFeaturedProjects {
    pub fn success() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl GetFeaturedProjectsUseCase for StubGetFeaturedProjects {
    async fn execute(&self, _limit: u64) -> Result<Vec<ProjectView>, GetFeaturedProjectsError> {
        if self.fail {
            Err(GetFeaturedProjectsError::QueryFailed(
                "stub failure".to_string(),
            ))
        } else {
            Ok(Vec::new())
        }
    }
}

/* --------------------------------------------------
 * Skill
 * -------------------------------------------------- */

pub struct StubGetSkillOverview {
    fail: bool,
}

impl StubGetSkillOverview {
    pub fn success() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl GetSkillOverviewUseCase for StubGetSkillOverview {
    async fn execute(&self) -> Result<Vec<SkillGroup>, GetSkillOverviewError> {
        if self.fail {
            Err(GetSkillOverviewError::QueryFailed("stub failure".to_string()))
        } else {
            Ok(Vec::new())
        }
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

pub struct StubSubmitContact;

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContact {
    async fn execute(
        &self,
        _submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, SubmitContactMessageError> {
        Ok(SubmissionReceipt {
            id: Uuid::new_v4(),
            message: "Thank you for your message! I'll get back to you soon.".to_string(),
        })
    }
}

pub struct StubListMessages;

#[async_trait]
impl ListContactMessagesUseCase for StubListMessages {
    async fn execute(
        &self,
        _unread_only: bool,
    ) -> Result<Vec<ContactMessageRecord>, ListContactMessagesError> {
        Ok(Vec::new())
    }
}

pub struct StubMarkMessagesRead;

#[async_trait]
impl MarkMessagesReadUseCase for StubMarkMessagesRead {
    async fn execute(&self, _ids: Vec<Uuid>) -> Result<u64, MarkMessagesReadError> {
        Ok(0)
    }
}

pub struct StubReplyToMessage;

#[async_trait]
impl ReplyToMessageUseCase for StubReplyToMessage {
    async fn execute(
        &self,
        _id: Uuid,
        _reply: String,
    ) -> Result<ContactMessageRecord, ReplyToMessageError> {
        Err(ReplyToMessageError::NotFound)
    }
}
