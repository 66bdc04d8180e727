use std::sync::Arc;

use actix_web::web;

use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::ports::incoming::use_cases::{
    GetProfileUseCase, GetSkillListUseCase,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    ListContactMessagesUseCase, MarkMessagesReadUseCase, ReplyToMessageUseCase,
    SubmitContactMessageUseCase,
};
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::incoming::use_cases::{
    GetRecentExperiencesUseCase, ListExperiencesUseCase,
};
use crate::project::application::ports::incoming::use_cases::{
    BrowseProjectsUseCase, GetFeaturedProjectsUseCase, GetProjectDetailUseCase,
    ListPublicProjectsUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::site::application::config::SiteConfig;
use crate::skill::application::ports::incoming::use_cases::GetSkillOverviewUseCase;
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    get_skill_list: Arc<dyn GetSkillListUseCase + Send + Sync>,
    list_experiences: Arc<dyn ListExperiencesUseCase + Send + Sync>,
    get_recent_experiences: Arc<dyn GetRecentExperiencesUseCase + Send + Sync>,
    browse_projects: Arc<dyn BrowseProjectsUseCase + Send + Sync>,
    get_project_detail: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
    list_public_projects: Arc<dyn ListPublicProjectsUseCase + Send + Sync>,
    get_featured_projects: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
    get_skill_overview: Arc<dyn GetSkillOverviewUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    list_messages: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
    mark_messages_read: Arc<dyn MarkMessagesReadUseCase + Send + Sync>,
    reply_to_message: Arc<dyn ReplyToMessageUseCase + Send + Sync>,
    site: SiteConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_profile: Arc::new(StubGetProfile::success()),
            get_skill_list: Arc::new(StubGetSkillList),
            list_experiences: Arc::new(StubListExperiences::success()),
            get_recent_experiences: Arc::new(StubGetRecentExperiences::success()),
            browse_projects: Arc::new(StubBrowseProjects),
            get_project_detail: Arc::new(StubGetProjectDetail),
            list_public_projects: Arc::new(StubListPublicProjects),
            get_featured_projects: Arc::new(StubGetFeaturedProjects::success()),
            get_skill_overview: Arc::new(StubGetSkillOverview::success()),
            submit_contact: Arc::new(StubSubmitContact),
            list_messages: Arc::new(StubListMessages),
            mark_messages_read: Arc::new(StubMarkMessagesRead),
            reply_to_message: Arc::new(StubReplyToMessage),
            site: SiteConfig::new("https://example.com"),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.get_profile = Arc::new(uc);
        self
    }

    pub fn with_get_skill_list(mut self, uc: impl GetSkillListUseCase + 'static) -> Self {
        self.get_skill_list = Arc::new(uc);
        self
    }

    pub fn with_list_experiences(mut self, uc: impl ListExperiencesUseCase + 'static) -> Self {
        self.list_experiences = Arc::new(uc);
        self
    }

    pub fn with_get_recent_experiences(
        mut self,
        uc: impl GetRecentExperiencesUseCase + 'static,
    ) -> Self {
        self.get_recent_experiences = Arc::new(uc);
        self
    }

    pub fn with_browse_projects(mut self, uc: impl BrowseProjectsUseCase + 'static) -> Self {
        self.browse_projects = Arc::new(uc);
        self
    }

    pub fn with_get_project_detail(mut self, uc: impl GetProjectDetailUseCase + 'static) -> Self {
        self.get_project_detail = Arc::new(uc);
        self
    }

    pub fn with_list_public_projects(
        mut self,
        uc: impl ListPublicProjectsUseCase + 'static,
    ) -> Self {
        self.list_public_projects = Arc::new(uc);
        self
    }

    pub fn with_get_featured_projects(
        mut self,
        uc: impl GetFeaturedProjectsUseCase + 'static,
    ) -> Self {
        self.get_featured_projects = Arc::new(uc);
        self
    }

    pub fn with_get_skill_overview(mut self, uc: impl GetSkillOverviewUseCase + 'static) -> Self {
        self.get_skill_overview = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactMessageUseCase + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl ListContactMessagesUseCase + 'static,
    ) -> Self {
        self.list_messages = Arc::new(uc);
        self
    }

    pub fn with_mark_messages_read(
        mut self,
        uc: impl MarkMessagesReadUseCase + 'static,
    ) -> Self {
        self.mark_messages_read = Arc::new(uc);
        self
    }

    pub fn with_reply_to_message(mut self, uc: impl ReplyToMessageUseCase + 'static) -> Self {
        self.reply_to_message = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            about: AboutUseCases {
                get_profile: self.get_profile,
                get_skill_list: self.get_skill_list,
            },
            experience: ExperienceUseCases {
                list: self.list_experiences,
                recent: self.get_recent_experiences,
            },
            project: ProjectUseCases {
                browse: self.browse_projects,
                get_detail: self.get_project_detail,
                list_public: self.list_public_projects,
                get_featured: self.get_featured_projects,
            },
            skill: SkillUseCases {
                overview: self.get_skill_overview,
            },
            contact: ContactUseCases {
                submit: self.submit_contact,
                list: self.list_messages,
                mark_read: self.mark_messages_read,
                reply: self.reply_to_message,
            },
            site: self.site,
        })
    }
}
