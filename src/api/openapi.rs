use utoipa::OpenApi;

use crate::modules::about::application::ports::outgoing::about_store::AboutView;
use crate::modules::contact::application::domain::intake::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::SubmissionReceipt;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::skill::application::ports::outgoing::skill_query::SkillView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public API for the portfolio site"
    ),
    paths(
        crate::modules::project::adapter::incoming::web::routes::api_projects_handler,
        crate::modules::about::adapter::incoming::web::routes::api_skills_handler,
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(schemas(
        ProjectView,
        SkillView,
        ExperienceView,
        AboutView,
        ContactSubmission,
        SubmissionReceipt,
    )),
    tags(
        (name = "projects", description = "Public project catalog"),
        (name = "about", description = "Profile and skill data"),
        (name = "contact", description = "Contact message intake"),
    )
)]
pub struct ApiDoc;
