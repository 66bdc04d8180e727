pub mod modules;
pub use modules::about;
pub use modules::contact;
pub use modules::experience;
pub use modules::project;
pub use modules::site;
pub use modules::skill;
pub mod api;
pub mod health;
pub mod shared;

use crate::about::adapter::outgoing::AboutStorePostgres;
use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::service::{GetProfileService, GetSkillListService};
use crate::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::services::{
    ListContactMessagesService, MarkMessagesReadService, ReplyToMessageService,
    SubmitContactMessageService,
};
use crate::experience::adapter::outgoing::ExperienceQueryPostgres;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::service::{
    GetRecentExperiencesService, ListExperiencesService,
};
use crate::project::adapter::outgoing::ProjectQueryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    BrowseProjectsService, GetFeaturedProjectsService, GetProjectDetailService,
    ListPublicProjectsService,
};
use crate::site::application::config::SiteConfig;
use crate::skill::adapter::outgoing::SkillQueryPostgres;
use crate::skill::application::service::GetSkillOverviewService;
use crate::skill::application::skill_use_cases::SkillUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub about: AboutUseCases,
    pub experience: ExperienceUseCases,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub contact: ContactUseCases,
    pub site: SiteConfig,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let base_url =
        env::var("SITE_BASE_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Adapters
    let about_store = AboutStorePostgres::new(Arc::clone(&db_arc));
    let experience_query = ExperienceQueryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc));

    // Use cases
    let state = AppState {
        about: AboutUseCases {
            get_profile: Arc::new(GetProfileService::new(about_store.clone())),
            get_skill_list: Arc::new(GetSkillListService::new(about_store)),
        },
        experience: ExperienceUseCases {
            list: Arc::new(ListExperiencesService::new(experience_query.clone())),
            recent: Arc::new(GetRecentExperiencesService::new(experience_query)),
        },
        project: ProjectUseCases {
            browse: Arc::new(BrowseProjectsService::new(project_query.clone())),
            get_detail: Arc::new(GetProjectDetailService::new(project_query.clone())),
            list_public: Arc::new(ListPublicProjectsService::new(project_query.clone())),
            get_featured: Arc::new(GetFeaturedProjectsService::new(project_query)),
        },
        skill: SkillUseCases {
            overview: Arc::new(GetSkillOverviewService::new(skill_query)),
        },
        contact: ContactUseCases {
            submit: Arc::new(SubmitContactMessageService::new(contact_repo.clone())),
            list: Arc::new(ListContactMessagesService::new(contact_repo.clone())),
            mark_read: Arc::new(MarkMessagesReadService::new(contact_repo.clone())),
            reply: Arc::new(ReplyToMessageService::new(contact_repo)),
        },
        site: SiteConfig::new(base_url),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Site pages
    cfg.service(crate::site::adapter::incoming::web::routes::home_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::about_page_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::sitemap_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::browse_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_detail_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::api_projects_handler);
    // About
    cfg.service(crate::about::adapter::incoming::web::routes::api_skills_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::mark_messages_read_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::reply_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
