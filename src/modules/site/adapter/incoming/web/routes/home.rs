use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::about::application::ports::outgoing::about_store::AboutView;
use crate::modules::experience::application::ports::outgoing::experience_query::ExperienceView;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::api::ApiResponse;
use crate::AppState;

const FEATURED_LIMIT: u64 = 3;
const RECENT_EXPERIENCES_LIMIT: u64 = 3;

#[derive(Debug, Serialize)]
struct HomePage {
    about: AboutView,
    featured_projects: Vec<ProjectView>,
    recent_experiences: Vec<ExperienceView>,
}

#[get("/")]
pub async fn home_handler(data: web::Data<AppState>) -> impl Responder {
    let about = match data.about.get_profile.execute().await {
        Ok(about) => about,
        Err(e) => {
            error!("Failed to load profile for home page: {}", e);
            return ApiResponse::internal_error();
        }
    };

    let featured_projects = match data.project.get_featured.execute(FEATURED_LIMIT).await {
        Ok(projects) => projects,
        Err(e) => {
            error!("Failed to load featured projects for home page: {}", e);
            return ApiResponse::internal_error();
        }
    };

    let recent_experiences = match data
        .experience
        .recent
        .execute(RECENT_EXPERIENCES_LIMIT)
        .await
    {
        Ok(experiences) => experiences,
        Err(e) => {
            error!("Failed to load recent experiences for home page: {}", e);
            return ApiResponse::internal_error();
        }
    };

    ApiResponse::success(HomePage {
        about,
        featured_projects,
        recent_experiences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        StubGetFeaturedProjects, StubGetProfile, StubGetRecentExperiences,
    };

    #[actix_web::test]
    async fn test_home_assembles_all_sections() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(App::new().app_data(app_state).service(home_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["about"].is_object());
        assert!(body["data"]["featured_projects"].is_array());
        assert!(body["data"]["recent_experiences"].is_array());
    }

    #[actix_web::test]
    async fn test_home_profile_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile(StubGetProfile::failing())
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(home_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_home_featured_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_featured_projects(StubGetFeaturedProjects::failing())
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(home_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_home_experiences_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_recent_experiences(StubGetRecentExperiences::failing())
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(home_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
