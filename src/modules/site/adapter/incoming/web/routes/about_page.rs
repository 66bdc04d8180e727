use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::about::application::ports::outgoing::about_store::AboutView;
use crate::modules::experience::application::domain::timeline::{group_by_type, ExperienceGroup};
use crate::modules::skill::application::domain::proficiency::SkillGroup;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
struct AboutPage {
    about: AboutView,
    experience_groups: Vec<ExperienceGroup>,
    skill_groups: Vec<SkillGroup>,
}

#[get("/about")]
pub async fn about_page_handler(data: web::Data<AppState>) -> impl Responder {
    let about = match data.about.get_profile.execute().await {
        Ok(about) => about,
        Err(e) => {
            error!("Failed to load profile for about page: {}", e);
            return ApiResponse::internal_error();
        }
    };

    let experiences = match data.experience.list.execute().await {
        Ok(experiences) => experiences,
        Err(e) => {
            error!("Failed to load experiences for about page: {}", e);
            return ApiResponse::internal_error();
        }
    };

    let skill_groups = match data.skill.overview.execute().await {
        Ok(groups) => groups,
        Err(e) => {
            error!("Failed to load skills for about page: {}", e);
            return ApiResponse::internal_error();
        }
    };

    ApiResponse::success(AboutPage {
        about,
        experience_groups: group_by_type(experiences),
        skill_groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubGetSkillOverview, StubListExperiences};

    #[actix_web::test]
    async fn test_about_page_assembles_all_sections() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(about_page_handler)).await;

        let req = test::TestRequest::get().uri("/about").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["about"].is_object());
        assert!(body["data"]["experience_groups"].is_array());
        assert!(body["data"]["skill_groups"].is_array());
    }

    #[actix_web::test]
    async fn test_about_page_experience_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_list_experiences(StubListExperiences::failing())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(about_page_handler)).await;

        let req = test::TestRequest::get().uri("/about").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_about_page_skill_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_skill_overview(StubGetSkillOverview::failing())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(about_page_handler)).await;

        let req = test::TestRequest::get().uri("/about").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
