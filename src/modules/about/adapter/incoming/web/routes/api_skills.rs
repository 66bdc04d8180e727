use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::about::application::ports::incoming::use_cases::GetSkillListError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "about",
    responses(
        (status = 200, description = "Skill names from the profile"),
        (status = 404, description = "No profile exists yet"),
        (status = 500, description = "Unexpected failure"),
    )
)]
#[get("/api/skills")]
pub async fn api_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get_skill_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetSkillListError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetSkillListError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
