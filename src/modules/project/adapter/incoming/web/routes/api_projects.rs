use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::ListPublicProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Every public project in display order"),
        (status = 500, description = "Unexpected failure"),
    )
)]
#[get("/api/projects")]
pub async fn api_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list_public.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(ListPublicProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects for API: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
