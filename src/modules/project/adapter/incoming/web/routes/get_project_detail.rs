use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::GetProjectDetailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/projects/{id}")]
pub async fn get_project_detail_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_detail.execute(project_id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetProjectDetailError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectDetailError::QueryFailed(msg)) => {
            error!("Failed to load project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
