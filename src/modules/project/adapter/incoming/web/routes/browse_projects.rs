use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::project::application::domain::catalog::BrowseRequest;
use crate::modules::project::application::ports::incoming::use_cases::BrowseProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct BrowseProjectsQuery {
    pub search: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub page: u32,
}

impl From<BrowseProjectsQuery> for BrowseRequest {
    fn from(q: BrowseProjectsQuery) -> Self {
        BrowseRequest {
            search: q.search,
            featured_only: q.featured,
            page: if q.page == 0 { 1 } else { q.page },
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/projects")]
pub async fn browse_projects_handler(
    query: web::Query<BrowseProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request: BrowseRequest = query.into_inner().into();

    match data.project.browse.execute(request).await {
        Ok(result) => ApiResponse::success(result),

        Err(BrowseProjectsError::QueryFailed(msg)) => {
            error!("Failed to browse projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
