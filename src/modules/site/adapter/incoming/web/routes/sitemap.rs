use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::site::application::sitemap::build_sitemap;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/sitemap.xml")]
pub async fn sitemap_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list_public.execute().await {
        Ok(projects) => {
            let xml = build_sitemap(&data.site.base_url, &projects);

            HttpResponse::Ok()
                .content_type("application/xml")
                .body(xml)
        }

        Err(e) => {
            error!("Failed to build sitemap: {}", e);
            ApiResponse::internal_error()
        }
    }
}
