use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::contact::application::ports::incoming::use_cases::ListContactMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    #[serde(default)]
    pub unread: bool,
}

#[get("/api/admin/messages")]
pub async fn list_messages_handler(
    query: web::Query<ListMessagesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute(query.unread).await {
        Ok(messages) => ApiResponse::success(messages),

        Err(ListContactMessagesError::QueryFailed(msg)) => {
            error!("Failed to list contact messages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::contact::application::ports::incoming::use_cases::ListContactMessagesUseCase;
    use crate::modules::contact::application::ports::outgoing::contact_message_repository::ContactMessageRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::contact_fixtures::sample_message_record;

    #[derive(Clone)]
    struct MockListUseCase {
        result: Result<Vec<ContactMessageRecord>, ListContactMessagesError>,
    }

    #[async_trait]
    impl ListContactMessagesUseCase for MockListUseCase {
        async fn execute(
            &self,
            _unread_only: bool,
        ) -> Result<Vec<ContactMessageRecord>, ListContactMessagesError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_list_messages_success() {
        let app_state = TestAppStateBuilder::default()
            .with_list_messages(MockListUseCase {
                result: Ok(vec![sample_message_record("Hello")]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/messages?unread=true")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["subject"], "Hello");
        assert_eq!(body["data"][0]["priority"], "medium");
    }

    #[actix_web::test]
    async fn test_list_messages_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_list_messages(MockListUseCase {
                result: Err(ListContactMessagesError::QueryFailed("db down".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/messages")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
