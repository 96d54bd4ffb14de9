use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::Value;

use crate::services::GitHubService;
use crate::services::github::post;

// 投递 Markdown 评论
pub async fn post_comment(
    github: web::Data<GitHubService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    post::post_comment(&github, &body).await
}

// 配置路由
pub fn configure_github_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/github").route("/comments", web::post().to(post_comment)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GitHubConfig;
    use crate::errors::Result;
    use crate::services::github::CommentTransport;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;
    use std::sync::Arc;

    struct RejectingTransport;

    #[async_trait::async_trait]
    impl CommentTransport for RejectingTransport {
        async fn post_comment(&self, _url: &str, _body: &str) -> Result<bool> {
            Ok(false)
        }
    }

    fn service(postback: bool) -> GitHubService {
        GitHubService::with_transport(
            GitHubConfig::default().with_postback(postback),
            Arc::new(RejectingTransport),
        )
    }

    #[actix_web::test]
    async fn test_comment_status_codes() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service(true)))
                .configure(configure_github_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/github/comments")
            .set_json(json!({ "url": "https://example.com/comments" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/github/comments")
            .set_json(json!({ "url": "https://example.com/comments", "message": "Hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_comment_skipped_when_postback_disabled() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service(false)))
                .configure(configure_github_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/github/comments")
            .set_json(json!({ "url": "https://example.com/comments", "message": "Hi" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!(true));
    }
}
