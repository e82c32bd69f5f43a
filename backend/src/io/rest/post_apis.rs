//! # REST API for Posts
//!
//! Endpoints for creating, reading, updating, deleting and paging posts.
//! Every success is `200 OK`; a missing post is `404`, a malformed page
//! query or path is `400`, an unreadable body is `400`/`415`/`422`, and
//! storage failures are `500`. Every error carries an `ErrorResponse` body.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

use crate::domain::PostError;
use crate::io::rest::extractors::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::io::rest::mappers::PostMapper;
use crate::io::rest::pagination::PageQuery;
use crate::AppState;
use shared::{CreatePostRequest, UpdatePostRequest};

/// Create a new post
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> impl IntoResponse {
    info!("POST /api/v1/posts - request: {:?}", request);

    let command = PostMapper::to_create_command(request);
    match state.post_service.create_post(command).await {
        Ok(summary) => (StatusCode::OK, Json(PostMapper::to_create_response(summary))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get a post by ID
pub async fn read_post(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
) -> impl IntoResponse {
    info!("GET /api/v1/posts/{}", post_id);

    match state.post_service.read_post_by_id(post_id).await {
        Ok(summary) => (StatusCode::OK, Json(PostMapper::to_read_response(summary))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Replace the title and content of a post
pub async fn update_post(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdatePostRequest>,
) -> impl IntoResponse {
    info!("PUT /api/v1/posts/{} - request: {:?}", post_id, request);

    let command = PostMapper::to_update_command(request);
    match state.post_service.update_post(post_id, command).await {
        Ok(summary) => (StatusCode::OK, Json(PostMapper::to_update_response(summary))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Delete a post
pub async fn delete_post(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/v1/posts/{}", post_id);

    match state.post_service.delete_post(post_id).await {
        Ok(ack) => (StatusCode::OK, Json(PostMapper::to_delete_response(ack))).into_response(),
        Err(e) => error_response(e),
    }
}

/// List one page of posts
pub async fn read_all_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> impl IntoResponse {
    info!("GET /api/v1/posts - query: {:?}", query);

    let request = match query.into_page_request() {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected page query: {}", e);
            return ApiError::new(StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    match state.post_service.read_all_posts(request).await {
        Ok(page) => (StatusCode::OK, Json(PostMapper::to_page_response(page))).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: PostError) -> Response {
    match &err {
        PostError::NotFound { post_id } => {
            warn!("Post {} not found", post_id);
            ApiError::new(StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        PostError::Storage(_) | PostError::CorruptRecord(_) => {
            error!("Post operation failed: {}", err);
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;
    use crate::{create_router, AppState};
    use axum::body::Body;
    use axum::http::{header, HeaderValue, Method, Request};
    use axum::Router;
    use serde_json::{json, Value};
    use shared::ErrorResponse;
    use tower::ServiceExt;

    async fn setup_test_router() -> Router {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        create_router(
            AppState::new(db),
            HeaderValue::from_static("http://localhost:8080"),
        )
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_create_update_delete_scenario() {
        let router = setup_test_router().await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/posts",
            Some(json!({ "title": "테스트 제목", "content": "테스트 내용" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "postId": 1, "title": "테스트 제목", "content": "테스트 내용" })
        );

        let (status, body) = send(
            &router,
            Method::PUT,
            "/api/v1/posts/1",
            Some(json!({ "title": "변경 제목", "content": "변경 내용" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "postId": 1, "title": "변경 제목", "content": "변경 내용" })
        );

        let (status, body) = send(&router, Method::DELETE, "/api/v1/posts/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "postId": 1 }));

        let (status, body) = send(&router, Method::GET, "/api/v1/posts/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "no post found for the given id");
    }

    #[tokio::test]
    async fn test_read_post_by_id() {
        let router = setup_test_router().await;
        send(
            &router,
            Method::POST,
            "/api/v1/posts",
            Some(json!({ "title": "title", "content": "content" })),
        )
        .await;

        let (status, body) = send(&router, Method::GET, "/api/v1/posts/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "postId": 1, "title": "title", "content": "content" }));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_post_return_404() {
        let router = setup_test_router().await;

        let (status, _) = send(
            &router,
            Method::PUT,
            "/api/v1/posts/77",
            Some(json!({ "title": "t", "content": "c" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::DELETE, "/api/v1/posts/77", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_read_all_posts_with_defaults() {
        let router = setup_test_router().await;
        for (title, content) in [("첫 번째", "내용 1"), ("두 번째", "내용 2")] {
            send(
                &router,
                Method::POST,
                "/api/v1/posts",
                Some(json!({ "title": title, "content": content })),
            )
            .await;
        }

        let (status, body) = send(&router, Method::GET, "/api/v1/posts?page=0&size=5", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"].as_array().unwrap().len(), 2);
        assert_eq!(body["totalElements"], 2);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["pageNumber"], 0);
        assert_eq!(body["pageSize"], 5);
        assert_eq!(body["content"][0]["postId"], 2);
        assert_eq!(body["content"][1]["postId"], 1);
    }

    #[tokio::test]
    async fn test_read_all_posts_sorted_and_paged() {
        let router = setup_test_router().await;
        for i in 1..=7 {
            send(
                &router,
                Method::POST,
                "/api/v1/posts",
                Some(json!({ "title": format!("title {}", i), "content": "body" })),
            )
            .await;
        }

        let (status, body) = send(&router, Method::GET, "/api/v1/posts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"].as_array().unwrap().len(), 5);
        assert_eq!(body["content"][0]["postId"], 7);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["first"], true);
        assert_eq!(body["last"], false);

        let (_, body) = send(&router, Method::GET, "/api/v1/posts?page=1&sort=postId,asc", None).await;
        let ids: Vec<i64> = body["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["postId"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![6, 7]);
        assert_eq!(body["last"], true);
    }

    fn error_body(body: Value) -> ErrorResponse {
        serde_json::from_value(body).expect("error response should be an ErrorResponse body")
    }

    #[tokio::test]
    async fn test_bad_page_query_returns_400() {
        let router = setup_test_router().await;

        let (status, body) = send(&router, Method::GET, "/api/v1/posts?sort=author", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            error_body(body),
            ErrorResponse {
                status: 400,
                error: "Bad Request".to_string(),
                message: "unknown sort property: author".to_string(),
            }
        );

        let (status, body) = send(&router, Method::GET, "/api/v1/posts?page=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body = error_body(body);
        assert_eq!(body.status, 400);
        assert_eq!(body.error, "Bad Request");
        assert!(!body.message.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_post_id_is_rejected() {
        let router = setup_test_router().await;

        for method in [Method::GET, Method::DELETE] {
            let (status, body) = send(&router, method, "/api/v1/posts/abc", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let body = error_body(body);
            assert_eq!(body.status, 400);
            assert_eq!(body.error, "Bad Request");
        }
    }

    #[tokio::test]
    async fn test_body_missing_field_returns_422_error_body() {
        let router = setup_test_router().await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/posts",
            Some(json!({ "title": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body = error_body(body);
        assert_eq!(body.status, 422);
        assert_eq!(body.error, "Unprocessable Entity");
        assert!(body.message.contains("content"));

        let (status, body) = send(
            &router,
            Method::PUT,
            "/api/v1/posts/1",
            Some(json!({ "content": "c" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_body(body).status, 422);

        // Nothing was stored by the rejected create
        let (_, body) = send(&router, Method::GET, "/api/v1/posts", None).await;
        assert_eq!(body["totalElements"], 0);
    }

    #[tokio::test]
    async fn test_body_without_json_content_type_returns_415_error_body() {
        let router = setup_test_router().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/posts")
            .body(Body::from(r#"{"title":"t","content":"c"}"#))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, 415);
    }
}
