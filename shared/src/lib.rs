use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/posts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub post_id: i64,
    pub title: String,
    pub content: String,
}

/// Single post as returned by reads, both by id and inside a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadPostResponse {
    pub post_id: i64,
    pub title: String,
    pub content: String,
}

/// Body of `PUT /api/v1/posts/{postId}`. Both fields replace the stored values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostResponse {
    pub post_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostResponse {
    pub post_id: i64,
}

/// Page envelope for list endpoints.
///
/// `page_number` is zero-based. `first` and `last` are derived from
/// `page_number` and `total_pages` so clients don't have to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
}

/// Error body returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
}
