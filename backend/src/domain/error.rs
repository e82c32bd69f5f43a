/// Errors returned by post operations.
///
/// `NotFound` is the only condition the domain raises itself. `Storage`
/// carries whatever the database reported and is never matched on for
/// business decisions.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("no post found for the given id")]
    NotFound { post_id: i64 },
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("corrupt post record: {0}")]
    CorruptRecord(String),
}

impl PostError {
    pub fn not_found(post_id: i64) -> Self {
        PostError::NotFound { post_id }
    }
}
