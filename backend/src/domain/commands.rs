//! Domain-level command and result types.
//! These structs are used by `PostService` and are **not** exposed over the
//! public API. The REST layer maps the DTOs from the `shared` crate to and
//! from these types.

pub mod posts {
    /// Input for creating a new post.
    #[derive(Debug, Clone)]
    pub struct CreatePostCommand {
        pub title: String,
        pub content: String,
    }

    /// Input for replacing the title and content of an existing post.
    #[derive(Debug, Clone)]
    pub struct UpdatePostCommand {
        pub title: String,
        pub content: String,
    }

    /// A persisted post: the id is always present.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PostSummary {
        pub post_id: i64,
        pub title: String,
        pub content: String,
    }

    /// Result of deleting a post.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DeleteAck {
        pub post_id: i64,
    }
}

pub use posts::*;
