//! # Storage Traits
//!
//! The storage abstraction the domain layer is written against. A
//! [`Connection`] hands out units of work; a [`UnitOfWork`] is a
//! [`PostRepository`] whose changes only become visible once it is committed.

use async_trait::async_trait;

use crate::domain::models::{Page, PageRequest, Post};
use crate::domain::PostError;

/// CRUD access to stored posts, scoped to one open unit of work
#[async_trait]
pub trait PostRepository: Send {
    /// Insert the post if it has no id, otherwise overwrite the stored row.
    /// Returns the post with its id populated.
    async fn save(&mut self, post: Post) -> Result<Post, PostError>;

    /// Retrieve a post by id; a miss is `Ok(None)`
    async fn find_by_id(&mut self, post_id: i64) -> Result<Option<Post>, PostError>;

    /// One page of posts ordered per the request, with the total row count
    async fn find_all(&mut self, request: &PageRequest) -> Result<Page<Post>, PostError>;

    /// Permanently remove the post
    async fn delete(&mut self, post: &Post) -> Result<(), PostError>;
}

/// A repository bound to a transaction.
///
/// Dropping a unit of work without calling [`UnitOfWork::commit`] discards
/// every change made through it.
#[async_trait]
pub trait UnitOfWork: PostRepository {
    async fn commit(self) -> Result<(), PostError>;
}

/// Factory for units of work over a particular storage backend
#[async_trait]
pub trait Connection: Clone + Send + Sync + 'static {
    type UnitOfWork: UnitOfWork;

    /// Open a new unit of work for reads
    async fn begin(&self) -> Result<Self::UnitOfWork, PostError>;

    /// Open a new unit of work that holds the write lock from the start.
    /// Concurrent writers queue on each other instead of failing midway.
    async fn begin_write(&self) -> Result<Self::UnitOfWork, PostError>;
}
