use tracing::{info, warn};

use crate::domain::commands::posts::{CreatePostCommand, DeleteAck, PostSummary, UpdatePostCommand};
use crate::domain::models::{Page, PageRequest, Post};
use crate::domain::PostError;
use crate::storage::{Connection, PostRepository, UnitOfWork};

/// Service for creating, reading, updating and deleting posts.
///
/// Every public method opens its own unit of work and commits it only when
/// the whole body succeeded. Mutations open theirs with the write lock held. Returning early with `?` drops the unit of work,
/// which rolls back anything it wrote.
#[derive(Clone)]
pub struct PostService<C: Connection> {
    connection: C,
}

impl<C: Connection> PostService<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Create a new post
    pub async fn create_post(&self, command: CreatePostCommand) -> Result<PostSummary, PostError> {
        info!("Creating post: title={}", command.title);

        let mut uow = self.connection.begin_write().await?;
        let saved = uow.save(Post::new(command.title, command.content)).await?;
        uow.commit().await?;

        let summary = Self::summarize(saved)?;
        info!("Created post with ID: {}", summary.post_id);
        Ok(summary)
    }

    /// Get a post by ID
    pub async fn read_post_by_id(&self, post_id: i64) -> Result<PostSummary, PostError> {
        info!("Getting post: {}", post_id);

        let mut uow = self.connection.begin().await?;
        let post = Self::find_existing(&mut uow, post_id).await?;
        uow.commit().await?;

        Self::summarize(post)
    }

    /// Replace the title and content of an existing post
    pub async fn update_post(
        &self,
        post_id: i64,
        command: UpdatePostCommand,
    ) -> Result<PostSummary, PostError> {
        info!("Updating post: {}", post_id);

        let mut uow = self.connection.begin_write().await?;
        let mut post = Self::find_existing(&mut uow, post_id).await?;
        post.update(command.title, command.content);
        let saved = uow.save(post).await?;
        uow.commit().await?;

        info!("Updated post: {}", post_id);
        Self::summarize(saved)
    }

    /// Delete a post
    pub async fn delete_post(&self, post_id: i64) -> Result<DeleteAck, PostError> {
        info!("Deleting post: {}", post_id);

        let mut uow = self.connection.begin_write().await?;
        let post = Self::find_existing(&mut uow, post_id).await?;
        uow.delete(&post).await?;
        uow.commit().await?;

        info!("Deleted post: {}", post_id);
        Ok(DeleteAck { post_id })
    }

    /// List one page of posts
    pub async fn read_all_posts(&self, request: PageRequest) -> Result<Page<PostSummary>, PostError> {
        info!(
            "Listing posts: page={}, size={}, sort={:?} {:?}",
            request.page_number, request.page_size, request.sort_key, request.sort_direction
        );

        let mut uow = self.connection.begin().await?;
        let page = uow.find_all(&request).await?;
        uow.commit().await?;

        info!(
            "Found {} posts on page {} ({} total)",
            page.items.len(),
            page.page_number,
            page.total_elements
        );
        page.try_map(Self::summarize)
    }

    async fn find_existing(uow: &mut C::UnitOfWork, post_id: i64) -> Result<Post, PostError> {
        match uow.find_by_id(post_id).await? {
            Some(post) => Ok(post),
            None => {
                warn!("Post not found: {}", post_id);
                Err(PostError::not_found(post_id))
            }
        }
    }

    fn summarize(post: Post) -> Result<PostSummary, PostError> {
        let post_id = post
            .post_id
            .ok_or_else(|| PostError::CorruptRecord("stored post has no id".to_string()))?;
        Ok(PostSummary {
            post_id,
            title: post.title,
            content: post.content,
        })
    }
}
