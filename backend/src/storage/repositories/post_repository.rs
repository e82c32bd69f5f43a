use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, Transaction};
use tracing::debug;

use crate::domain::models::{Page, PageRequest, Post, SortKey};
use crate::domain::PostError;
use crate::storage::traits::{PostRepository, UnitOfWork};

/// Post repository bound to one SQLite transaction
pub struct SqlitePostRepository {
    tx: Transaction<'static, Sqlite>,
}

impl SqlitePostRepository {
    pub fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }

    fn row_to_post(row: &SqliteRow) -> Result<Post, sqlx::Error> {
        Ok(Post {
            post_id: Some(row.try_get("post_id")?),
            title: row.try_get("title")?,
            content: row.try_get("content")?,
        })
    }

    async fn insert(&mut self, post: Post) -> Result<Post, PostError> {
        let result = sqlx::query(
            r#"
            INSERT INTO posts (title, content)
            VALUES (?, ?)
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .execute(&mut *self.tx)
        .await?;

        let post_id = result.last_insert_rowid();
        debug!("Inserted post {}", post_id);

        Ok(Post {
            post_id: Some(post_id),
            ..post
        })
    }

    async fn overwrite(&mut self, post_id: i64, post: Post) -> Result<Post, PostError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = ?, content = ?
            WHERE post_id = ?
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post_id)
        .execute(&mut *self.tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PostError::not_found(post_id));
        }

        debug!("Updated post {}", post_id);
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn save(&mut self, post: Post) -> Result<Post, PostError> {
        match post.post_id {
            None => self.insert(post).await,
            Some(post_id) => self.overwrite(post_id, post).await,
        }
    }

    async fn find_by_id(&mut self, post_id: i64) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(
            r#"
            SELECT post_id, title, content
            FROM posts
            WHERE post_id = ?
            "#,
        )
        .bind(post_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_post(&r)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&mut self, request: &PageRequest) -> Result<Page<Post>, PostError> {
        let total_elements: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&mut *self.tx)
            .await?;

        // Column and direction come from closed enums, never from the request text
        let tie_breaker = if request.sort_key == SortKey::PostId {
            ""
        } else {
            ", post_id ASC"
        };
        let sql = format!(
            "SELECT post_id, title, content FROM posts ORDER BY {} {}{} LIMIT ? OFFSET ?",
            request.sort_key.column(),
            request.sort_direction.as_sql(),
            tie_breaker,
        );

        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let rows = sqlx::query(&sql)
            .bind(i64::from(request.page_size))
            .bind(offset)
            .fetch_all(&mut *self.tx)
            .await?;

        let posts = rows
            .iter()
            .map(Self::row_to_post)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(posts, request, total_elements.max(0) as u64))
    }

    async fn delete(&mut self, post: &Post) -> Result<(), PostError> {
        let Some(post_id) = post.post_id else {
            return Err(PostError::CorruptRecord(
                "cannot delete a post that was never saved".to_string(),
            ));
        };

        sqlx::query(
            r#"
            DELETE FROM posts WHERE post_id = ?
            "#,
        )
        .bind(post_id)
        .execute(&mut *self.tx)
        .await?;

        debug!("Deleted post {}", post_id);
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for SqlitePostRepository {
    async fn commit(self) -> Result<(), PostError> {
        self.tx.commit().await?;
        Ok(())
    }
}
