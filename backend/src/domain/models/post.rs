/// A blog post as the domain sees it.
///
/// `post_id` is `None` until the post has been saved for the first time;
/// after that the store owns the id and it never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Build a post that has not been persisted yet
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            post_id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Replace title and content in place. The id is untouched.
    pub fn update(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_has_no_id() {
        let post = Post::new("title", "content");
        assert_eq!(post.post_id, None);
    }

    #[test]
    fn test_update_keeps_id() {
        let mut post = Post {
            post_id: Some(3),
            title: "old title".to_string(),
            content: "old content".to_string(),
        };

        post.update("new title".to_string(), "new content".to_string());

        assert_eq!(post.post_id, Some(3));
        assert_eq!(post.title, "new title");
        assert_eq!(post.content, "new content");
    }
}
