use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Post store - the authoritative collection of posts.
///
/// Missing ids are not errors: `update` and `delete` report whether a record
/// was touched and leave the decision to the caller.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a post with a fresh id and the current publish date.
    async fn create(
        &self,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, RepoError>;

    /// Snapshot of every post, in insertion order.
    async fn get(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace title, content, author and publish date of the post with
    /// `post.id`. Returns `false` when no such post exists.
    async fn update(&self, post: Post) -> Result<bool, RepoError>;

    /// Remove the post with `id`. Returns `false` when no such post exists.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<usize, RepoError>;
}
