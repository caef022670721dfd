//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Insertion order is preserved. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(
        &self,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, RepoError> {
        let post = Post::new(title, content, author);

        let mut posts = self.posts.write().await;
        posts.push(post.clone());

        tracing::debug!(post_id = %post.id, "Post stored");
        Ok(post)
    }

    async fn get(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn update(&self, post: Post) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(existing) = posts.iter_mut().find(|p| p.id == post.id) else {
            tracing::debug!(post_id = %post.id, "Update skipped, no such post");
            return Ok(false);
        };

        existing.title = post.title;
        existing.content = post.content;
        existing.author = post.author;
        existing.publish_date = post.publish_date;
        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;

        match posts.iter().position(|p| p.id == id) {
            Some(index) => {
                posts.remove(index);
                Ok(true)
            }
            None => {
                tracing::debug!(post_id = %id, "Delete skipped, no such post");
                Ok(false)
            }
        }
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (InMemoryPostRepository, Post, Post) {
        let store = InMemoryPostRepository::new();
        let first = store
            .create("First".into(), "one".into(), "Ann".into())
            .await
            .unwrap();
        let second = store
            .create("Second".into(), "two".into(), "Bob".into())
            .await
            .unwrap();
        (store, first, second)
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let (store, first, second) = seeded().await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_accepts_empty_strings() {
        let store = InMemoryPostRepository::new();
        let post = store
            .create(String::new(), String::new(), String::new())
            .await
            .unwrap();

        assert!(!post.id.is_empty());
        assert_eq!(post.title, "");
    }

    #[tokio::test]
    async fn test_get_preserves_insertion_order() {
        let (store, first, second) = seeded().await;

        let posts = store.get().await.unwrap();
        assert_eq!(posts, vec![first, second]);
    }

    #[tokio::test]
    async fn test_get_returns_a_snapshot() {
        let (store, _, _) = seeded().await;

        let mut snapshot = store.get().await.unwrap();
        snapshot.clear();

        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_but_not_id() {
        let (store, first, second) = seeded().await;

        let changed = Post {
            id: first.id.clone(),
            title: "connect the dots".into(),
            content: "la la la la la".into(),
            author: "Cy".into(),
            publish_date: "2020-01-01T00:00:00.000Z".into(),
        };
        assert!(store.update(changed.clone()).await.unwrap());

        let posts = store.get().await.unwrap();
        assert_eq!(posts[0], changed);
        assert_eq!(posts[1], second);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let (store, first, second) = seeded().await;

        let ghost = Post {
            id: "missing".into(),
            ..first.clone()
        };
        assert!(!store.update(ghost).await.unwrap());
        assert_eq!(store.get().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_delete() {
        let (store, first, second) = seeded().await;

        assert!(store.delete(&first.id).await.unwrap());
        assert_eq!(store.get().await.unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let (store, _, _) = seeded().await;

        assert!(!store.delete("missing").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
