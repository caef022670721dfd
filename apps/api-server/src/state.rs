//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory post store");
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }
}
