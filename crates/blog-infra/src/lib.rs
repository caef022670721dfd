//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Only an in-memory store exists; data is lost on process restart.

pub mod store;

pub use store::InMemoryPostRepository;
