//! # Blog Core
//!
//! The domain layer of the blog posts API.
//! This crate holds the `Post` entity and the store port, with no HTTP or
//! storage code.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
