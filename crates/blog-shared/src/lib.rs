//! # Blog Shared
//!
//! Request types shared between the HTTP layer and its clients.

pub mod dto;

pub use dto::{CreatePostRequest, FieldError, RequestBody, UpdatePostRequest};
