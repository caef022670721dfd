//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::Post;
use blog_shared::{CreatePostRequest, RequestBody, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /blog-posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.get().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /blog-posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req = CreatePostRequest::from_body(&RequestBody::parse(&body)?)?;

    let post = state
        .posts
        .create(req.title, req.content, req.author)
        .await?;

    tracing::info!(post_id = %post.id, "Created blog post");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /blog-posts/{id}
///
/// Replaces the post wholesale and answers 204 without a body, even when
/// the id is unknown.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = UpdatePostRequest::from_body(&RequestBody::parse(&body)?)?;

    if req.id != id {
        return Err(AppError::BadRequest(format!(
            "Request path id (`{}`) and request body id (`{}`) must match",
            id, req.id
        )));
    }

    tracing::info!(post_id = %id, "Updating blog post");
    let updated = state
        .posts
        .update(Post {
            id,
            title: req.title,
            content: req.content,
            author: req.author,
            publish_date: req.publish_date,
        })
        .await?;

    if !updated {
        tracing::debug!(post_id = %req.id, "No blog post to update");
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blog-posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete(&id).await? {
        tracing::info!(post_id = %id, "Deleted blog post");
    } else {
        tracing::debug!(post_id = %id, "No blog post to delete");
    }

    Ok(HttpResponse::NoContent().finish())
}
