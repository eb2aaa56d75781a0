//! Post endpoints.

use actix_web::{HttpResponse, web};
use blogspace_core::{PostDraft, PostId};
use blogspace_shared::{MessageResponse, PostPayload, SearchParams};

use crate::middleware::AppResult;
use crate::state::AppState;

/// GET /posts/
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts/
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = PostDraft::from(body.into_inner());
    draft.validate()?;

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = PostDraft::from(body.into_inner());
    draft.validate()?;

    let post = state.posts.update(id, draft).await?;
    tracing::info!(post_id = id, "Post updated");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}

/// GET /search/?query=term
pub async fn search_posts(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.search(&params.query).await?;
    tracing::debug!(query = %params.query, hits = posts.len(), "Search served");
    Ok(HttpResponse::Ok().json(posts))
}
