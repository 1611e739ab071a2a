/// Feed handlers - friends feed, university feed and per-user listings
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::FeedService;

use super::ListQuery;

/// Posts from the requester's friends, newest first
/// GET /api/v1/feed/friends
pub async fn get_friends_feed(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = FeedService::new((**pool).clone());
    let outcome = service.friends_feed(user_id.0, query.limit()).await?;

    Ok(outcome.into_response())
}

/// Posts from the requester's university, newest first
/// GET /api/v1/feed/university
pub async fn get_university_feed(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = FeedService::new((**pool).clone());
    let outcome = service.university_feed(user_id.0, query.limit()).await?;

    Ok(outcome.into_response())
}

/// Posts of one creator
/// GET /api/v1/posts/user/{user_id}
pub async fn get_user_posts(
    pool: web::Data<PgPool>,
    viewer: UserId,
    creator_id: web::Path<Uuid>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let service = FeedService::new((**pool).clone());
    let outcome = service
        .user_posts(viewer.0, *creator_id, query.limit())
        .await?;

    Ok(outcome.into_response())
}
