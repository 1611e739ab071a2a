/// Poll handlers - voting and results
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::PollService;

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub option: String,
}

/// Cast or move a vote on a post's poll
/// POST /api/v1/posts/{post_id}/poll/votes
pub async fn vote(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<VoteRequest>,
) -> Result<HttpResponse> {
    let service = PollService::new((**pool).clone());
    let outcome = service.vote(*post_id, user_id.0, &req.option).await?;

    Ok(outcome.into_response())
}

/// Retract the caller's vote
/// DELETE /api/v1/posts/{post_id}/poll/votes
pub async fn retract_vote(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PollService::new((**pool).clone());
    let outcome = service.retract_vote(*post_id, user_id.0).await?;

    Ok(outcome.into_response())
}

/// Poll results for a post
/// GET /api/v1/posts/{post_id}/poll
pub async fn get_poll_results(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PollService::new((**pool).clone());
    let outcome = service.get_results(*post_id, user_id.0).await?;

    Ok(outcome.into_response())
}
