/// Post handlers - HTTP endpoints for post operations
use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::media::MediaStore;
use crate::middleware::UserId;
use crate::services::dto::{CreatePostInput, FileMeta, PollInput};
use crate::services::PostService;

/// One file lifted out of the multipart body
struct UploadedFile {
    meta: FileMeta,
    data: Vec<u8>,
}

/// Fields accepted by the create-post multipart body:
/// `caption` (text), `poll` (JSON), `files` (repeated file parts).
async fn read_create_payload(
    mut payload: Multipart,
) -> Result<(String, Option<PollInput>, Vec<UploadedFile>)> {
    let mut caption = String::new();
    let mut poll: Option<PollInput> = None;
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("Multipart error: {}", e)))?;

        let name = field.name().unwrap_or("").to_string();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes =
                chunk.map_err(|e| AppError::BadRequest(format!("Multipart read error: {}", e)))?;
            data.extend_from_slice(&bytes);
        }

        match name.as_str() {
            "caption" => {
                caption = String::from_utf8_lossy(&data).to_string();
            }
            "poll" => {
                let parsed: PollInput = serde_json::from_slice(&data)
                    .map_err(|e| AppError::BadRequest(format!("Invalid poll payload: {}", e)))?;
                poll = Some(parsed);
            }
            "files" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or("upload")
                    .to_string();
                let content_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                files.push(UploadedFile {
                    meta: FileMeta {
                        file_name,
                        content_type,
                    },
                    data,
                });
            }
            _ => {
                // Unknown fields are drained and ignored
            }
        }
    }

    Ok((caption, poll, files))
}

/// Create a new post
/// POST /api/v1/posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaStore>>,
    user_id: UserId,
    payload: Multipart,
) -> Result<HttpResponse> {
    let (caption, poll, files) = read_create_payload(payload).await?;

    let service = PostService::new((**pool).clone(), media.get_ref().clone());
    let input = CreatePostInput {
        caption,
        files: files.iter().map(|f| f.meta.clone()).collect(),
        poll,
    };

    let outcome = service.create_post(user_id.0, input).await?;

    // Ship the bytes only once the record is committed; keys are assigned in
    // submission order.
    if let Some(created) = &outcome.data {
        for (key, file) in created.media_urls.iter().zip(files) {
            media.upload(key, &file.meta.content_type, file.data).await?;
        }
    }

    Ok(outcome.into_response())
}

/// Get a post by ID
/// GET /api/v1/posts/{post_id}
pub async fn get_post(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaStore>>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), media.get_ref().clone());
    let outcome = service.get_post_details(*post_id, user_id.0).await?;

    Ok(outcome.into_response())
}

#[derive(Debug, Deserialize)]
pub struct UpdateCaptionRequest {
    pub caption: String,
}

/// Edit a post caption
/// PATCH /api/v1/posts/{post_id}
pub async fn update_caption(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaStore>>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdateCaptionRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), media.get_ref().clone());
    let outcome = service
        .edit_caption(*post_id, user_id.0, &req.caption)
        .await?;

    Ok(outcome.into_response())
}

/// Delete a post and its media
/// DELETE /api/v1/posts/{post_id}
pub async fn delete_post(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaStore>>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), media.get_ref().clone());
    let outcome = service.delete_post(*post_id, user_id.0).await?;

    Ok(outcome.into_response())
}

/// Like a post
/// POST /api/v1/posts/{post_id}/likes
pub async fn like_post(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaStore>>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), media.get_ref().clone());
    let outcome = service.like_post(*post_id, user_id.0).await?;

    Ok(outcome.into_response())
}

/// Remove a like from a post
/// DELETE /api/v1/posts/{post_id}/likes
pub async fn unlike_post(
    pool: web::Data<PgPool>,
    media: web::Data<Arc<dyn MediaStore>>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone(), media.get_ref().clone());
    let outcome = service.unlike_post(*post_id, user_id.0).await?;

    Ok(outcome.into_response())
}
