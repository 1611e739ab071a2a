/// Post service - creation, retrieval, likes, caption edits and deletion
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{like_repo, poll_repo, post_repo, user_repo};
use crate::error::Result;
use crate::media::{self, MediaStore};
use crate::outcome::Outcome;

use super::dto::{CreatePostInput, CreatedPost, LikeStatus, PollInput, PostDetails, UpdatedCaption};

/// Upper bound on media files per post
const MAX_MEDIA_FILES: usize = 10;

pub struct PostService {
    pool: PgPool,
    media: Arc<dyn MediaStore>,
}

impl PostService {
    pub fn new(pool: PgPool, media: Arc<dyn MediaStore>) -> Self {
        Self { pool, media }
    }

    /// Create a new post.
    ///
    /// Every file is classified before anything is written; an unclassifiable
    /// type aborts the whole request through the error channel so no partial
    /// state is committed. The storage upload itself happens in the handler
    /// against the keys assigned here.
    pub async fn create_post(
        &self,
        user_id: Uuid,
        input: CreatePostInput,
    ) -> Result<Outcome<CreatedPost>> {
        if let Some(failure) = validate_create(&input.caption, input.files.len()) {
            return Ok(failure);
        }
        if let Some(poll) = &input.poll {
            if let Some(failure) = validate_poll(poll) {
                return Ok(failure);
            }
        }

        let mut media_urls = Vec::with_capacity(input.files.len());
        for file in &input.files {
            let (kind, ext) = media::classify(&file.content_type)?;
            media_urls.push(media::storage_key(kind, ext));
        }

        let post = post_repo::create_post(&self.pool, user_id, &input.caption, &media_urls).await?;

        if let Some(poll) = &input.poll {
            poll_repo::create_poll(
                &self.pool,
                post.id,
                &poll.question,
                poll.expires_at,
                &poll.options,
            )
            .await?;
        }

        tracing::info!(post_id = %post.id, creator = %user_id, files = media_urls.len(), "post created");

        Ok(Outcome::created(
            "Post created!",
            CreatedPost {
                id: post.id,
                creator_id: post.creator_id,
                caption: post.caption,
                media_urls: post.media_urls,
                has_poll: input.poll.is_some(),
                created_at: post.created_at,
            },
        ))
    }

    /// Fetch one post with computed like state and counts.
    ///
    /// The author always passes; anyone else must be a friend of the creator
    /// or attend the same university.
    pub async fn get_post_details(
        &self,
        post_id: Uuid,
        viewer_id: Uuid,
    ) -> Result<Outcome<PostDetails>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(Outcome::not_found("Post not found!"));
        };

        let Some(creator) = user_repo::find_profile(&self.pool, post.creator_id).await? else {
            return Ok(Outcome::not_found("User not found!"));
        };

        if !post.is_author(viewer_id) {
            let Some(viewer) = user_repo::find_profile(&self.pool, viewer_id).await? else {
                return Ok(Outcome::not_found("User not found!"));
            };
            if !viewer.can_interact_with(&creator) {
                return Ok(Outcome::forbidden(
                    "You are not authorized to view this post!",
                ));
            }
        }

        let poll = poll_repo::find_poll_by_post(&self.pool, post_id).await?;

        Ok(Outcome::ok(
            "Post details fetched!",
            PostDetails::project(&post, &creator, poll.as_ref(), viewer_id),
        ))
    }

    /// Like a post. The duplicate guard lives here, not in storage.
    pub async fn like_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Outcome<LikeStatus>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(Outcome::not_found("Post not found!"));
        };

        if post.is_liked(user_id) {
            return Ok(Outcome::conflict(
                "Error! You have already liked this post!",
            ));
        }

        like_repo::add_like(&self.pool, post_id, user_id).await?;

        Ok(Outcome::ok(
            "Post liked!",
            LikeStatus {
                post_id,
                like_count: post.like_count() + 1,
                liked: true,
            },
        ))
    }

    /// Remove a like. Guarded the same way as liking.
    pub async fn unlike_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Outcome<LikeStatus>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(Outcome::not_found("Post not found!"));
        };

        if !post.is_liked(user_id) {
            return Ok(Outcome::conflict(
                "Error! You haven't liked this post yet!",
            ));
        }

        like_repo::remove_like(&self.pool, post_id, user_id).await?;

        Ok(Outcome::ok(
            "Post unliked!",
            LikeStatus {
                post_id,
                like_count: post.like_count() - 1,
                liked: false,
            },
        ))
    }

    /// Edit the caption of an own post, marking it as updated.
    pub async fn edit_caption(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        caption: &str,
    ) -> Result<Outcome<UpdatedCaption>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(Outcome::not_found("Post not found!"));
        };

        if !post.is_author(user_id) {
            return Ok(Outcome::forbidden(
                "You are not authorized to edit this post!",
            ));
        }

        if caption.trim().is_empty() {
            return Ok(Outcome::bad_request("Caption cannot be empty!"));
        }

        post_repo::update_caption(&self.pool, post_id, caption).await?;

        Ok(Outcome::ok(
            "Post updated!",
            UpdatedCaption {
                id: post_id,
                caption: caption.to_string(),
                is_updated: true,
            },
        ))
    }

    /// Delete an own post together with its media.
    ///
    /// Media deletion runs sequentially and aborts on the first failure.
    /// Files already removed are not re-created; the post row survives until
    /// every deletion has succeeded.
    pub async fn delete_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Outcome<()>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(Outcome::not_found("Post not found!"));
        };

        if !post.is_author(user_id) {
            return Ok(Outcome::forbidden(
                "You are not authorized to delete this post!",
            ));
        }

        for url in &post.media_urls {
            if !self.media.delete(url).await? {
                tracing::warn!(post_id = %post_id, key = %url, "media deletion failed, aborting post delete");
                return Ok(Outcome::failure(502, "Failed to delete post media!"));
            }
        }

        post_repo::delete_post(&self.pool, post_id).await?;

        tracing::info!(post_id = %post_id, "post deleted");

        Ok(Outcome::ok_empty("Post deleted!"))
    }
}

/// Content validation for post creation. Returns the failure envelope for
/// the first violated rule, in order.
fn validate_create<T>(caption: &str, file_count: usize) -> Option<Outcome<T>> {
    if file_count == 0 && caption.trim().is_empty() {
        return Some(Outcome::bad_request(
            "Post must have a caption or at least one media file!",
        ));
    }
    if file_count > MAX_MEDIA_FILES {
        return Some(Outcome::bad_request("You can upload up to 10 media files!"));
    }
    None
}

/// Shape validation for an embedded poll supplied at creation.
fn validate_poll<T>(poll: &PollInput) -> Option<Outcome<T>> {
    if poll.question.trim().is_empty() {
        return Some(Outcome::bad_request("Poll question cannot be empty!"));
    }
    if poll.options.len() < 2 {
        return Some(Outcome::bad_request("A poll needs at least two options!"));
    }
    for (i, name) in poll.options.iter().enumerate() {
        if name.trim().is_empty() {
            return Some(Outcome::bad_request("Poll options cannot be empty!"));
        }
        if poll.options[..i].contains(name) {
            return Some(Outcome::bad_request("Poll options must be unique!"));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn create_requires_caption_or_media() {
        let failure = validate_create::<()>("", 0).expect("must fail");
        assert!(!failure.success);
        assert_eq!(failure.status, 400);
        assert_eq!(
            failure.message,
            "Post must have a caption or at least one media file!"
        );

        assert!(validate_create::<()>("hello", 0).is_none());
        assert!(validate_create::<()>("", 1).is_none());
        assert!(validate_create::<()>("   ", 0).is_some());
    }

    #[test]
    fn create_rejects_more_than_ten_files_regardless_of_caption() {
        let failure = validate_create::<()>("caption", 11).expect("must fail");
        assert_eq!(failure.message, "You can upload up to 10 media files!");

        let failure = validate_create::<()>("", 11).expect("must fail");
        assert_eq!(failure.message, "You can upload up to 10 media files!");

        assert!(validate_create::<()>("", 10).is_none());
    }

    #[test]
    fn poll_shape_is_validated() {
        let poll = |question: &str, options: &[&str]| PollInput {
            question: question.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            expires_at: Utc::now() + Duration::days(1),
        };

        assert!(validate_poll::<()>(&poll("q", &["a", "b"])).is_none());
        assert!(validate_poll::<()>(&poll("", &["a", "b"])).is_some());
        assert!(validate_poll::<()>(&poll("q", &["a"])).is_some());
        assert_eq!(
            validate_poll::<()>(&poll("q", &["a", "a"])).unwrap().message,
            "Poll options must be unique!"
        );
    }
}
