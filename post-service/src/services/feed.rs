/// Feed assembly - friends feed, university feed and per-user listings
///
/// Feeds are creator-set projections returned newest first with a page-size
/// limit; there is no cursor.
use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{poll_repo, post_repo, user_repo};
use crate::error::Result;
use crate::models::Post;
use crate::outcome::Outcome;

use super::dto::{AuthorInfo, FeedPost};

pub struct FeedService {
    pool: PgPool,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Posts authored by the requester's friends.
    pub async fn friends_feed(&self, user_id: Uuid, limit: i64) -> Result<Outcome<Vec<FeedPost>>> {
        let Some(me) = user_repo::find_profile(&self.pool, user_id).await? else {
            return Ok(Outcome::not_found("User not found!"));
        };

        if me.friend_ids.is_empty() {
            return Ok(Outcome::ok("Feed fetched!", vec![]));
        }

        let posts = post_repo::find_posts_by_creators(&self.pool, &me.friend_ids, limit).await?;
        let items = self.assemble(posts, user_id).await?;

        Ok(Outcome::ok("Feed fetched!", items))
    }

    /// Posts authored by anyone at the requester's university.
    pub async fn university_feed(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Outcome<Vec<FeedPost>>> {
        let Some(me) = user_repo::find_profile(&self.pool, user_id).await? else {
            return Ok(Outcome::not_found("User not found!"));
        };

        let posts = post_repo::find_posts_by_university(&self.pool, &me.university, limit).await?;
        let items = self.assemble(posts, user_id).await?;

        Ok(Outcome::ok("Feed fetched!", items))
    }

    /// One creator's posts, visible through the same gate as post details.
    pub async fn user_posts(
        &self,
        viewer_id: Uuid,
        creator_id: Uuid,
        limit: i64,
    ) -> Result<Outcome<Vec<FeedPost>>> {
        let Some(creator) = user_repo::find_profile(&self.pool, creator_id).await? else {
            return Ok(Outcome::not_found("User not found!"));
        };

        if viewer_id != creator_id {
            let Some(viewer) = user_repo::find_profile(&self.pool, viewer_id).await? else {
                return Ok(Outcome::not_found("User not found!"));
            };
            if !viewer.can_interact_with(&creator) {
                return Ok(Outcome::forbidden(
                    "You are not authorized to view these posts!",
                ));
            }
        }

        let posts = post_repo::find_posts_by_creator(&self.pool, creator_id, limit).await?;
        let items = self.assemble(posts, viewer_id).await?;

        Ok(Outcome::ok("Posts fetched!", items))
    }

    /// Join posts with their author projections and poll markers. Posts whose
    /// author projection has not arrived yet are skipped rather than rendered
    /// half-empty.
    async fn assemble(&self, posts: Vec<Post>, viewer_id: Uuid) -> Result<Vec<FeedPost>> {
        if posts.is_empty() {
            return Ok(vec![]);
        }

        let creator_ids: Vec<Uuid> = posts
            .iter()
            .map(|p| p.creator_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let profiles: HashMap<Uuid, _> = user_repo::find_profiles(&self.pool, &creator_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let with_polls: HashSet<Uuid> = poll_repo::find_posts_with_polls(&self.pool, &post_ids)
            .await?
            .into_iter()
            .collect();

        let items = posts
            .into_iter()
            .filter_map(|post| {
                profiles.get(&post.creator_id).map(|author| FeedPost {
                    id: post.id,
                    author: AuthorInfo::from_profile(author),
                    caption: post.caption.clone(),
                    media_urls: post.media_urls.clone(),
                    like_count: post.like_count(),
                    comment_count: post.comment_count,
                    is_liked: post.is_liked(viewer_id),
                    has_poll: with_polls.contains(&post.id),
                    created_at: post.created_at,
                })
            })
            .collect();

        Ok(items)
    }
}
