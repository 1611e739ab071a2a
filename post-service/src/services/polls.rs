/// Poll service - vote casting, retraction and result projection
///
/// A user holds at most one active vote per poll. Voting again on the same
/// option is rejected; voting on a different option moves the vote without
/// changing the total. Votes freeze once the poll expires.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{poll_repo, post_repo, user_repo};
use crate::error::Result;
use crate::models::{Poll, Post};
use crate::outcome::Outcome;

use super::dto::PollResults;

pub struct PollService {
    pool: PgPool,
}

impl PollService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cast, or move, the caller's vote onto the named option.
    pub async fn vote(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        option_name: &str,
    ) -> Result<Outcome<PollResults>> {
        let (post, poll) = match self.load_poll(post_id).await? {
            Ok(pair) => pair,
            Err(failure) => return Ok(failure),
        };

        if poll.is_expired() {
            return Ok(Outcome::bad_request("This poll has expired!"));
        }

        if !poll.is_viable_vote(option_name) {
            return Ok(Outcome::bad_request("Invalid poll option!"));
        }

        if let Some(failure) = self.authorize_voter(&post, user_id).await? {
            return Ok(failure);
        }

        let Some(target) = poll.options.iter().find(|o| o.name == option_name) else {
            return Ok(Outcome::bad_request("Invalid poll option!"));
        };

        let message = match poll.find_vote(user_id) {
            Some(current) if current.id == target.id => {
                return Ok(Outcome::conflict(
                    "Error! You have already voted for this option!",
                ));
            }
            Some(current) => {
                poll_repo::move_vote(&self.pool, current.id, target.id, user_id).await?;
                "Vote moved!"
            }
            None => {
                poll_repo::cast_vote(&self.pool, post_id, target.id, user_id).await?;
                "Vote recorded!"
            }
        };

        self.project_results(post_id, user_id, message).await
    }

    /// Remove the caller's active vote.
    pub async fn retract_vote(&self, post_id: Uuid, user_id: Uuid) -> Result<Outcome<PollResults>> {
        let (_, poll) = match self.load_poll(post_id).await? {
            Ok(pair) => pair,
            Err(failure) => return Ok(failure),
        };

        if poll.is_expired() {
            return Ok(Outcome::bad_request("This poll has expired!"));
        }

        let Some(current) = poll.find_vote(user_id) else {
            return Ok(Outcome::conflict("You haven't voted on this poll!"));
        };

        poll_repo::clear_vote(&self.pool, post_id, current.id, user_id).await?;

        self.project_results(post_id, user_id, "Vote removed!").await
    }

    /// Project poll results for a viewer, behind the same gate as post
    /// details.
    pub async fn get_results(&self, post_id: Uuid, viewer_id: Uuid) -> Result<Outcome<PollResults>> {
        let (post, poll) = match self.load_poll(post_id).await? {
            Ok(pair) => pair,
            Err(failure) => return Ok(failure),
        };

        if let Some(failure) = self.authorize_voter(&post, viewer_id).await? {
            return Ok(failure);
        }

        Ok(Outcome::ok(
            "Poll results fetched!",
            PollResults::project(&poll, viewer_id),
        ))
    }

    async fn load_poll(
        &self,
        post_id: Uuid,
    ) -> Result<std::result::Result<(Post, Poll), Outcome<PollResults>>> {
        let Some(post) = post_repo::find_post_by_id(&self.pool, post_id).await? else {
            return Ok(Err(Outcome::not_found("Post not found!")));
        };

        let Some(poll) = poll_repo::find_poll_by_post(&self.pool, post_id).await? else {
            return Ok(Err(Outcome::not_found("This post has no poll!")));
        };

        Ok(Ok((post, poll)))
    }

    /// The author votes and views freely; everyone else must be a friend of
    /// the creator or share the creator's university.
    async fn authorize_voter(
        &self,
        post: &Post,
        user_id: Uuid,
    ) -> Result<Option<Outcome<PollResults>>> {
        if post.is_author(user_id) {
            return Ok(None);
        }

        let Some(creator) = user_repo::find_profile(&self.pool, post.creator_id).await? else {
            return Ok(Some(Outcome::not_found("User not found!")));
        };
        let Some(voter) = user_repo::find_profile(&self.pool, user_id).await? else {
            return Ok(Some(Outcome::not_found("User not found!")));
        };

        if !Poll::is_authentic_voter(&voter, &creator) {
            return Ok(Some(Outcome::forbidden(
                "You are not authorized to vote on this poll!",
            )));
        }

        Ok(None)
    }

    async fn project_results(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        message: &str,
    ) -> Result<Outcome<PollResults>> {
        let Some(updated) = poll_repo::find_poll_by_post(&self.pool, post_id).await? else {
            return Ok(Outcome::not_found("This post has no poll!"));
        };

        Ok(Outcome::ok(message, PollResults::project(&updated, user_id)))
    }
}
