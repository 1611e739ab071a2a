/// HTTP handlers for post-service endpoints
///
/// Handlers parse the transport, build service inputs, and render the
/// envelopes the services return. Business decisions stay out of this layer.
pub mod feed;
pub mod polls;
pub mod posts;

pub use feed::{get_friends_feed, get_university_feed, get_user_posts};
pub use polls::{get_poll_results, retract_vote, vote};
pub use posts::{create_post, delete_post, get_post, like_post, unlike_post, update_caption};

/// Pagination query parameters
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Page size clamped to 1..=100, defaulting to 20.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}
