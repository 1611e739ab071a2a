use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a user-authored content item with optional media and poll
///
/// The row keeps the document shape of the upstream data model: likes,
/// comments and media paths are arrays on the post itself. The `likes` array
/// holds no duplicate user id; the service-level guard enforces that, not the
/// storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub caption: String,
    pub media_urls: Vec<String>,
    pub likes: Vec<Uuid>,
    pub comments: Vec<Uuid>,
    pub comment_count: i32,
    pub event_id: Option<Uuid>,
    pub is_updated: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// True iff the given user created this post.
    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }

    /// True iff the given user has liked this post. Always false when the
    /// post has no likes.
    pub fn is_liked(&self, user_id: Uuid) -> bool {
        if self.likes.is_empty() {
            return false;
        }
        self.likes.contains(&user_id)
    }

    pub fn like_count(&self) -> i64 {
        self.likes.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(creator: Uuid, likes: Vec<Uuid>) -> Post {
        Post {
            id: Uuid::new_v4(),
            creator_id: creator,
            caption: "hello".to_string(),
            media_urls: vec![],
            likes,
            comments: vec![],
            comment_count: 0,
            event_id: None,
            is_updated: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn is_liked_is_false_on_empty_likes_for_any_user() {
        let p = post(Uuid::new_v4(), vec![]);
        assert!(!p.is_liked(Uuid::new_v4()));
        assert!(!p.is_liked(p.creator_id));
    }

    #[test]
    fn is_liked_checks_membership() {
        let liker = Uuid::new_v4();
        let p = post(Uuid::new_v4(), vec![liker]);
        assert!(p.is_liked(liker));
        assert!(!p.is_liked(Uuid::new_v4()));
    }

    #[test]
    fn is_author_compares_creator_id() {
        let creator = Uuid::new_v4();
        let p = post(creator, vec![]);
        assert!(p.is_author(creator));
        assert!(!p.is_author(Uuid::new_v4()));
    }

    #[test]
    fn like_count_matches_likes_length() {
        let p = post(Uuid::new_v4(), vec![Uuid::new_v4(), Uuid::new_v4()]);
        assert_eq!(p.like_count(), 2);
    }
}
