/// Transfer shapes crossing the service boundary
///
/// Inputs are assembled by the handlers from the request; outputs travel
/// inside `Outcome` envelopes. These carry no behavior.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Poll, Post, UserProfile};

// ============================================
// Inputs
// ============================================

/// Metadata of one uploaded file; the bytes stay with the handler, which
/// performs the storage upload once the post record is committed.
#[derive(Debug, Clone)]
pub struct FileMeta {
    pub file_name: String,
    pub content_type: String,
}

/// Optional embedded poll supplied at post creation
#[derive(Debug, Clone, Deserialize)]
pub struct PollInput {
    pub question: String,
    pub options: Vec<String>,
    pub expires_at: DateTime<Utc>,
}

/// Input for creating a post
#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub caption: String,
    pub files: Vec<FileMeta>,
    pub poll: Option<PollInput>,
}

// ============================================
// Outputs
// ============================================

/// Echo of the created post, carrying the data the client submitted plus the
/// storage paths assigned to each file (in submission order).
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPost {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub caption: String,
    pub media_urls: Vec<String>,
    pub has_poll: bool,
    pub created_at: DateTime<Utc>,
}

/// Author block rendered inside details and feed items
#[derive(Debug, Clone, Serialize)]
pub struct AuthorInfo {
    pub id: Uuid,
    pub name: String,
    pub university: String,
    pub department: Option<String>,
    pub photo_url: Option<String>,
}

impl AuthorInfo {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            university: profile.university.clone(),
            department: profile.department.clone(),
            photo_url: profile.photo_url.clone(),
        }
    }
}

/// One option in a poll projection
#[derive(Debug, Clone, Serialize)]
pub struct PollOptionResult {
    pub name: String,
    pub vote_count: i64,
    /// Whether the requesting user's vote sits on this option
    pub voted: bool,
}

/// Poll projection for details and poll endpoints
#[derive(Debug, Clone, Serialize)]
pub struct PollResults {
    pub question: String,
    pub options: Vec<PollOptionResult>,
    pub total_votes: i32,
    pub expires_at: DateTime<Utc>,
    pub expired: bool,
}

impl PollResults {
    pub fn project(poll: &Poll, viewer_id: Uuid) -> Self {
        Self {
            question: poll.question.clone(),
            options: poll
                .options
                .iter()
                .map(|o| PollOptionResult {
                    name: o.name.clone(),
                    vote_count: o.votes.len() as i64,
                    voted: o.votes.contains(&viewer_id),
                })
                .collect(),
            total_votes: poll.total_votes,
            expires_at: poll.expires_at,
            expired: poll.is_expired(),
        }
    }
}

/// Full post view for the details endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PostDetails {
    pub id: Uuid,
    pub author: AuthorInfo,
    pub caption: String,
    pub media_urls: Vec<String>,
    pub like_count: i64,
    pub comment_count: i32,
    pub is_liked: bool,
    pub is_updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<PollResults>,
    pub created_at: DateTime<Utc>,
}

impl PostDetails {
    pub fn project(
        post: &Post,
        author: &UserProfile,
        poll: Option<&Poll>,
        viewer_id: Uuid,
    ) -> Self {
        Self {
            id: post.id,
            author: AuthorInfo::from_profile(author),
            caption: post.caption.clone(),
            media_urls: post.media_urls.clone(),
            like_count: post.like_count(),
            comment_count: post.comment_count,
            is_liked: post.is_liked(viewer_id),
            is_updated: post.is_updated,
            poll: poll.map(|p| PollResults::project(p, viewer_id)),
            created_at: post.created_at,
        }
    }
}

/// Compact post view for feed listings
#[derive(Debug, Clone, Serialize)]
pub struct FeedPost {
    pub id: Uuid,
    pub author: AuthorInfo,
    pub caption: String,
    pub media_urls: Vec<String>,
    pub like_count: i64,
    pub comment_count: i32,
    pub is_liked: bool,
    pub has_poll: bool,
    pub created_at: DateTime<Utc>,
}

/// Like state after a like/unlike mutation
#[derive(Debug, Clone, Serialize)]
pub struct LikeStatus {
    pub post_id: Uuid,
    pub like_count: i64,
    pub liked: bool,
}

/// Updated caption snapshot after an edit
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedCaption {
    pub id: Uuid,
    pub caption: String,
    pub is_updated: bool,
}
