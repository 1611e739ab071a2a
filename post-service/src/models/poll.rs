use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserProfile;

/// Poll option - a named choice and the set of voters who picked it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PollOption {
    pub id: Uuid,
    pub post_id: Uuid,
    pub name: String,
    pub votes: Vec<Uuid>,
    pub position: i32,
}

/// Poll entity - embedded voting structure owned by its post
///
/// Invariant: a voter id appears in at most one option's vote set at a time.
/// The voting service enforces this with find-vote-then-act; the entity only
/// answers questions about a loaded snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub post_id: Uuid,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_votes: i32,
    pub expires_at: DateTime<Utc>,
}

impl Poll {
    /// The option the given user has voted for, if any. Linear scan over the
    /// options in order.
    pub fn find_vote(&self, user_id: Uuid) -> Option<&PollOption> {
        self.options.iter().find(|o| o.votes.contains(&user_id))
    }

    /// True iff an option with exactly this name exists.
    pub fn is_viable_vote(&self, option_name: &str) -> bool {
        self.options.iter().any(|o| o.name == option_name)
    }

    /// Strict wall-clock comparison at call time, no grace window.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Voting is open to the post author's friends and to anyone at the same
    /// university; the same gate guards non-author post viewing.
    pub fn is_authentic_voter(voter: &UserProfile, creator: &UserProfile) -> bool {
        voter.can_interact_with(creator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn option(name: &str, votes: Vec<Uuid>, position: i32) -> PollOption {
        PollOption {
            id: Uuid::new_v4(),
            post_id: Uuid::nil(),
            name: name.to_string(),
            votes,
            position,
        }
    }

    fn poll(options: Vec<PollOption>, expires_at: DateTime<Utc>) -> Poll {
        Poll {
            post_id: Uuid::nil(),
            question: "Best study spot?".to_string(),
            options,
            total_votes: 0,
            expires_at,
        }
    }

    #[test]
    fn find_vote_locates_the_option_holding_the_voter() {
        let voter = Uuid::new_v4();
        let p = poll(
            vec![
                option("library", vec![], 1),
                option("cafe", vec![voter], 2),
            ],
            Utc::now() + Duration::hours(1),
        );
        assert_eq!(p.find_vote(voter).map(|o| o.name.as_str()), Some("cafe"));
        assert!(p.find_vote(Uuid::new_v4()).is_none());
    }

    #[test]
    fn is_viable_vote_is_exact_name_match() {
        let p = poll(
            vec![option("library", vec![], 1)],
            Utc::now() + Duration::hours(1),
        );
        assert!(p.is_viable_vote("library"));
        assert!(!p.is_viable_vote("Library"));
        assert!(!p.is_viable_vote("gym"));
    }

    #[test]
    fn expiry_is_a_strict_now_comparison() {
        let open = poll(vec![], Utc::now() + Duration::minutes(5));
        let closed = poll(vec![], Utc::now() - Duration::seconds(1));
        assert!(!open.is_expired());
        assert!(closed.is_expired());
    }
}
