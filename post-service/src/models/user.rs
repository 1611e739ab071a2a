use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only user projection for feed rendering and authorization
///
/// Maintained by the upstream identity service; post-service never writes it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub university: String,
    pub department: Option<String>,
    pub photo_url: Option<String>,
    pub friend_ids: Vec<Uuid>,
}

impl UserProfile {
    pub fn is_friend_of(&self, user_id: Uuid) -> bool {
        self.friend_ids.contains(&user_id)
    }

    /// Shared interaction policy: a user may view a post, and vote on its
    /// poll, when they are a friend of the creator or attend the same
    /// university (case-sensitive exact match). Authors bypass this gate at
    /// the call sites.
    pub fn can_interact_with(&self, creator: &UserProfile) -> bool {
        self.is_friend_of(creator.id) || self.university == creator.university
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(university: &str, friend_ids: Vec<Uuid>) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "someone".to_string(),
            university: university.to_string(),
            department: None,
            photo_url: None,
            friend_ids,
        }
    }

    #[test]
    fn friends_may_interact_across_universities() {
        let creator = profile("MIT", vec![]);
        let viewer = profile("Stanford", vec![creator.id]);
        assert!(viewer.can_interact_with(&creator));
    }

    #[test]
    fn same_university_may_interact_without_friendship() {
        let creator = profile("MIT", vec![]);
        let viewer = profile("MIT", vec![]);
        assert!(viewer.can_interact_with(&creator));
    }

    #[test]
    fn university_match_is_case_sensitive() {
        let creator = profile("MIT", vec![]);
        let viewer = profile("mit", vec![]);
        assert!(!viewer.can_interact_with(&creator));
    }

    #[test]
    fn stranger_from_another_university_is_rejected() {
        let creator = profile("MIT", vec![]);
        let viewer = profile("Stanford", vec![Uuid::new_v4()]);
        assert!(!viewer.can_interact_with(&creator));
    }
}
