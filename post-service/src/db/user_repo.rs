use crate::models::UserProfile;
use sqlx::PgPool;
use uuid::Uuid;

/// Find a user projection by ID
pub async fn find_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, name, university, department, photo_url, friend_ids
        FROM user_profiles
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Find user projections for multiple IDs in a single query
pub async fn find_profiles(
    pool: &PgPool,
    user_ids: &[Uuid],
) -> Result<Vec<UserProfile>, sqlx::Error> {
    let profiles = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, name, university, department, photo_url, friend_ids
        FROM user_profiles
        WHERE id = ANY($1)
        "#,
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await?;

    Ok(profiles)
}
