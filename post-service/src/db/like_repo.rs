use sqlx::PgPool;
use uuid::Uuid;

/// Append a user to a post's likes array.
///
/// Plain array update with no conditional clause: the duplicate guard lives
/// in the service layer, and concurrent like/unlike on the same post race
/// with last-write-wins semantics at this level.
pub async fn add_like(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET likes = array_append(likes, $2)
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a user from a post's likes array.
pub async fn remove_like(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET likes = array_remove(likes, $2)
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}
