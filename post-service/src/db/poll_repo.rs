use crate::models::{Poll, PollOption};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a poll with its options for a post.
///
/// The poll is one embedded document from the domain's point of view, so the
/// question and its options are written in a single transaction.
pub async fn create_poll(
    pool: &PgPool,
    post_id: Uuid,
    question: &str,
    expires_at: DateTime<Utc>,
    option_names: &[String],
) -> Result<Poll, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO polls (post_id, question, expires_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(post_id)
    .bind(question)
    .bind(expires_at)
    .execute(&mut *tx)
    .await?;

    let mut options = Vec::with_capacity(option_names.len());
    for (idx, name) in option_names.iter().enumerate() {
        let option = sqlx::query_as::<_, PollOption>(
            r#"
            INSERT INTO poll_options (post_id, name, position)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, name, votes, position
            "#,
        )
        .bind(post_id)
        .bind(name)
        .bind((idx + 1) as i32)
        .fetch_one(&mut *tx)
        .await?;
        options.push(option);
    }

    tx.commit().await?;

    Ok(Poll {
        post_id,
        question: question.to_string(),
        options,
        total_votes: 0,
        expires_at,
    })
}

/// Load the poll embedded in a post, with options in creation order.
pub async fn find_poll_by_post(pool: &PgPool, post_id: Uuid) -> Result<Option<Poll>, sqlx::Error> {
    let head = sqlx::query_as::<_, (String, i32, DateTime<Utc>)>(
        r#"
        SELECT question, total_votes, expires_at
        FROM polls
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    let Some((question, total_votes, expires_at)) = head else {
        return Ok(None);
    };

    let options = sqlx::query_as::<_, PollOption>(
        r#"
        SELECT id, post_id, name, votes, position
        FROM poll_options
        WHERE post_id = $1
        ORDER BY position ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(Some(Poll {
        post_id,
        question,
        options,
        total_votes,
        expires_at,
    }))
}

/// Which of the given posts carry a poll
pub async fn find_posts_with_polls(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<Uuid>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (Uuid,)>(
        r#"
        SELECT post_id
        FROM polls
        WHERE post_id = ANY($1)
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Record a first-time vote: append the voter and bump the total.
pub async fn cast_vote(
    pool: &PgPool,
    post_id: Uuid,
    option_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE poll_options
        SET votes = array_append(votes, $2)
        WHERE id = $1
        "#,
    )
    .bind(option_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE polls
        SET total_votes = total_votes + 1
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Move an existing vote to a different option. The total is unchanged.
pub async fn move_vote(
    pool: &PgPool,
    from_option_id: Uuid,
    to_option_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE poll_options
        SET votes = array_remove(votes, $2)
        WHERE id = $1
        "#,
    )
    .bind(from_option_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE poll_options
        SET votes = array_append(votes, $2)
        WHERE id = $1
        "#,
    )
    .bind(to_option_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Remove an active vote and decrement the total.
pub async fn clear_vote(
    pool: &PgPool,
    post_id: Uuid,
    option_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE poll_options
        SET votes = array_remove(votes, $2)
        WHERE id = $1
        "#,
    )
    .bind(option_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE polls
        SET total_votes = GREATEST(total_votes - 1, 0)
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}
