use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post
/// Returns the created post
pub async fn create_post(
    pool: &PgPool,
    creator_id: Uuid,
    caption: &str,
    media_urls: &[String],
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (creator_id, caption, media_urls)
        VALUES ($1, $2, $3)
        RETURNING id, creator_id, caption, media_urls, likes, comments, comment_count,
                  event_id, is_updated, created_at
        "#,
    )
    .bind(creator_id)
    .bind(caption)
    .bind(media_urls)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, creator_id, caption, media_urls, likes, comments, comment_count,
               event_id, is_updated, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Find all posts by a single creator, newest first
pub async fn find_posts_by_creator(
    pool: &PgPool,
    creator_id: Uuid,
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, creator_id, caption, media_urls, likes, comments, comment_count,
               event_id, is_updated, created_at
        FROM posts
        WHERE creator_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(creator_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find posts whose creator is any of the given users, newest first.
/// Backs the friends feed.
pub async fn find_posts_by_creators(
    pool: &PgPool,
    creator_ids: &[Uuid],
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, creator_id, caption, media_urls, likes, comments, comment_count,
               event_id, is_updated, created_at
        FROM posts
        WHERE creator_id = ANY($1)
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(creator_ids)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find posts whose creator attends the given university, newest first.
/// Backs the university feed.
pub async fn find_posts_by_university(
    pool: &PgPool,
    university: &str,
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.creator_id, p.caption, p.media_urls, p.likes, p.comments,
               p.comment_count, p.event_id, p.is_updated, p.created_at
        FROM posts p
        JOIN user_profiles u ON p.creator_id = u.id
        WHERE u.university = $1
        ORDER BY p.created_at DESC
        LIMIT $2
        "#,
    )
    .bind(university)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Update a post caption and mark the post as edited
pub async fn update_caption(
    pool: &PgPool,
    post_id: Uuid,
    caption: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET caption = $1, is_updated = TRUE
        WHERE id = $2
        "#,
    )
    .bind(caption)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a post row. The embedded poll goes with it via cascade.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(())
}
