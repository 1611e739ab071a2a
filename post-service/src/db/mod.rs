/// Database access layer
///
/// Repositories translate entity operations into sqlx calls against
/// PostgreSQL. They carry no business rules: guards (duplicate likes,
/// authorization, expiry) live in the service layer.
pub mod like_repo;
pub mod poll_repo;
pub mod post_repo;
pub mod user_repo;
