/// Post Service Library
///
/// Handles posts, likes, polls and feed endpoints for the Campus platform.
/// User profiles are a read-only projection maintained by the upstream
/// identity service; media files live in S3.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and transport DTOs
/// - `models`: Domain entities and their predicates
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `media`: Media classification and the S3-backed store
/// - `middleware`: JWT authentication middleware
/// - `outcome`: Result envelope returned for expected business outcomes
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod media;
pub mod middleware;
pub mod models;
pub mod outcome;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use outcome::Outcome;
