/// Business logic layer for post-service
///
/// Services orchestrate validation, authorization and repository calls, and
/// assemble result envelopes. Expected business failures come back as
/// `Outcome` values; only unexpected failures use the error channel.
pub mod dto;
pub mod feed;
pub mod polls;
pub mod posts;

pub use feed::FeedService;
pub use polls::PollService;
pub use posts::PostService;
