/// Domain entities for post-service
///
/// Entities are immutable snapshots loaded by the repository layer; the
/// predicates on them are pure and carry no persistence concerns.
pub mod poll;
pub mod post;
pub mod user;

pub use poll::{Poll, PollOption};
pub use post::Post;
pub use user::UserProfile;
