pub mod follow;
pub mod tweet;
pub mod user;

pub use follow::FollowEdge;
pub use tweet::{Timeline, TimelineEntry, Tweet};
pub use user::{NewUser, User, UserCredential};
