pub mod tweet;
pub mod user;

pub use tweet::TweetService;
pub use user::UserService;
