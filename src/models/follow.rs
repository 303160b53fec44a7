use serde::Serialize;

/// A directed follow edge (follower -> followee)
///
/// The table carries no uniqueness constraint, so the same pair may be
/// stored more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct FollowEdge {
    /// The follower
    pub user_id: i64,
    /// The followee
    pub follow_user_id: i64,
}
