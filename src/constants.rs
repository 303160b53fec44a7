/// Maximum tweet length in characters (not bytes)
pub const MAX_TWEET_LENGTH: usize = 300;

/// Default lifetime of an access token (1 hour)
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Multipart field carrying the uploaded profile picture
pub const PROFILE_PICTURE_FIELD: &str = "profile_pic";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for tweets over the length limit
pub const ERR_TWEET_TOO_LONG: &str = "Tweet exceeds 300 characters";

/// Error message for a missing or unnamed upload
pub const ERR_FILE_MISSING: &str = "file is missing";

/// Error message for sign-up requests with blank required fields
pub const ERR_SIGN_UP_FIELDS: &str = "name, email and password are required";
