use serde::{Deserialize, Serialize};

/// User model for API responses (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub profile: String,
}

/// Sign-up request body
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile: String,
    pub password: String,
}

impl NewUser {
    /// Name, email and password must all be non-blank
    pub fn validate(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
    }
}

/// Stored credential used by login
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredential {
    pub id: i64,
    pub hashed_password: String,
}
