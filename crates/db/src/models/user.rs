//! User account model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tfa_core::types::{DbId, Timestamp};

/// A row from the `users` table, without the password hash.
///
/// This is the shape handlers return; the hash never leaves the storage
/// layer except through [`UserCredentials`].
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Credential row used only by the login path.
#[derive(Debug, FromRow)]
pub struct UserCredentials {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub password_hash: String,
}

/// DTO for the login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// DTO for the volunteer self-registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}
