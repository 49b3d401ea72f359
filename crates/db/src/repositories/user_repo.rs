//! Repository for the `users` table.

use sqlx::PgPool;
use tfa_core::types::DbId;

use crate::models::user::{User, UserCredentials};

/// Column list for users queries. Excludes the password hash, which only
/// [`UserRepo::find_credentials_by_email`] may read.
const COLUMNS: &str = "id, email, role, is_active, last_login, created_at";

/// Provides account lookups and creation.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the credential row for a login attempt.
    pub async fn find_credentials_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, role, is_active, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Create a new account, returning the created row.
    ///
    /// Generic over the executor so registration can run it inside the same
    /// transaction that creates the volunteer profile.
    pub async fn create<'e, E>(
        executor: E,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO users (email, password_hash, role, is_active) \
             VALUES ($1, $2, $3, TRUE) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password_hash)
            .bind(role)
            .fetch_one(executor)
            .await
    }

    /// Record a successful login.
    pub async fn touch_last_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login = now() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
