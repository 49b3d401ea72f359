//! Repository for the `categories` and `volunteer_categories` tables.

use sqlx::PgPool;
use tfa_core::types::DbId;

use crate::models::category::{Category, CategoryListParams, CreateCategory};

/// Column list for categories queries.
const COLUMNS: &str = "id, name, category_type, description, created_at";

/// Provides category operations.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List categories, optionally filtered by type, ordered by name.
    pub async fn list(
        pool: &PgPool,
        params: &CategoryListParams,
    ) -> Result<Vec<Category>, sqlx::Error> {
        match params.category_type {
            Some(ref category_type) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM categories \
                     WHERE category_type = $1 ORDER BY name ASC"
                );
                sqlx::query_as::<_, Category>(&query)
                    .bind(category_type)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
                sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
            }
        }
    }

    /// Categories assigned to a volunteer, ordered by name.
    pub async fn list_for_volunteer(
        pool: &PgPool,
        volunteer_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT c.id, c.name, c.category_type, c.description, c.created_at \
             FROM categories c \
             JOIN volunteer_categories vc ON vc.category_id = c.id \
             WHERE vc.volunteer_id = $1 \
             ORDER BY c.name ASC",
        )
        .bind(volunteer_id)
        .fetch_all(pool)
        .await
    }

    /// Create a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, category_type, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(input.name.trim())
            .bind(&input.category_type)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }
}
