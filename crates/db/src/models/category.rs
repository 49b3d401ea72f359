//! Category model.
//!
//! Categories tag volunteers with skills or interest groups via the
//! `volunteer_categories` join table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tfa_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub category_type: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Query parameters for `GET /categories`.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryListParams {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// DTO for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub category_type: Option<String>,
    pub description: Option<String>,
}
