//! Book (catalogue title) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A catalogued title and its remaining stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Book {
    pub book_id: i64,
    #[validate(length(min = 1, message = "Book name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    /// Remaining available copies
    #[validate(range(min = 0, message = "Count must not be negative"))]
    pub count: i64,
}

impl Book {
    pub fn new(book_id: i64, name: impl Into<String>, author: impl Into<String>, count: i64) -> Self {
        Self {
            book_id,
            name: name.into(),
            author: author.into(),
            count,
        }
    }
}
