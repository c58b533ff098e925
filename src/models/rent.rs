//! Rent (book borrowing) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A borrowing of one book by one client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, FromRow, ToSchema)]
pub struct Rent {
    pub rent_id: i64,
    pub client_id: i64,
    pub book_id: i64,
    pub rented_at: DateTime<Utc>,
    /// Set once the book has been brought back
    pub returned_at: Option<DateTime<Utc>>,
}

impl Rent {
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

// Serialized by hand so the derived `returned` flag travels with the record.
impl Serialize for Rent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Rent", 6)?;
        state.serialize_field("rent_id", &self.rent_id)?;
        state.serialize_field("client_id", &self.client_id)?;
        state.serialize_field("book_id", &self.book_id)?;
        state.serialize_field("rented_at", &self.rented_at)?;
        state.serialize_field("returned_at", &self.returned_at)?;
        state.serialize_field("returned", &self.is_returned())?;
        state.end()
    }
}

/// Create rent request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct NewRent {
    pub client_id: i64,
    pub book_id: i64,
}

impl NewRent {
    pub fn new(client_id: i64, book_id: i64) -> Self {
        Self { client_id, book_id }
    }
}
