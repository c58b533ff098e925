//! Rents table and rental queries

use chrono::Utc;

use super::{Entity, InsertQuery, Table};
use crate::{
    error::{AppError, AppResult},
    models::{NewRent, Rent},
};

impl Entity for Rent {
    type New = NewRent;

    const TABLE: &'static str = "rents";
    const KEY: &'static str = "rent_id";
    const LABEL: &'static str = "rent";
    const INSERT_COLUMNS: &'static [&'static str] = &["client_id", "book_id", "rented_at"];

    fn bind_new<'q>(new: &'q NewRent, query: InsertQuery<'q, Self>) -> InsertQuery<'q, Self> {
        query.bind(new.client_id).bind(new.book_id).bind(Utc::now())
    }

    fn id(&self) -> i64 {
        self.rent_id
    }

    fn describe_new(new: &NewRent) -> String {
        format!("rent of book {} by client {}", new.book_id, new.client_id)
    }
}

impl Table<Rent> {
    /// All rentals held by a client, oldest first
    pub async fn get_by_client(&self, client_id: i64) -> AppResult<Vec<Rent>> {
        let rents = sqlx::query_as::<_, Rent>(
            "SELECT * FROM rents WHERE client_id = ? ORDER BY rent_id",
        )
        .bind(client_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rents)
    }

    /// Close an active rental. A rental can only be returned once.
    pub async fn mark_returned(&self, rent_id: i64) -> AppResult<Rent> {
        let rent = self
            .get(rent_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rent with id {} not found", rent_id)))?;

        if rent.is_returned() {
            return Err(AppError::BusinessRule(format!("Rent {} already returned", rent_id)));
        }

        let mut tx = self.pool().begin().await?;

        let updated = sqlx::query_as::<_, Rent>(
            "UPDATE rents SET returned_at = ? WHERE rent_id = ? AND returned_at IS NULL RETURNING *",
        )
        .bind(Utc::now())
        .bind(rent_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            tx.rollback().await?;
            return Err(AppError::BusinessRule(format!("Rent {} already returned", rent_id)));
        };

        tx.commit().await?;
        tracing::info!(
            "Book {} returned by client {} (rent {})",
            updated.book_id,
            updated.client_id,
            updated.rent_id
        );

        Ok(updated)
    }
}
