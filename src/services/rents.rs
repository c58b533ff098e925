//! Rental service

use crate::{
    error::{AppError, AppResult},
    models::{NewRent, Rent},
    repository::Repository,
};

#[derive(Clone)]
pub struct RentsService {
    repository: Repository,
}

impl RentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record that a client borrowed a book.
    ///
    /// Stock and borrowing limits are not checked.
    pub async fn rent_book(&self, rent: NewRent) -> AppResult<Rent> {
        self.repository.rents.save(&rent).await
    }

    pub async fn get_rent(&self, rent_id: i64) -> AppResult<Rent> {
        self.repository
            .rents
            .get(rent_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rent with id {} not found", rent_id)))
    }

    /// Return a borrowed book
    pub async fn return_book(&self, rent_id: i64) -> AppResult<Rent> {
        self.repository.rents.mark_returned(rent_id).await
    }
}
