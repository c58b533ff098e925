//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Catalogue a new title
    pub async fn create_book(&self, book: Book) -> AppResult<Book> {
        book.validate()?;
        self.repository.books.save(&book).await
    }

    /// Get book by ID
    pub async fn get_book(&self, book_id: i64) -> AppResult<Book> {
        self.repository
            .books
            .get(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.get_all().await
    }
}
