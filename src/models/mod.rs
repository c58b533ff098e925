//! Data models for Biblio

pub mod book;
pub mod client;
pub mod rent;

// Re-export commonly used types
pub use book::Book;
pub use client::Client;
pub use rent::{NewRent, Rent};
