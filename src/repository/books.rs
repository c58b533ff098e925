//! Books table

use super::{Entity, InsertQuery};
use crate::models::Book;

impl Entity for Book {
    type New = Book;

    const TABLE: &'static str = "books";
    const KEY: &'static str = "book_id";
    const LABEL: &'static str = "book";
    const INSERT_COLUMNS: &'static [&'static str] = &["book_id", "name", "author", "count"];

    fn bind_new<'q>(new: &'q Book, query: InsertQuery<'q, Self>) -> InsertQuery<'q, Self> {
        query
            .bind(new.book_id)
            .bind(new.name.as_str())
            .bind(new.author.as_str())
            .bind(new.count)
    }

    fn id(&self) -> i64 {
        self.book_id
    }

    fn describe_new(new: &Book) -> String {
        format!("book {} \"{}\"", new.book_id, new.name)
    }
}
