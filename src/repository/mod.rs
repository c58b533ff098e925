//! Repository layer for database operations
//!
//! Every entity goes through the same [`Table`] implementation; entity
//! specific queries live next to the entity's [`Entity`] impl.

pub mod books;
pub mod clients;
pub mod rents;

use std::marker::PhantomData;

use sqlx::{
    query::QueryAs,
    sqlite::{SqliteArguments, SqliteRow},
    FromRow, Sqlite, SqlitePool,
};

use crate::{
    error::{AppError, AppResult},
    models::{Book, Client, Rent},
};

/// Insert statement handed to [`Entity::bind_new`] for binding values
pub type InsertQuery<'q, E> = QueryAs<'q, Sqlite, E, SqliteArguments<'q>>;

/// A record type stored in one table keyed by an integer column.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    /// Input accepted by [`Table::save`]
    type New: Send + Sync;

    const TABLE: &'static str;
    const KEY: &'static str;
    /// Human readable name used in log lines and error messages
    const LABEL: &'static str;
    /// Columns written on insert, in the order [`Entity::bind_new`] binds them
    const INSERT_COLUMNS: &'static [&'static str];

    fn bind_new<'q>(new: &'q Self::New, query: InsertQuery<'q, Self>) -> InsertQuery<'q, Self>;

    /// Primary key value
    fn id(&self) -> i64;

    /// Description of a pending insert for log lines and errors
    fn describe_new(new: &Self::New) -> String;
}

/// Generic access to one entity table
pub struct Table<E> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Table<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Table<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a record in its own transaction and return it as stored.
    ///
    /// On failure the transaction is rolled back and the cause is returned.
    pub async fn save(&self, new: &E::New) -> AppResult<E> {
        let what = E::describe_new(new);
        let placeholders = vec!["?"; E::INSERT_COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            E::TABLE,
            E::INSERT_COLUMNS.join(", "),
            placeholders
        );

        let mut tx = self.pool.begin().await?;

        let result = E::bind_new(new, sqlx::query_as::<_, E>(&sql))
            .fetch_one(&mut *tx)
            .await;

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", what, e);
                let err = AppError::from_write(e, &what);
                if let Err(rollback) = tx.rollback().await {
                    tracing::error!("Rollback after failed save of {} failed: {}", what, rollback);
                }
                return Err(err);
            }
        };

        tx.commit().await?;
        tracing::info!("Saved {} {} into {}", E::LABEL, saved.id(), E::TABLE);

        Ok(saved)
    }

    /// Fetch a record by primary key
    pub async fn get(&self, id: i64) -> AppResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE {} = ?", E::TABLE, E::KEY);
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Fetch every record, ordered by primary key
    pub async fn get_all(&self) -> AppResult<Vec<E>> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", E::TABLE, E::KEY);
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Number of stored records
    pub async fn count(&self) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub books: Table<Book>,
    pub clients: Table<Client>,
    pub rents: Table<Rent>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            books: Table::new(pool.clone()),
            clients: Table::new(pool.clone()),
            rents: Table::new(pool.clone()),
            pool,
        }
    }
}
