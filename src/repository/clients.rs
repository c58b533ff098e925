//! Clients table

use super::{Entity, InsertQuery};
use crate::models::Client;

impl Entity for Client {
    type New = Client;

    const TABLE: &'static str = "clients";
    const KEY: &'static str = "client_id";
    const LABEL: &'static str = "client";
    const INSERT_COLUMNS: &'static [&'static str] = &["client_id", "name"];

    fn bind_new<'q>(new: &'q Client, query: InsertQuery<'q, Self>) -> InsertQuery<'q, Self> {
        query.bind(new.client_id).bind(new.name.as_str())
    }

    fn id(&self) -> i64 {
        self.client_id
    }

    fn describe_new(new: &Client) -> String {
        format!("client {}", new.client_id)
    }
}
