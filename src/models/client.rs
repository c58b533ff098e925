//! Client (library member) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A registered library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Client {
    /// Library card number
    pub client_id: i64,
    /// Full name
    #[validate(length(min = 1, message = "Client name must not be empty"))]
    pub name: String,
}

impl Client {
    pub fn new(client_id: i64, name: impl Into<String>) -> Self {
        Self {
            client_id,
            name: name.into(),
        }
    }
}
