//! Library members service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Client, Rent},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new member under their library card number
    pub async fn register_client(&self, client: Client) -> AppResult<Client> {
        client.validate()?;
        self.repository.clients.save(&client).await
    }

    pub async fn get_client(&self, client_id: i64) -> AppResult<Client> {
        self.repository
            .clients
            .get(client_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client with id {} not found", client_id)))
    }

    pub async fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.repository.clients.get_all().await
    }

    /// Rentals of a member, returned ones included
    pub async fn get_client_rents(&self, client_id: i64) -> AppResult<Vec<Rent>> {
        // Verify client exists
        self.get_client(client_id).await?;
        self.repository.rents.get_by_client(client_id).await
    }
}
