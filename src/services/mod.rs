//! Business logic services

pub mod catalog;
pub mod clients;
pub mod rents;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub clients: clients::ClientsService,
    pub rents: rents::RentsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            clients: clients::ClientsService::new(repository.clone()),
            rents: rents::RentsService::new(repository.clone()),
            repository,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}
