//! Library member endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Client, Rent},
    AppState,
};

/// List all clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    responses(
        (status = 200, description = "Registered clients", body = Vec<Client>)
    )
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = state.services.clients.list_clients().await?;
    Ok(Json(clients))
}

/// Get client by library card number
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Library card number")),
    responses(
        (status = 200, description = "Client details", body = Client),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.get_client(id).await?;
    Ok(Json(client))
}

/// Register a new client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    request_body = Client,
    responses(
        (status = 201, description = "Client registered", body = Client),
        (status = 409, description = "Card number already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(client): Json<Client>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = state.services.clients.register_client(client).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Get rentals for a specific client
#[utoipa::path(
    get,
    path = "/clients/{id}/rents",
    tag = "rents",
    params(("id" = i64, Path, description = "Library card number")),
    responses(
        (status = 200, description = "Client's rentals", body = Vec<Rent>),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_client_rents(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Rent>>> {
    let rents = state.services.clients.get_client_rents(id).await?;
    Ok(Json(rents))
}
