//! Rental endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{NewRent, Rent},
    AppState,
};

/// Rent a book
#[utoipa::path(
    post,
    path = "/rents",
    tag = "rents",
    request_body = NewRent,
    responses(
        (status = 201, description = "Rental recorded", body = Rent),
        (status = 422, description = "Unknown client or book", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_rent(
    State(state): State<AppState>,
    Json(rent): Json<NewRent>,
) -> AppResult<(StatusCode, Json<Rent>)> {
    let rent = state.services.rents.rent_book(rent).await?;
    Ok((StatusCode::CREATED, Json(rent)))
}

/// Get rental by ID
#[utoipa::path(
    get,
    path = "/rents/{id}",
    tag = "rents",
    params(("id" = i64, Path, description = "Rent ID")),
    responses(
        (status = 200, description = "Rental details", body = Rent),
        (status = 404, description = "Rent not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_rent(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Rent>> {
    let rent = state.services.rents.get_rent(id).await?;
    Ok(Json(rent))
}

/// Return a rented book
#[utoipa::path(
    post,
    path = "/rents/{id}/return",
    tag = "rents",
    params(("id" = i64, Path, description = "Rent ID")),
    responses(
        (status = 200, description = "Book returned", body = Rent),
        (status = 404, description = "Rent not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_rent(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Rent>> {
    let rent = state.services.rents.return_book(id).await?;
    Ok(Json(rent))
}
