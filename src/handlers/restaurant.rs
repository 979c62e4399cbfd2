//! Restaurant CRUD handlers. Each call runs in its own session.

use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::models::{RestaurantCreate, RestaurantOut, RestaurantPayload, RestaurantUpdate};
use crate::response::{message, Message};
use crate::service::RestaurantService;
use crate::state::AppState;
use axum::{extract::State, Json};
use tracing::instrument;

const NOT_FOUND: &str = "Restaurant not found";

#[utoipa::path(
    post,
    path = "/restaurants/",
    request_body = RestaurantPayload,
    responses(
        (status = 200, description = "Restaurant created", body = RestaurantOut),
        (status = 422, description = "Invalid payload"),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Payload(payload): Payload<RestaurantCreate>,
) -> Result<Json<RestaurantOut>, AppError> {
    let row = payload.into_new_row();
    let mut session = state.gateway.acquire_session().await?;
    let created = RestaurantService::create(session.conn(), &row).await?;
    session.commit().await?;
    tracing::info!(id = %created.id, "restaurant created");
    Ok(Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/restaurants/",
    responses((status = 200, description = "All restaurants", body = [RestaurantOut])),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Json<Vec<RestaurantOut>>, AppError> {
    let mut session = state.gateway.acquire_session().await?;
    let rows = RestaurantService::list(session.conn()).await?;
    Ok(Json(rows.into_iter().map(RestaurantOut::from).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = uuid::Uuid, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant", body = RestaurantOut),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<RestaurantOut>, AppError> {
    let mut session = state.gateway.acquire_session().await?;
    let row = RestaurantService::read(session.conn(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(row.into()))
}

#[utoipa::path(
    put,
    path = "/restaurants/{id}",
    params(("id" = uuid::Uuid, Path, description = "Restaurant id")),
    request_body = RestaurantPayload,
    responses(
        (status = 200, description = "Restaurant replaced", body = RestaurantOut),
        (status = 404, description = "Restaurant not found"),
        (status = 422, description = "Invalid payload"),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn update_restaurant(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(payload): Payload<RestaurantUpdate>,
) -> Result<Json<RestaurantOut>, AppError> {
    let row = payload.into_row(id);
    let mut session = state.gateway.acquire_session().await?;
    let updated = RestaurantService::update(session.conn(), &row)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    session.commit().await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = uuid::Uuid, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant deleted", body = Message),
        (status = 404, description = "Restaurant not found"),
        (status = 409, description = "Menu items still reference the restaurant"),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Message>, AppError> {
    let mut session = state.gateway.acquire_session().await?;
    RestaurantService::delete(session.conn(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    session.commit().await?;
    tracing::info!(%id, "restaurant deleted");
    Ok(Json(message("Restaurant deleted successfully")))
}
