//! Menu item CRUD handlers.

use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::models::{MenuItemCreate, MenuItemOut, MenuItemPayload, MenuItemUpdate};
use crate::response::{message, Message};
use crate::service::MenuItemService;
use crate::state::AppState;
use axum::{extract::State, Json};
use tracing::instrument;

const NOT_FOUND: &str = "Menu item not found";

#[utoipa::path(
    post,
    path = "/menu-items/",
    request_body = MenuItemPayload,
    responses(
        (status = 200, description = "Menu item created", body = MenuItemOut),
        (status = 422, description = "Invalid payload"),
        (status = 500, description = "Storage error, e.g. unknown restaurant_id"),
    ),
    tag = "menu items"
)]
#[instrument(skip(state))]
pub async fn create_menu_item(
    State(state): State<AppState>,
    Payload(payload): Payload<MenuItemCreate>,
) -> Result<Json<MenuItemOut>, AppError> {
    let row = payload.into_new_row();
    let mut session = state.gateway.acquire_session().await?;
    let created = MenuItemService::create(session.conn(), &row).await?;
    session.commit().await?;
    tracing::info!(id = %created.id, restaurant_id = %created.restaurant_id, "menu item created");
    Ok(Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/menu-items/",
    responses((status = 200, description = "All menu items", body = [MenuItemOut])),
    tag = "menu items"
)]
#[instrument(skip(state))]
pub async fn list_menu_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItemOut>>, AppError> {
    let mut session = state.gateway.acquire_session().await?;
    let rows = MenuItemService::list(session.conn()).await?;
    Ok(Json(rows.into_iter().map(MenuItemOut::from).collect()))
}

#[utoipa::path(
    get,
    path = "/menu-items/{id}",
    params(("id" = uuid::Uuid, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Menu item", body = MenuItemOut),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "menu items"
)]
#[instrument(skip(state))]
pub async fn get_menu_item(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<MenuItemOut>, AppError> {
    let mut session = state.gateway.acquire_session().await?;
    let row = MenuItemService::read(session.conn(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(row.into()))
}

#[utoipa::path(
    put,
    path = "/menu-items/{id}",
    params(("id" = uuid::Uuid, Path, description = "Menu item id")),
    request_body = MenuItemPayload,
    responses(
        (status = 200, description = "Menu item replaced", body = MenuItemOut),
        (status = 404, description = "Menu item not found"),
        (status = 422, description = "Invalid payload"),
    ),
    tag = "menu items"
)]
#[instrument(skip(state))]
pub async fn update_menu_item(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(payload): Payload<MenuItemUpdate>,
) -> Result<Json<MenuItemOut>, AppError> {
    let row = payload.into_row(id);
    let mut session = state.gateway.acquire_session().await?;
    let updated = MenuItemService::update(session.conn(), &row)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    session.commit().await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/menu-items/{id}",
    params(("id" = uuid::Uuid, Path, description = "Menu item id")),
    responses(
        (status = 200, description = "Menu item deleted", body = Message),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "menu items"
)]
#[instrument(skip(state))]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Message>, AppError> {
    let mut session = state.gateway.acquire_session().await?;
    MenuItemService::delete(session.conn(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    session.commit().await?;
    Ok(Json(message("Menu item deleted successfully")))
}
