//! Service endpoints: greeting, liveness, readiness, version and the OpenAPI document.

use crate::handlers::{menu_item, restaurant};
use crate::models::{MenuItemOut, MenuItemPayload, RestaurantOut, RestaurantPayload};
use crate::response::{message, Message};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::create_restaurant,
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::update_restaurant,
        restaurant::delete_restaurant,
        menu_item::create_menu_item,
        menu_item::list_menu_items,
        menu_item::get_menu_item,
        menu_item::update_menu_item,
        menu_item::delete_menu_item,
    ),
    components(schemas(RestaurantPayload, RestaurantOut, MenuItemPayload, MenuItemOut, Message)),
    tags(
        (name = "restaurants", description = "Restaurants"),
        (name = "menu items", description = "Menu items of a restaurant"),
    )
)]
pub struct ApiDoc;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

pub async fn root(State(state): State<AppState>) -> Json<Message> {
    Json(message(format!("Hello from {}!", state.app_name)))
}

/// Static liveness answer; never touches the store.
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy" })
}

pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.gateway.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

pub async fn version(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": state.app_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
