//! `/menu-items` routes.

use crate::handlers::menu_item::{
    create_menu_item, delete_menu_item, get_menu_item, list_menu_items, update_menu_item,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn menu_item_routes(state: AppState) -> Router {
    Router::new()
        .route("/menu-items", get(list_menu_items).post(create_menu_item))
        .route("/menu-items/", get(list_menu_items).post(create_menu_item))
        .route(
            "/menu-items/:id",
            get(get_menu_item).put(update_menu_item).delete(delete_menu_item),
        )
        .with_state(state)
}
