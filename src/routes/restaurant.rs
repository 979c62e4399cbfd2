//! `/restaurants` routes. The collection answers with and without the trailing slash.

use crate::handlers::restaurant::{
    create_restaurant, delete_restaurant, get_restaurant, list_restaurants, update_restaurant,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn restaurant_routes(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route("/restaurants/", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/:id",
            get(get_restaurant).put(update_restaurant).delete(delete_restaurant),
        )
        .with_state(state)
}
