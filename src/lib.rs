//! Restaurant API: CRUD over restaurants and their menu items, backed by PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use app::{build_router, run};
pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError};
pub use models::{MenuItemOut, MenuItemPayload, RestaurantOut, RestaurantPayload};
pub use routes::{common_routes, menu_item_routes, restaurant_routes};
pub use service::{MenuItemService, RestaurantService};
pub use state::AppState;
pub use store::{Gateway, Session};
