//! Routers per resource plus the shared service routes.

mod common;
mod menu_item;
mod restaurant;
pub use common::common_routes;
pub use menu_item::menu_item_routes;
pub use restaurant::restaurant_routes;
