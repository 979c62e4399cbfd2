//! Single-statement queries per entity, run on a session's connection.

mod menu_item;
mod restaurant;
pub use menu_item::MenuItemService;
pub use restaurant::RestaurantService;
