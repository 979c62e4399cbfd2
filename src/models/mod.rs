//! Transfer models: the JSON shapes accepted and returned over HTTP.

pub mod menu_item;
pub mod restaurant;

pub use menu_item::{MenuItemCreate, MenuItemOut, MenuItemPayload, MenuItemUpdate};
pub use restaurant::{RestaurantCreate, RestaurantOut, RestaurantPayload, RestaurantUpdate};
