//! HTTP handlers for restaurants, menu items and the service endpoints.

pub mod common;
pub mod menu_item;
pub mod restaurant;
