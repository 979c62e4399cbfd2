//! Shared application state for all routes.

use crate::store::Gateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
    pub app_name: String,
}

impl AppState {
    pub fn new(gateway: Gateway, app_name: impl Into<String>) -> Self {
        AppState {
            gateway,
            app_name: app_name.into(),
        }
    }
}
