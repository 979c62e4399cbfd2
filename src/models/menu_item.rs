use crate::schema::MenuItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /menu-items/` and `PUT /menu-items/{id}`. `price` is in whole currency
/// units and must be present; the stored column is nullable but the API never writes NULL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct MenuItemPayload {
    pub name: String,
    pub price: i32,
    pub restaurant_id: Uuid,
}

pub type MenuItemCreate = MenuItemPayload;
pub type MenuItemUpdate = MenuItemPayload;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemOut {
    pub id: Uuid,
    pub name: String,
    /// Null only for rows written outside this API.
    pub price: Option<i32>,
    pub restaurant_id: Uuid,
}

impl MenuItemPayload {
    pub fn into_new_row(self) -> MenuItem {
        self.into_row(Uuid::new_v4())
    }

    pub fn into_row(self, id: Uuid) -> MenuItem {
        let MenuItemPayload {
            name,
            price,
            restaurant_id,
        } = self;
        MenuItem {
            id,
            restaurant_id,
            name,
            price: Some(price),
        }
    }
}

impl From<MenuItem> for MenuItemOut {
    fn from(row: MenuItem) -> Self {
        let MenuItem {
            id,
            restaurant_id,
            name,
            price,
        } = row;
        MenuItemOut {
            id,
            name,
            price,
            restaurant_id,
        }
    }
}
