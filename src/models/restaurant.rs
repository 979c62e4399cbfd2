use crate::schema::Restaurant;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /restaurants/` and `PUT /restaurants/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct RestaurantPayload {
    pub name: String,
    pub street_address: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type RestaurantCreate = RestaurantPayload;

/// Full replacement: every field is written, an absent `description` clears it.
pub type RestaurantUpdate = RestaurantPayload;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantOut {
    pub id: Uuid,
    pub name: String,
    pub street_address: String,
    pub description: Option<String>,
}

impl RestaurantPayload {
    /// New row with a fresh identity.
    pub fn into_new_row(self) -> Restaurant {
        self.into_row(Uuid::new_v4())
    }

    /// Row carrying `id` with every mutable column taken from the payload.
    pub fn into_row(self, id: Uuid) -> Restaurant {
        let RestaurantPayload {
            name,
            street_address,
            description,
        } = self;
        Restaurant {
            id,
            name,
            street_address,
            description,
        }
    }
}

impl From<Restaurant> for RestaurantOut {
    fn from(row: Restaurant) -> Self {
        let Restaurant {
            id,
            name,
            street_address,
            description,
        } = row;
        RestaurantOut {
            id,
            name,
            street_address,
            description,
        }
    }
}
