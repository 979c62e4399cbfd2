//! Persisted entities: table DDL and row types.
//!
//! `menu_items.restaurant_id` references `restaurants.id` without a cascade rule, so the
//! store refuses to delete a restaurant that still has menu items.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const RESTAURANTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        street_address TEXT NOT NULL,
        description TEXT
    )
"#;

const MENU_ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS menu_items (
        id UUID PRIMARY KEY,
        restaurant_id UUID NOT NULL REFERENCES restaurants (id),
        name TEXT NOT NULL,
        price INTEGER
    )
"#;

const MENU_ITEMS_RESTAURANT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS menu_items_restaurant_id_idx ON menu_items (restaurant_id)";

/// Create both tables if they do not exist. Safe to run on every start; this is not a migration system.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in [RESTAURANTS_DDL, MENU_ITEMS_DDL, MENU_ITEMS_RESTAURANT_INDEX] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("schema ensured");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub street_address: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MenuItem {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub price: Option<i32>,
}
