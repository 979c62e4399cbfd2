use crate::error::AppError;
use crate::schema::MenuItem;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, restaurant_id, name, price";

/// Menu item queries. A `restaurant_id` with no matching restaurant is rejected by the
/// store's foreign key and surfaces as [`AppError::Db`].
pub struct MenuItemService;

impl MenuItemService {
    pub async fn create(conn: &mut PgConnection, row: &MenuItem) -> Result<MenuItem, AppError> {
        let sql = format!(
            "INSERT INTO menu_items ({COLUMNS}) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id = %row.id, restaurant_id = %row.restaurant_id, "query");
        let created = sqlx::query_as::<_, MenuItem>(&sql)
            .bind(row.id)
            .bind(row.restaurant_id)
            .bind(&row.name)
            .bind(row.price)
            .fetch_one(&mut *conn)
            .await?;
        Ok(created)
    }

    pub async fn list(conn: &mut PgConnection) -> Result<Vec<MenuItem>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM menu_items");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, MenuItem>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    pub async fn read(conn: &mut PgConnection, id: Uuid) -> Result<Option<MenuItem>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM menu_items WHERE id = $1");
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, MenuItem>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    pub async fn update(conn: &mut PgConnection, row: &MenuItem) -> Result<Option<MenuItem>, AppError> {
        let sql = format!(
            "UPDATE menu_items SET restaurant_id = $2, name = $3, price = $4 WHERE id = $1 RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id = %row.id, "query");
        let updated = sqlx::query_as::<_, MenuItem>(&sql)
            .bind(row.id)
            .bind(row.restaurant_id)
            .bind(&row.name)
            .bind(row.price)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(updated)
    }

    pub async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Option<Uuid>, AppError> {
        let sql = "DELETE FROM menu_items WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, %id, "query");
        let deleted = sqlx::query_scalar::<_, Uuid>(sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(deleted)
    }
}
