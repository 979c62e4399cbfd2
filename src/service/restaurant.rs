use crate::error::AppError;
use crate::schema::Restaurant;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, name, street_address, description";

pub struct RestaurantService;

impl RestaurantService {
    pub async fn create(conn: &mut PgConnection, row: &Restaurant) -> Result<Restaurant, AppError> {
        let sql = format!(
            "INSERT INTO restaurants ({COLUMNS}) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id = %row.id, "query");
        let created = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.street_address)
            .bind(&row.description)
            .fetch_one(&mut *conn)
            .await?;
        Ok(created)
    }

    /// Every restaurant, in whatever order the store returns them.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Restaurant>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM restaurants");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Restaurant>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    pub async fn read(conn: &mut PgConnection, id: Uuid) -> Result<Option<Restaurant>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Overwrite all mutable columns of `row.id`. `None` when no such row exists.
    pub async fn update(conn: &mut PgConnection, row: &Restaurant) -> Result<Option<Restaurant>, AppError> {
        let sql = format!(
            "UPDATE restaurants SET name = $2, street_address = $3, description = $4 WHERE id = $1 RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id = %row.id, "query");
        let updated = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.street_address)
            .bind(&row.description)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(updated)
    }

    /// Delete one restaurant. `None` when absent; `Conflict` while menu items still reference it.
    pub async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Option<Uuid>, AppError> {
        let sql = "DELETE FROM restaurants WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, %id, "query");
        let deleted = sqlx::query_scalar::<_, Uuid>(sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await;
        match deleted {
            Ok(v) => Ok(v),
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => Err(AppError::Conflict(
                "Restaurant still has menu items".into(),
            )),
            Err(e) => Err(AppError::Db(e)),
        }
    }
}
