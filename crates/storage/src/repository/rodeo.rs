use sqlx::SqlitePool;

use super::acquire;
use crate::dto::rodeo::CreateRodeoRequest;
use crate::error::{Result, StorageError};
use crate::models::Rodeo;

/// Repository for Rodeo database operations
pub struct RodeoRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RodeoRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all rodeos in insertion order
    pub async fn list(&self) -> Result<Vec<Rodeo>> {
        let mut conn = acquire(self.pool).await?;

        let rodeos = sqlx::query_as::<_, Rodeo>(
            r#"
            SELECT id, name, location, start_date, end_date
            FROM rodeos
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rodeos)
    }

    /// Look a rodeo up by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Rodeo>> {
        let mut conn = acquire(self.pool).await?;

        let rodeo = sqlx::query_as::<_, Rodeo>(
            r#"
            SELECT id, name, location, start_date, end_date
            FROM rodeos
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(rodeo)
    }

    /// Insert a rodeo and return the stored row, generated id included
    pub async fn create(&self, req: &CreateRodeoRequest) -> Result<Rodeo> {
        let mut conn = acquire(self.pool).await?;

        let rodeo = sqlx::query_as::<_, Rodeo>(
            r#"
            INSERT INTO rodeos (name, location, start_date, end_date)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, location, start_date, end_date
            "#,
        )
        .bind(&req.name)
        .bind(&req.location)
        .bind(req.start_date)
        .bind(req.end_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            StorageError::from(e).on_constraint("Rodeo name already exists", "Invalid reference")
        })?;

        Ok(rodeo)
    }
}
