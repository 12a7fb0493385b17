use sqlx::SqlitePool;

use super::acquire;
use crate::error::Result;
use crate::models::{Contestant, NewContestant};

/// Repository for Contestant database operations
pub struct ContestantRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContestantRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewContestant) -> Result<Contestant> {
        let mut conn = acquire(self.pool).await?;

        let contestant = sqlx::query_as::<_, Contestant>(
            r#"
            INSERT INTO contestants (first_name, last_name, membership_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, first_name, last_name, membership_id
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.membership_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(contestant)
    }

    pub async fn find_by_membership_id(&self, membership_id: &str) -> Result<Option<Contestant>> {
        let mut conn = acquire(self.pool).await?;

        let contestant = sqlx::query_as::<_, Contestant>(
            r#"
            SELECT id, first_name, last_name, membership_id
            FROM contestants
            WHERE membership_id = ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(membership_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(contestant)
    }

    /// Case-insensitive name match, restricted to contestants without a
    /// membership id
    pub async fn find_unaffiliated_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Contestant>> {
        let mut conn = acquire(self.pool).await?;

        let contestant = sqlx::query_as::<_, Contestant>(
            r#"
            SELECT id, first_name, last_name, membership_id
            FROM contestants
            WHERE first_name = ?1 COLLATE NOCASE
              AND last_name = ?2 COLLATE NOCASE
              AND membership_id IS NULL
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(contestant)
    }

    pub async fn list(&self) -> Result<Vec<Contestant>> {
        let mut conn = acquire(self.pool).await?;

        let contestants = sqlx::query_as::<_, Contestant>(
            r#"
            SELECT id, first_name, last_name, membership_id
            FROM contestants
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(contestants)
    }
}
