use sqlx::SqlitePool;

use super::acquire;
use crate::error::{Result, StorageError};
use crate::models::{Event, NewEvent};

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewEvent) -> Result<Event> {
        let mut conn = acquire(self.pool).await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (event_type, round_number, rodeo_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, event_type, round_number, rodeo_id
            "#,
        )
        .bind(&new.event_type)
        .bind(new.round_number)
        .bind(new.rodeo_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            StorageError::from(e).on_constraint("Event already exists", "Rodeo not found")
        })?;

        Ok(event)
    }

    /// List the events of one rodeo
    pub async fn list_for_rodeo(&self, rodeo_id: i64) -> Result<Vec<Event>> {
        let mut conn = acquire(self.pool).await?;

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, event_type, round_number, rodeo_id
            FROM events
            WHERE rodeo_id = ?1
            ORDER BY id
            "#,
        )
        .bind(rodeo_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::rodeo::RodeoRepository;
    use crate::repository::test_support::{cheyenne, database};

    #[tokio::test]
    async fn test_create_and_list_for_rodeo() {
        let db = database().await;
        let rodeo = RodeoRepository::new(db.pool())
            .create(&cheyenne())
            .await
            .unwrap();
        let repo = EventRepository::new(db.pool());

        let bull_riding = repo
            .create(&NewEvent {
                event_type: "Bull Riding".to_string(),
                round_number: Some(1),
                rodeo_id: rodeo.id,
            })
            .await
            .unwrap();
        repo.create(&NewEvent {
            event_type: "Barrel Racing".to_string(),
            round_number: None,
            rodeo_id: rodeo.id,
        })
        .await
        .unwrap();

        let events = repo.list_for_rodeo(rodeo.id).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, bull_riding.id);
        assert_eq!(events[0].round_number, Some(1));
        assert_eq!(events[1].round_number, None);
    }

    #[tokio::test]
    async fn test_unknown_rodeo_is_constraint_violation() {
        let db = database().await;
        let err = EventRepository::new(db.pool())
            .create(&NewEvent {
                event_type: "Bull Riding".to_string(),
                round_number: Some(1),
                rodeo_id: 42,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }
}
