use sqlx::SqlitePool;

use super::acquire;
use crate::error::{Result, StorageError};
use crate::models::{EventResult, NewEventResult};

/// Repository for Result database operations
pub struct ResultRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a score; without an explicit timestamp the row is stamped with
    /// the current UTC time.
    pub async fn create(&self, new: &NewEventResult) -> Result<EventResult> {
        let mut conn = acquire(self.pool).await?;

        let result = sqlx::query_as::<_, EventResult>(
            r#"
            INSERT INTO results (event_id, contestant_id, score, timestamp)
            VALUES (?1, ?2, ?3, COALESCE(?4, strftime('%Y-%m-%dT%H:%M:%f', 'now')))
            RETURNING id, event_id, contestant_id, score, timestamp
            "#,
        )
        .bind(new.event_id)
        .bind(new.contestant_id)
        .bind(new.score)
        .bind(new.timestamp)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_constraint("Result already exists", "Event or contestant not found")
        })?;

        Ok(result)
    }

    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<EventResult>> {
        let mut conn = acquire(self.pool).await?;

        let results = sqlx::query_as::<_, EventResult>(
            r#"
            SELECT id, event_id, contestant_id, score, timestamp
            FROM results
            WHERE event_id = ?1
            ORDER BY id
            "#,
        )
        .bind(event_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(results)
    }

    pub async fn list_for_contestant(&self, contestant_id: i64) -> Result<Vec<EventResult>> {
        let mut conn = acquire(self.pool).await?;

        let results = sqlx::query_as::<_, EventResult>(
            r#"
            SELECT id, event_id, contestant_id, score, timestamp
            FROM results
            WHERE contestant_id = ?1
            ORDER BY id
            "#,
        )
        .bind(contestant_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime, Utc};

    use super::*;
    use crate::models::{Contestant, Event, NewContestant, NewEvent};
    use crate::repository::contestant::ContestantRepository;
    use crate::repository::event::EventRepository;
    use crate::repository::rodeo::RodeoRepository;
    use crate::repository::test_support::{cheyenne, database};

    async fn seed(db: &crate::Database) -> (Event, Contestant) {
        let rodeo = RodeoRepository::new(db.pool())
            .create(&cheyenne())
            .await
            .unwrap();
        let event = EventRepository::new(db.pool())
            .create(&NewEvent {
                event_type: "Tie-Down Roping".to_string(),
                round_number: Some(1),
                rodeo_id: rodeo.id,
            })
            .await
            .unwrap();
        let contestant = ContestantRepository::new(db.pool())
            .create(&NewContestant {
                first_name: "Shad".to_string(),
                last_name: "Mayfield".to_string(),
                membership_id: None,
            })
            .await
            .unwrap();
        (event, contestant)
    }

    #[tokio::test]
    async fn test_timestamp_defaults_to_creation_time() {
        let db = database().await;
        let (event, contestant) = seed(&db).await;

        let before = Utc::now().naive_utc() - Duration::seconds(1);
        let result = ResultRepository::new(db.pool())
            .create(&NewEventResult {
                event_id: event.id,
                contestant_id: contestant.id,
                score: 7.4,
                timestamp: None,
            })
            .await
            .unwrap();
        let after = Utc::now().naive_utc() + Duration::seconds(1);

        assert!(result.timestamp >= before && result.timestamp <= after);
        assert_eq!(result.score, 7.4);
    }

    #[tokio::test]
    async fn test_explicit_timestamp_is_kept() {
        let db = database().await;
        let (event, contestant) = seed(&db).await;
        let at: NaiveDateTime = "2024-07-21T14:30:00".parse().unwrap();

        let result = ResultRepository::new(db.pool())
            .create(&NewEventResult {
                event_id: event.id,
                contestant_id: contestant.id,
                score: 88.5,
                timestamp: Some(at),
            })
            .await
            .unwrap();

        assert_eq!(result.timestamp, at);
    }

    #[tokio::test]
    async fn test_lists_by_event_and_contestant() {
        let db = database().await;
        let (event, contestant) = seed(&db).await;
        let repo = ResultRepository::new(db.pool());

        for score in [8.1, 7.9] {
            repo.create(&NewEventResult {
                event_id: event.id,
                contestant_id: contestant.id,
                score,
                timestamp: None,
            })
            .await
            .unwrap();
        }

        let by_event = repo.list_for_event(event.id).await.unwrap();
        let by_contestant = repo.list_for_contestant(contestant.id).await.unwrap();
        assert_eq!(by_event.len(), 2);
        assert_eq!(by_event[1].score, 7.9);
        assert_eq!(by_contestant.len(), 2);
        assert!(repo.list_for_event(event.id + 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dangling_references_are_constraint_violations() {
        let db = database().await;
        let (event, contestant) = seed(&db).await;
        let repo = ResultRepository::new(db.pool());

        let missing_event = repo
            .create(&NewEventResult {
                event_id: event.id + 100,
                contestant_id: contestant.id,
                score: 80.0,
                timestamp: None,
            })
            .await
            .unwrap_err();
        let missing_contestant = repo
            .create(&NewEventResult {
                event_id: event.id,
                contestant_id: contestant.id + 100,
                score: 80.0,
                timestamp: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(missing_event, StorageError::ConstraintViolation(_)));
        assert!(matches!(missing_contestant, StorageError::ConstraintViolation(_)));
        assert!(repo.list_for_event(event.id).await.unwrap().is_empty());
    }
}
