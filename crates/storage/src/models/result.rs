use chrono::NaiveDateTime;
use sqlx::FromRow;

/// One contestant's score in one event.
///
/// `score` is a time in seconds for timed events and a point total for
/// judged ones; the row itself does not say which.
#[derive(Debug, Clone, FromRow)]
pub struct EventResult {
    pub id: i64,
    pub event_id: i64,
    pub contestant_id: i64,
    pub score: f64,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewEventResult {
    pub event_id: i64,
    pub contestant_id: i64,
    pub score: f64,
    /// Defaults to the insertion time (UTC) when absent
    pub timestamp: Option<NaiveDateTime>,
}
