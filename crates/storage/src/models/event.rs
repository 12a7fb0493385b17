use sqlx::FromRow;

/// A competition held within a rodeo, e.g. "Bull Riding", round 2.
#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: i64,
    pub event_type: String,
    pub round_number: Option<i64>,
    pub rodeo_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_type: String,
    pub round_number: Option<i64>,
    pub rodeo_id: i64,
}
