use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Rodeo {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}
