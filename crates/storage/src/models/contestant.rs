use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Contestant {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// External association number (e.g. PRCA card number), when known
    pub membership_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewContestant {
    pub first_name: String,
    pub last_name: String,
    pub membership_id: Option<String>,
}
