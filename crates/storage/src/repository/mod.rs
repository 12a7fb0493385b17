use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use crate::error::{Result, StorageError};

pub mod contestant;
pub mod event;
pub mod result;
pub mod rodeo;

/// Check a connection out of the pool for one unit of work.
///
/// The connection goes back to the pool when the guard is dropped, on both
/// the success and the error path.
pub(crate) async fn acquire(pool: &SqlitePool) -> Result<PoolConnection<Sqlite>> {
    pool.acquire().await.map_err(StorageError::Unavailable)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::Database;
    use crate::dto::rodeo::CreateRodeoRequest;

    pub async fn database() -> Database {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    pub fn cheyenne() -> CreateRodeoRequest {
        CreateRodeoRequest {
            name: "Cheyenne Frontier Days".to_string(),
            location: "Cheyenne, WY".to_string(),
            start_date: "2024-07-19T00:00:00".parse().unwrap(),
            end_date: "2024-07-28T00:00:00".parse().unwrap(),
        }
    }
}
