use sqlx::SqlitePool;
use storage::{
    dto::rodeo::CreateRodeoRequest, error::Result, models::Rodeo,
    repository::rodeo::RodeoRepository,
};

/// List all rodeos
pub async fn list_rodeos(pool: &SqlitePool) -> Result<Vec<Rodeo>> {
    let repo = RodeoRepository::new(pool);
    repo.list().await
}

/// Create a new rodeo
pub async fn create_rodeo(pool: &SqlitePool, request: &CreateRodeoRequest) -> Result<Rodeo> {
    let repo = RodeoRepository::new(pool);
    let rodeo = repo.create(request).await?;

    tracing::info!(rodeo_id = rodeo.id, name = %rodeo.name, "Rodeo created");
    Ok(rodeo)
}
