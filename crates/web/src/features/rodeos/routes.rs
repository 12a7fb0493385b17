use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_rodeo, list_rodeos};

pub fn routes() -> Router<Database> {
    Router::new().route("/rodeos", get(list_rodeos).post(create_rodeo))
}
