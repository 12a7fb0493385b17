use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::rodeo::{CreateRodeoRequest, RodeoResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/rodeos",
    responses(
        (status = 200, description = "List all rodeos successfully", body = Vec<RodeoResponse>)
    ),
    tag = "rodeos"
)]
pub async fn list_rodeos(
    State(db): State<Database>,
) -> Result<Json<Vec<RodeoResponse>>, WebError> {
    let rodeos = services::list_rodeos(db.pool()).await?;

    let response: Vec<RodeoResponse> = rodeos.into_iter().map(RodeoResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/rodeos",
    request_body = CreateRodeoRequest,
    responses(
        (status = 201, description = "Rodeo created successfully", body = RodeoResponse),
        (status = 409, description = "Rodeo name already exists"),
        (status = 422, description = "Missing or mistyped field")
    ),
    tag = "rodeos"
)]
pub async fn create_rodeo(
    State(db): State<Database>,
    payload: Result<Json<CreateRodeoRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;

    let rodeo = services::create_rodeo(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(RodeoResponse::from(rodeo))).into_response())
}
