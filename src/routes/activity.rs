use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Activity, CreateActivityRequest},
    queries::activity_queries,
    utils::extractors::{AdminSession, JsonBody},
};

pub async fn list_activity(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Vec<Activity>>> {
    let items = activity_queries::list_activity(&state.store).await?;

    Ok(Json(items))
}

pub async fn create_activity(
    State(state): State<AppState>,
    _session: AdminSession,
    JsonBody(payload): JsonBody<CreateActivityRequest>,
) -> Result<(StatusCode, Json<Activity>)> {
    if !payload.kind.is_known() {
        return Err(AppError::BadRequest("Geçersiz etkinlik türü".to_string()));
    }

    let item =
        activity_queries::record_activity(&state.store, payload.kind, payload.message).await?;

    Ok((StatusCode::CREATED, Json(item)))
}
