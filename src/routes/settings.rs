use axum::{Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::{ActivityKind, Settings, SettingsPatch},
    queries::{activity_queries, settings_queries},
    utils::extractors::{AdminSession, JsonBody},
};

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>> {
    let settings = settings_queries::get_settings(&state.store).await?;

    Ok(Json(settings))
}

pub async fn update_settings(
    State(state): State<AppState>,
    _session: AdminSession,
    JsonBody(patch): JsonBody<SettingsPatch>,
) -> Result<Json<Settings>> {
    let settings = settings_queries::update_settings(&state.store, patch).await?;
    tracing::info!("Site settings updated");

    let (kind, message) = ActivityKind::settings_updated();
    activity_queries::record_activity(&state.store, kind, message).await?;

    Ok(Json(settings))
}
