use axum::{Json, extract::State};

use crate::{
    AppState,
    error::{AppError, Result},
    models::DashboardResponse,
    queries::{activity_queries, product_queries, settings_queries},
    utils::extractors::AdminSession,
};

const RECENT_ACTIVITY_LIMIT: usize = 5;

pub async fn dashboard(
    State(state): State<AppState>,
    AdminSession(claims): AdminSession,
) -> Result<Json<DashboardResponse>> {
    let products = product_queries::list_products(&state.store).await?;
    let settings = settings_queries::get_settings(&state.store).await?;
    let recent_activity =
        activity_queries::recent_activity(&state.store, RECENT_ACTIVITY_LIMIT).await?;

    Ok(Json(DashboardResponse {
        username: claims.sub,
        site_name: settings.site_name,
        product_count: products.len(),
        recent_activity,
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Sayfa bulunamadı".to_string())
}
