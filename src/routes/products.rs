use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        ActivityKind, CreateProductRequest, DeleteResponse, Product, STANDARD_SIZES,
        UpdateProductRequest,
    },
    queries::{activity_queries, product_queries},
    utils::extractors::{AdminSession, IdPath, JsonBody},
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list_products(&state.store).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.store, id)
        .await?
        .ok_or(AppError::NotFound("Ürün bulunamadı".to_string()))?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    _session: AdminSession,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let name = payload
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Zorunlu alanlar eksik".to_string()))?;

    let product = product_queries::create_product(
        &state.store,
        name,
        payload.image.unwrap_or_default(),
        payload.sizes.unwrap_or_default(),
    )
    .await?;
    tracing::info!("Product {} created", product.id);

    let (kind, message) = ActivityKind::product_added(&product.name);
    activity_queries::record_activity(&state.store, kind, message).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    _session: AdminSession,
    IdPath(id): IdPath<i64>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> Result<Json<Product>> {
    if payload.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(AppError::BadRequest("Ürün adı boş olamaz".to_string()));
    }

    let product = product_queries::update_product(&state.store, id, payload).await?;
    tracing::info!("Product {} updated", product.id);

    let (kind, message) = ActivityKind::product_updated(&product.name);
    activity_queries::record_activity(&state.store, kind, message).await?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    _session: AdminSession,
    IdPath(id): IdPath<i64>,
) -> Result<Json<DeleteResponse>> {
    let removed = product_queries::delete_product(&state.store, id).await?;
    tracing::info!("Product {} deleted", removed.id);

    let (kind, message) = ActivityKind::product_deleted(removed.id);
    activity_queries::record_activity(&state.store, kind, message).await?;

    Ok(Json(DeleteResponse { success: true }))
}

pub async fn standard_sizes() -> Json<&'static [&'static str]> {
    Json(STANDARD_SIZES)
}
