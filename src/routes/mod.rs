mod activity;
mod admin;
mod health;
mod login;
mod products;
mod settings;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{AppState, middleware::admin_session_middleware};

pub fn create_router(state: &AppState) -> Router<AppState> {
    let admin_area = Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/admin/{*path}", get(admin::not_found))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_session_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api/sizes", get(products::standard_sizes))
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route(
            "/api/activity",
            get(activity::list_activity).post(activity::create_activity),
        )
        .route("/api/admin/login", post(login::login_admin))
        .route("/api/admin/logout", post(login::logout_admin))
        .merge(admin_area)
}
