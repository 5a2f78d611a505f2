use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{LoginRequest, LoginResponse},
    utils::{extractors::JsonBody, jwt, session},
};

pub async fn login_admin(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<(HeaderMap, Json<LoginResponse>)> {
    let admin = &state.admin;

    let username_ok =
        session::constant_time_eq(payload.username.as_bytes(), admin.username.as_bytes());
    let password_ok =
        session::constant_time_eq(payload.password.as_bytes(), admin.password.as_bytes());

    if !(username_ok && password_ok) {
        tracing::warn!("Failed admin login attempt for {:?}", payload.username);
        return Err(AppError::Unauthorized(
            "Kullanıcı adı veya şifre hatalı".to_string(),
        ));
    }

    let token = jwt::generate_token(
        &admin.session_secret,
        &admin.username,
        admin.session_ttl_hours,
    )?;
    let cookie = session::set_session_cookie(
        &token,
        admin.session_ttl_hours * 60 * 60,
        state.environment.secure_cookies(),
    );

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, header_value(cookie)?);

    tracing::info!("Admin {} logged in", admin.username);

    Ok((
        headers,
        Json(LoginResponse {
            success: true,
            redirect: session::safe_redirect(payload.redirect.as_deref()),
        }),
    ))
}

pub async fn logout_admin(
    State(state): State<AppState>,
) -> Result<(HeaderMap, Json<LoginResponse>)> {
    let cookie = session::clear_session_cookie(state.environment.secure_cookies());

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, header_value(cookie)?);

    Ok((
        headers,
        Json(LoginResponse {
            success: true,
            redirect: "/admin/login".to_string(),
        }),
    ))
}

fn header_value(cookie: String) -> Result<HeaderValue> {
    HeaderValue::try_from(cookie)
        .map_err(|e| AppError::InternalError(format!("Invalid cookie header: {}", e)))
}
