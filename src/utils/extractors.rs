use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::{
    AppState,
    error::AppError,
    utils::{
        jwt::{self, Claims},
        session,
    },
};

/// `axum::Json` with rejections answered in the crate's error format.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` with rejections answered in the crate's error format.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

/// A verified admin session. Handlers taking this answer 401 without one.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Claims);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(AdminSession(claims.clone()));
        }

        let token = session::session_cookie(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Oturum açmanız gerekiyor".to_string()))?;

        let claims = jwt::verify_token(&state.admin.session_secret, token)?;

        Ok(AdminSession(claims))
    }
}
