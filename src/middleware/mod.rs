use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    utils::{jwt, session},
};

/// Gate for the `/admin` area: without a valid session the browser is sent
/// to the login page with the requested path attached.
pub async fn admin_session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if path == "/admin/login" || path.starts_with("/admin/login/") {
        return next.run(req).await;
    }

    let claims = session::session_cookie(req.headers())
        .and_then(|token| jwt::verify_token(&state.admin.session_secret, token).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        None => {
            let target = session::login_redirect(req.uri().path());
            tracing::info!("Redirecting anonymous request to {}", target);
            Redirect::to(&target).into_response()
        }
    }
}
