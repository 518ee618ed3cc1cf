use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::Request,
    body::Body,
};
use tower_sessions::Session;
use crate::models::PageState;

pub async fn require_auth(
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path();

    if path == "/" || path == "/login" || path == "/register" {
        return next.run(req).await;
    }

    match PageState::load(&session).await {
        Ok(PageState::LoggedIn) => next.run(req).await,
        Ok(PageState::LoggedOut) => {
            tracing::debug!("Unauthenticated request to {}", path);
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Session error: {}", e);
            Redirect::to("/").into_response()
        }
    }
}
