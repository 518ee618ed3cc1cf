use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response, Redirect},
};
use tower_sessions::Session;
use crate::errors::{AppResult, AuthError};
use crate::models::{LoginForm, Notice, PageState, RegisterForm};
use crate::state::AppState;

pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting to Recipe Finder...";
pub const REGISTER_SUCCESS: &str = "Registration successful! You can now log in.";

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", login_form.username);

    if !state.credentials.verify(&login_form.username, &login_form.password).await? {
        tracing::info!("Invalid credentials for user: {}", login_form.username);
        return Err(AuthError::InvalidCredentials.into());
    }

    PageState::enter_logged_in(&session).await?;
    tracing::info!("User logged in: {}", login_form.username);
    Ok(Redirect::to(&Notice::success(LOGIN_SUCCESS).redirect_url()).into_response())
}

// Registering does not log the user in; a separate login is required.
pub async fn handle_register(
    State(state): State<AppState>,
    Form(register_form): Form<RegisterForm>,
) -> AppResult<Response> {
    state
        .credentials
        .register(&register_form.username, &register_form.password)
        .await
        .inspect_err(|e| tracing::warn!("Registration rejected: {}", e))?;

    tracing::info!("Registered user: {}", register_form.username);
    Ok(Redirect::to(&Notice::success(REGISTER_SUCCESS).redirect_url()).into_response())
}
