use axum::{
    response::{Html, IntoResponse, Response, Redirect},
    http::StatusCode,
};
use crate::errors::AppError;
use crate::models::Notice;
use crate::views;

// The IntoResponse trait implementation converts AppError into a well-formed HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Form problems go back to the page as a warning
            AppError::Validation(err) => {
                Redirect::to(&Notice::warning(err.to_string()).redirect_url()).into_response()
            }

            // Failed logins go back to the page as an error; retries are unlimited
            AppError::Auth(err) => {
                Redirect::to(&Notice::error(err.to_string()).redirect_url()).into_response()
            }

            // Missing decoration withholds the whole view
            AppError::ResourceMissing(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::error_page(&msg)),
            ).into_response(),

            AppError::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Credential store error: {}", e)
            ).into_response(),

            AppError::Session(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Session error: {}", e)
            ).into_response(),

            AppError::File(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("File error: {}", e)
            ).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use crate::errors::{AuthError, ValidationError};

    #[test]
    fn validation_error_redirects_with_warning() {
        let response = AppError::from(ValidationError::EmptyField).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with("/?level=warning&message=Please%20enter%20both"));
    }

    #[test]
    fn auth_error_redirects_with_error() {
        let response = AppError::from(AuthError::InvalidCredentials).into_response();
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with("/?level=error&message=Invalid%20credentials"));
    }

    #[test]
    fn resource_missing_is_server_error() {
        let response = AppError::ResourceMissing("gone".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
