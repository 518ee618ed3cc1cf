// Error types for the recipe finder, built on thiserror.
use thiserror::Error;

pub mod response;
pub mod store;
pub mod upstream;

pub use store::StoreError;
pub use upstream::UpstreamError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both username and password to register.")]
    EmptyField,

    #[error("Please enter at least one ingredient.")]
    MissingIngredients,

    #[error("Servings must be at least 1.")]
    InvalidServings,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Resource not found: {0}")]
    ResourceMissing(String),

    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
