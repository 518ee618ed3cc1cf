use thiserror::Error;
use reqwest::StatusCode;

/// Why a recipe search produced no usable response.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Recipe API key is not configured")]
    MissingApiKey,

    #[error("Request to recipe API failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Recipe API responded with status {0}")]
    Status(StatusCode),

    #[error("Recipe API returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Message shown to the user in place of results.
    pub fn user_message(&self) -> &'static str {
        match self {
            UpstreamError::MissingApiKey => {
                "Recipe search is not configured. Please contact the administrator."
            }
            _ => "Error fetching recipes. Please try again.",
        }
    }
}
