use reqwest::StatusCode;
use crate::config::RecipeConfig;
use crate::errors::UpstreamError;
use crate::models::{RecipeSearchResponse, SearchFilters};

/// Client for the external recipe search endpoint.
///
/// One GET per search, no retries, and the HTTP client's default timeout.
#[derive(Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    result_count: u32,
}

impl RecipeClient {
    pub fn new(config: &RecipeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            result_count: config.result_count,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn search(&self, filters: &SearchFilters) -> Result<RecipeSearchResponse, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;

        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", api_key.to_string()),
            ("includeIngredients", filters.ingredients.clone()),
        ];
        if let Some(diet) = filters.diet.query_value() {
            params.push(("diet", diet.to_string()));
        }
        params.push(("number", self.result_count.to_string()));
        params.push(("addRecipeInformation", "true".to_string()));
        params.push(("sort", "random".to_string()));

        tracing::debug!(
            "Searching recipes for '{}' (diet: {})",
            filters.ingredients,
            filters.diet.label()
        );

        let response = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status));
        }

        let body = response
            .json::<RecipeSearchResponse>()
            .await
            .map_err(UpstreamError::Decode)?;

        tracing::debug!("Recipe API returned {} results", body.results.len());
        Ok(body)
    }
}
