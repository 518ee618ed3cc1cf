use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};
use crate::errors::AppResult;
use crate::models::{Notice, RecipeSearchResponse, SearchForm};
use crate::state::AppState;
use crate::views::{self, results};

pub async fn search_recipes(
    State(state): State<AppState>,
    Form(search_form): Form<SearchForm>,
) -> AppResult<Response> {
    let assets = &state.config.assets;

    let filters = match search_form.to_filters() {
        Ok(filters) => filters,
        Err(e) => {
            tracing::debug!("Search form rejected: {}", e);
            let html = views::finder_page(assets, Some(&Notice::warning(e.to_string())), &search_form, "")?;
            return Ok(Html(html).into_response());
        }
    };

    tracing::info!(
        "Searching recipes: ingredients='{}' diet={} servings={}",
        filters.ingredients,
        filters.diet.label(),
        filters.desired_servings
    );

    // A failed search renders exactly like an empty one, plus the error notice
    let (response, notice) = match state.recipes.search(&filters).await {
        Ok(response) => (response, None),
        Err(e) => {
            tracing::error!("Recipe search failed: {}", e);
            (RecipeSearchResponse::default(), Some(Notice::error(e.user_message())))
        }
    };

    let presentation = views::present(&response, filters.desired_servings);
    tracing::debug!("Presenting {} recipes", presentation.rows().len());

    let html = views::finder_page(
        assets,
        notice.as_ref(),
        &search_form,
        &results::render(&presentation),
    )?;
    Ok(Html(html).into_response())
}
