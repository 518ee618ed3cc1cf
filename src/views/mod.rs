//! HTML for the two views of the page.
//!
//! Templates are read from `assets.templates_dir` on every request and
//! filled by `{{placeholder}}` substitution.

pub mod background;
pub mod results;

use std::path::Path;
use crate::config::AssetsConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Diet, Notice, SearchForm};

pub use results::present;

pub const LOGIN_BACKGROUND_MISSING: &str =
    "Login background image not found. Please ensure the image is in the correct path.";
pub const RECIPE_BACKGROUND_MISSING: &str =
    "Recipe Finder background image not found. Please ensure the image is in the correct path.";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn notice_html(notice: Option<&Notice>) -> String {
    notice.map_or(String::new(), |n| {
        format!(r#"<div class="{}">{}</div>"#, n.css_class(), escape_html(&n.message))
    })
}

fn read_template(assets: &AssetsConfig, name: &str) -> AppResult<String> {
    let path = Path::new(&assets.templates_dir).join(name);
    std::fs::read_to_string(&path).map_err(|e| {
        tracing::error!("Failed to read template {}: {}", path.display(), e);
        AppError::File(e)
    })
}

/// Login/register view. A missing background withholds the form.
pub fn login_page(assets: &AssetsConfig, notice: Option<&Notice>) -> AppResult<String> {
    let background = background::data_uri(&assets.login_background)
        .map_err(|_| AppError::ResourceMissing(LOGIN_BACKGROUND_MISSING.into()))?;

    Ok(read_template(assets, "login.html")?
        .replace("{{background}}", &background)
        .replace("{{notice}}", &notice_html(notice)))
}

/// Search form plus whatever the results area holds.
pub fn finder_page(
    assets: &AssetsConfig,
    notice: Option<&Notice>,
    form: &SearchForm,
    results_html: &str,
) -> AppResult<String> {
    let background = background::data_uri(&assets.recipe_background)
        .map_err(|_| AppError::ResourceMissing(RECIPE_BACKGROUND_MISSING.into()))?;

    let diet_options = Diet::ALL
        .iter()
        .map(|diet| {
            let selected = if *diet == form.diet { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, diet.label(), selected)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(read_template(assets, "recipes.html")?
        .replace("{{background}}", &background)
        .replace("{{notice}}", &notice_html(notice))
        .replace("{{ingredients}}", &escape_html(&form.ingredients))
        .replace("{{diet_options}}", &diet_options)
        .replace("{{servings}}", &form.servings_value().to_string())
        .replace("{{results}}", results_html))
}

// Standalone so it renders even when templates are unavailable.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Recipe Finder</title></head>
<body>
    <div class="notice notice-error">{}</div>
</body>
</html>"#,
        escape_html(message)
    )
}
