use crate::models::{DisplayRow, RecipeResult, RecipeSearchResponse};
use super::escape_html;

pub const NO_RECIPES_MESSAGE: &str = "No recipes found. Try different ingredients.";
const RESULTS_INTRO: &str = "Here are some recipes based on your ingredients:";

/// What the results area shows after a search.
#[derive(Debug, PartialEq)]
pub enum Presentation {
    NoRecipes,
    Table(Vec<DisplayRow>),
}

impl Presentation {
    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            Presentation::NoRecipes => &[],
            Presentation::Table(rows) => rows,
        }
    }
}

/// Desired over original servings, rounded to two decimals.
/// Zero original servings has no ratio.
pub fn adjustment_ratio(desired_servings: u32, original_servings: u32) -> Option<f64> {
    if original_servings == 0 {
        return None;
    }
    let ratio = f64::from(desired_servings) / f64::from(original_servings);
    Some((ratio * 100.0).round() / 100.0)
}

/// Builds display rows in the order the API returned them.
pub fn present(response: &RecipeSearchResponse, desired_servings: u32) -> Presentation {
    if response.results.is_empty() {
        return Presentation::NoRecipes;
    }

    let rows = response
        .results
        .iter()
        .map(|result| {
            if result.servings == 0 {
                tracing::warn!("Recipe '{}' reports zero servings", result.title);
            }
            DisplayRow {
                title_link: title_link(result),
                ready_in_minutes: result.ready_in_minutes,
                original_servings: result.servings,
                adjustment_ratio: adjustment_ratio(desired_servings, result.servings),
            }
        })
        .collect();
    Presentation::Table(rows)
}

fn title_link(result: &RecipeResult) -> String {
    match result.source_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="recipe-title">{}</a>"#,
            escape_html(url),
            escape_html(&result.title)
        ),
        None => format!(r#"<span class="recipe-title">{}</span>"#, escape_html(&result.title)),
    }
}

pub fn render(presentation: &Presentation) -> String {
    match presentation {
        Presentation::NoRecipes => format!(r#"<p class="no-results">{}</p>"#, NO_RECIPES_MESSAGE),
        Presentation::Table(rows) => {
            let body = rows
                .iter()
                .map(|row| {
                    format!(
                        r#"<tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
            </tr>"#,
                        row.title_link,
                        row.ready_in_minutes,
                        row.original_servings,
                        row.adjustment_ratio
                            .map_or("N/A".to_string(), |ratio| format!("{:.2}", ratio)),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                r#"<div class="table-container">
        <p>{}</p>
        <table class="results">
            <thead>
                <tr>
                    <th>Recipe</th>
                    <th>Ready in Minutes</th>
                    <th>Original Servings</th>
                    <th>Servings Adjustment Ratio</th>
                </tr>
            </thead>
            <tbody>
            {}
            </tbody>
        </table>
    </div>"#,
                RESULTS_INTRO, body
            )
        }
    }
}
