use serde::{Deserialize, Serialize};

/// Dietary filter offered in the search form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    Ketogenic,
}

impl Diet {
    pub const ALL: [Diet; 5] = [
        Diet::None,
        Diet::Vegetarian,
        Diet::Vegan,
        Diet::GlutenFree,
        Diet::Ketogenic,
    ];

    /// Label used both in the select box and as the form value.
    pub fn label(&self) -> &'static str {
        match self {
            Diet::None => "None",
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
            Diet::GlutenFree => "Gluten-Free",
            Diet::Ketogenic => "Ketogenic",
        }
    }

    /// Value of the `diet` query parameter; `None` omits the parameter.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Diet::None => None,
            other => Some(other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub ingredients: String,
    pub diet: Diet,
    pub desired_servings: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResult {
    pub title: String,
    // Missing or null links degrade that row only
    #[serde(default)]
    pub source_url: Option<String>,
    pub ready_in_minutes: u32,
    pub servings: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RecipeSearchResponse {
    #[serde(default)]
    pub results: Vec<RecipeResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub title_link: String,
    pub ready_in_minutes: u32,
    pub original_servings: u32,
    // None when the recipe reports zero servings
    pub adjustment_ratio: Option<f64>,
}
