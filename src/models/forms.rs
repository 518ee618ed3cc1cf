use serde::Deserialize;
use crate::errors::ValidationError;
use super::recipe::{Diet, SearchFilters};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

pub const DEFAULT_SERVINGS: u32 = 4;

fn default_servings() -> String {
    DEFAULT_SERVINGS.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchForm {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub diet: Diet,
    // Kept raw so a cleared or negative box becomes a validation warning
    #[serde(default = "default_servings")]
    pub servings: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            ingredients: String::new(),
            diet: Diet::default(),
            servings: default_servings(),
        }
    }
}

impl SearchForm {
    fn desired_servings(&self) -> Option<u32> {
        self.servings.trim().parse::<u32>().ok().filter(|n| *n >= 1)
    }

    /// Servings to echo back into the form; invalid input shows the default.
    pub fn servings_value(&self) -> u32 {
        self.desired_servings().unwrap_or(DEFAULT_SERVINGS)
    }

    pub fn to_filters(&self) -> Result<SearchFilters, ValidationError> {
        let ingredients = self.ingredients.trim();
        if ingredients.is_empty() {
            return Err(ValidationError::MissingIngredients);
        }
        let desired_servings = self.desired_servings().ok_or(ValidationError::InvalidServings)?;
        Ok(SearchFilters {
            ingredients: ingredients.to_string(),
            diet: self.diet,
            desired_servings,
        })
    }
}
