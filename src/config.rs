use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub credentials: CredentialsConfig,
    pub recipe: RecipeConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    pub endpoint: String,
    pub result_count: u32,
    // Only the search feature needs this; the login view works without it.
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub templates_dir: String,
    pub login_background: String,
    pub recipe_background: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/secrets").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
impl Config {
    /// Config pointing at the crate's own templates and images, with the
    /// credential file and recipe endpoint supplied by the test.
    pub fn for_tests(credentials_path: &std::path::Path, endpoint: &str) -> Self {
        let root = env!("CARGO_MANIFEST_DIR");
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
                max_body_size: 64 * 1024,
            },
            credentials: CredentialsConfig {
                path: credentials_path.to_string_lossy().into_owned(),
            },
            recipe: RecipeConfig {
                endpoint: endpoint.to_string(),
                result_count: 20,
                api_key: Some("test-key".into()),
            },
            assets: AssetsConfig {
                templates_dir: format!("{}/templates", root),
                login_background: format!("{}/static/loginpage.png", root),
                recipe_background: format!("{}/static/recipe.png", root),
            },
        }
    }
}
