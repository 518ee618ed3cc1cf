mod credential_store;
mod recipe_client;

pub use credential_store::CredentialStore;
pub use recipe_client::RecipeClient;
