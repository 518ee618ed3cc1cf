mod auth;
mod page;
mod recipes;

pub use auth::{handle_login, handle_register};
pub use page::serve_page;
pub use recipes::search_recipes;
