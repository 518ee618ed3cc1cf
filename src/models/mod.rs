mod credential;
mod forms;
mod notice;
mod recipe;
mod session;

pub use credential::Credential;
pub use forms::{LoginForm, RegisterForm, SearchForm};
pub use notice::{Notice, NoticeQuery};
pub use recipe::{Diet, DisplayRow, RecipeResult, RecipeSearchResponse, SearchFilters};
pub use session::PageState;
