use serde::{Deserialize, Serialize};
use tower_sessions::Session;

const PAGE_STATE_KEY: &str = "page_state";

/// Which view the page shell shows for a session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl PageState {
    /// Reads the state for this session; a new session is `LoggedOut`.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        Ok(session
            .get::<PageState>(PAGE_STATE_KEY)
            .await?
            .unwrap_or_default())
    }

    // There is no way back to LoggedOut, so this is the only transition.
    pub async fn enter_logged_in(session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(PAGE_STATE_KEY, PageState::LoggedIn).await
    }
}
