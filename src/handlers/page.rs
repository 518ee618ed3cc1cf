use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;
use crate::errors::AppResult;
use crate::models::{NoticeQuery, PageState, SearchForm};
use crate::state::AppState;
use crate::views;

/// The single page: login view until this session logs in, then the finder.
pub async fn serve_page(
    State(state): State<AppState>,
    session: Session,
    query: Option<Query<NoticeQuery>>,
) -> AppResult<Response> {
    let notice = query.and_then(|Query(q)| q.into_notice());
    let assets = &state.config.assets;

    let html = match PageState::load(&session).await? {
        PageState::LoggedOut => {
            tracing::debug!("Serving login view");
            views::login_page(assets, notice.as_ref())?
        }
        PageState::LoggedIn => {
            tracing::debug!("Serving recipe finder view");
            views::finder_page(assets, notice.as_ref(), &SearchForm::default(), "")?
        }
    };
    Ok(Html(html).into_response())
}
