use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::info;

use super::parse_session;
use crate::{
    app_state::AppState,
    core::SessionId,
    error::{AppError, AppResult},
    render,
    views::{ActionCenterView, AnimalDetailView, DiscoveryView, EcosystemBuilderView, PageView},
};

pub async fn discovery(State(state): State<AppState>) -> Html<String> {
    let view = DiscoveryView::load(state.api.as_ref()).await;
    Html(render::discovery_page(&view))
}

pub async fn demo() -> Html<String> {
    Html(render::demo_page())
}

pub async fn animal_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Animal not found: {}", raw_id)))?;
    open_view(&state, PageView::Detail(AnimalDetailView::new(id))).await
}

pub async fn ecosystem_builder(State(state): State<AppState>) -> AppResult<Html<String>> {
    open_view(&state, PageView::Ecosystem(EcosystemBuilderView::new())).await
}

pub async fn action_center(State(state): State<AppState>) -> AppResult<Html<String>> {
    open_view(&state, PageView::ActionCenter(ActionCenterView::new())).await
}

pub async fn show_view(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Html<String>> {
    let session = parse_session(&raw)?;
    render_view(&state, session).await
}

/// Stores a new view, runs its initial fetch and renders the result.
async fn open_view(state: &AppState, view: PageView) -> AppResult<Html<String>> {
    let request = view.fetch_request();
    let kind = view.kind();
    let session = state.sessions.insert(view).await;
    info!("Opened {} session {}", kind.name(), session);

    let outcome = request.run(state.api.as_ref()).await;
    state
        .sessions
        .with_view(session, |view| view.apply_fetch(outcome))
        .await?;

    render_view(state, session).await
}

async fn render_view(state: &AppState, session: SessionId) -> AppResult<Html<String>> {
    let view = state.sessions.get(session).await?;
    Ok(Html(render::session_page(session, &view)))
}
