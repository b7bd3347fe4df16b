// Drag gesture - small JSON posts from the canvas script
// The script awaits each post before sending the next, so moves arrive in pointer order

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::parse_session;
use crate::{
    app_state::AppState,
    core::EcosystemId,
    error::AppResult,
    views::CanvasBounds,
};

#[derive(Debug, Deserialize)]
pub struct DragStart {
    pub token: EcosystemId,
    pub bounds: CanvasBounds,
    #[serde(default)]
    pub on_remove_button: bool,
}

#[derive(Debug, Serialize)]
pub struct DragStarted {
    pub started: bool,
}

#[derive(Debug, Deserialize)]
pub struct DragMove {
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TokenPosition {
    pub token: EcosystemId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct DragEnded {
    pub token: Option<EcosystemId>,
}

pub async fn start(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(body): Json<DragStart>,
) -> AppResult<Json<DragStarted>> {
    let session = parse_session(&raw)?;
    let started = state
        .sessions
        .with_view(session, |view| {
            view.as_ecosystem_mut()?
                .canvas_mut()
                .begin_drag(&body.token, body.bounds, body.on_remove_button)
        })
        .await?;
    Ok(Json(DragStarted { started }))
}

/// Answers `null` when no drag is active, e.g. a move that raced the pointer-up.
pub async fn move_to(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(body): Json<DragMove>,
) -> AppResult<Json<Option<TokenPosition>>> {
    let session = parse_session(&raw)?;
    let position = state
        .sessions
        .with_view(session, |view| {
            let canvas = view.as_ecosystem_mut()?.canvas_mut();
            let token = canvas.dragging().cloned();
            let moved = canvas.drag_to(body.client_x, body.client_y);
            Ok(token.zip(moved).map(|(token, (x, y))| TokenPosition { token, x, y }))
        })
        .await?;
    Ok(Json(position))
}

pub async fn end(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<DragEnded>> {
    let session = parse_session(&raw)?;
    let token = state
        .sessions
        .with_view(session, |view| Ok(view.as_ecosystem_mut()?.canvas_mut().end_drag()))
        .await?;
    Ok(Json(DragEnded { token }))
}
