// HTTP surface - page routes, gesture routes and static assets

pub mod drag;
pub mod gestures;
pub mod pages;

use axum::{
    http::{header, Method},
    response::{Json, Redirect},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    app_state::AppState,
    core::SessionId,
    error::{AppError, AppResult},
};

pub fn create_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Pages; each visit to a page opens a fresh view session
        .route("/", get(pages::discovery))
        .route("/demo", get(pages::demo))
        .route("/animals/{id}", get(pages::animal_detail))
        .route("/ecosystem-builder", get(pages::ecosystem_builder))
        .route("/conservation-action-center", get(pages::action_center))
        .route("/views/{session}", get(pages::show_view))
        .route("/views/{session}/retry", post(gestures::retry))
        // Detail view
        .route("/views/{session}/prompt/technique", post(gestures::choose_technique))
        .route("/views/{session}/prompt/ask", post(gestures::ask))
        .route("/views/{session}/prompt/verify", post(gestures::verify))
        .route("/views/{session}/prompt/reset", post(gestures::reset_prompt))
        // Ecosystem builder
        .route("/views/{session}/habitat", post(gestures::select_habitat))
        .route("/views/{session}/tokens", post(gestures::add_token))
        .route("/views/{session}/tokens/{token}/click", post(gestures::click_token))
        .route("/views/{session}/tokens/{token}/remove", post(gestures::remove_token))
        .route("/views/{session}/mode", post(gestures::toggle_mode))
        .route(
            "/views/{session}/relationships/{relationship}/remove",
            post(gestures::remove_relationship),
        )
        .route("/views/{session}/helper", post(gestures::toggle_helper))
        .route("/views/{session}/drag/start", post(drag::start))
        .route("/views/{session}/drag/move", post(drag::move_to))
        .route("/views/{session}/drag/end", post(drag::end))
        // Action center
        .route("/views/{session}/efforts/{effort}/select", post(gestures::select_effort))
        .route("/views/{session}/solutions/{solution}/toggle", post(gestures::toggle_solution))
        .route("/views/{session}/analysis", post(gestures::toggle_analysis))
        .route("/views/{session}/tab", post(gestures::switch_tab))
        .route("/health", get(health))
        .nest_service("/static", static_dir)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([header::CONTENT_TYPE]),
                ),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Session ids that do not parse are treated like expired ones.
pub(crate) fn parse_session(raw: &str) -> AppResult<SessionId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("view session {} has expired or never existed", raw)))
}

pub(crate) fn view_location(session: SessionId) -> String {
    format!("/views/{}", session)
}

/// 303 back to the session's page.
pub(crate) fn back_to_view(session: SessionId) -> Redirect {
    Redirect::to(&view_location(session))
}
