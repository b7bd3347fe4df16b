// Form-post gestures. Each one mutates a single view session and answers 303 to its page

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;
use tracing::debug;

use super::{back_to_view, parse_session};
use crate::{
    app_state::AppState,
    content::PromptTechnique,
    core::{EcosystemId, RelationshipId},
    error::{AppError, AppResult},
    models::RelationshipType,
    views::ActionTab,
};

#[derive(Debug, Deserialize)]
pub struct TechniqueForm {
    pub technique: String,
}

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitatForm {
    pub habitat_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddTokenForm {
    pub animal_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ModeForm {
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct TabForm {
    pub tab: String,
}

fn bad_input(err: String) -> AppError {
    AppError::BadRequest(err)
}

pub async fn retry(State(state): State<AppState>, Path(raw): Path<String>) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let request = state
        .sessions
        .with_view(session, |view| {
            view.begin_reload();
            Ok(view.fetch_request())
        })
        .await?;
    debug!("Retrying {:?} for session {}", request, session);

    let outcome = request.run(state.api.as_ref()).await;
    state
        .sessions
        .with_view(session, |view| view.apply_fetch(outcome))
        .await?;
    Ok(back_to_view(session))
}

// ---- Detail view ----

pub async fn choose_technique(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<TechniqueForm>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let technique: PromptTechnique = form.technique.parse().map_err(bad_input)?;
    state
        .sessions
        .with_view(session, |view| view.as_detail_mut()?.choose_technique(technique))
        .await?;
    Ok(back_to_view(session))
}

pub async fn ask(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<AskForm>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| view.as_detail_mut()?.ask(&form.prompt))
        .await?;
    Ok(back_to_view(session))
}

pub async fn verify(State(state): State<AppState>, Path(raw): Path<String>) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| view.as_detail_mut()?.verify())
        .await?;
    Ok(back_to_view(session))
}

pub async fn reset_prompt(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| {
            view.as_detail_mut()?.reset_exercise();
            Ok(())
        })
        .await?;
    Ok(back_to_view(session))
}

// ---- Ecosystem builder ----

pub async fn select_habitat(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<HabitatForm>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| view.as_ecosystem_mut()?.select_habitat(form.habitat_id))
        .await?;
    Ok(back_to_view(session))
}

pub async fn add_token(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<AddTokenForm>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let token = state
        .sessions
        .with_view(session, |view| view.as_ecosystem_mut()?.add_animal(form.animal_id))
        .await?;
    debug!("Session {} added token {}", session, token);
    Ok(back_to_view(session))
}

pub async fn click_token(
    State(state): State<AppState>,
    Path((raw, token)): Path<(String, String)>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let token = EcosystemId::new(token);
    let outcome = state
        .sessions
        .with_view(session, |view| view.as_ecosystem_mut()?.canvas_mut().click_token(&token))
        .await?;
    debug!("Session {} token click: {:?}", session, outcome);
    Ok(back_to_view(session))
}

pub async fn remove_token(
    State(state): State<AppState>,
    Path((raw, token)): Path<(String, String)>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let token = EcosystemId::new(token);
    state
        .sessions
        .with_view(session, |view| {
            view.as_ecosystem_mut()?.canvas_mut().remove_token(&token).map(|_| ())
        })
        .await?;
    Ok(back_to_view(session))
}

pub async fn toggle_mode(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<ModeForm>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let kind: RelationshipType = form.kind.parse().map_err(bad_input)?;
    state
        .sessions
        .with_view(session, |view| {
            view.as_ecosystem_mut()?.canvas_mut().toggle_mode(kind);
            Ok(())
        })
        .await?;
    Ok(back_to_view(session))
}

pub async fn remove_relationship(
    State(state): State<AppState>,
    Path((raw, relationship)): Path<(String, String)>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let relationship = RelationshipId::new(relationship);
    state
        .sessions
        .with_view(session, |view| {
            view.as_ecosystem_mut()?
                .canvas_mut()
                .remove_relationship(&relationship)
                .map(|_| ())
        })
        .await?;
    Ok(back_to_view(session))
}

pub async fn toggle_helper(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| {
            view.as_ecosystem_mut()?.toggle_helper();
            Ok(())
        })
        .await?;
    Ok(back_to_view(session))
}

// ---- Action center ----

pub async fn select_effort(
    State(state): State<AppState>,
    Path((raw, effort)): Path<(String, i64)>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| view.as_action_center_mut()?.select_effort(effort))
        .await?;
    Ok(back_to_view(session))
}

pub async fn toggle_solution(
    State(state): State<AppState>,
    Path((raw, solution)): Path<(String, u32)>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| view.as_action_center_mut()?.toggle_solution(solution))
        .await?;
    Ok(back_to_view(session))
}

pub async fn toggle_analysis(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    state
        .sessions
        .with_view(session, |view| view.as_action_center_mut()?.toggle_analysis())
        .await?;
    Ok(back_to_view(session))
}

pub async fn switch_tab(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Form(form): Form<TabForm>,
) -> AppResult<Redirect> {
    let session = parse_session(&raw)?;
    let tab: ActionTab = form.tab.parse().map_err(bad_input)?;
    state
        .sessions
        .with_view(session, |view| {
            view.as_action_center_mut()?.switch_tab(tab);
            Ok(())
        })
        .await?;
    Ok(back_to_view(session))
}
