// Ecosystem builder page: habitat bar, animal palette, canvas with SVG overlay, mode panel

use super::{
    html::{button_form, escape, pct},
    layout::{centered_message, page},
};
use crate::{
    content::{
        ecosystem::{ARROW_MARKERS, FALLBACK_GRADIENT},
        edge_style, habitat_gradient, HELPER_PROMPTS,
    },
    core::SessionId,
    models::{animal::diet_emoji, RelationshipType},
    views::{EcosystemBuilderView, EcosystemCanvas, EcosystemData, Loadable},
};

/// Lines and badges anchor this far right and down of a token's top-left corner.
const ANCHOR_OFFSET: f64 = 5.0;

pub fn ecosystem_page(session: SessionId, view: &EcosystemBuilderView) -> String {
    let body = match view.data() {
        Loadable::Loading => centered_message("text-muted", "Loading ecosystem data..."),
        Loadable::Failed(message) => format!(
            r#"<div class="screen-center"><div class="error-card">
<h2>Error Loading Data</h2><p>{message}</p>{retry}
</div></div>"#,
            message = escape(message),
            retry = button_form(&format!("/views/{}/retry", session), "button danger wide", "Retry"),
        ),
        Loadable::Ready(data) => builder(session, view, data),
    };
    page("Ecosystem Builder", Some("/ecosystem-builder"), &body)
}

fn builder(session: SessionId, view: &EcosystemBuilderView, data: &EcosystemData) -> String {
    let base = format!("/views/{}", session);
    let current = view.current_habitat();

    let habitats: String = data
        .habitats
        .iter()
        .map(|h| {
            let active = current.is_some_and(|c| c.id == h.id);
            format!(
                r#"<form method="post" action="{base}/habitat" class="habitat-choice"><input type="hidden" name="habitat_id" value="{id}"><button type="submit" class="choice{active}"><span class="strong">{name}</span><small>{climate}</small></button></form>"#,
                id = h.id,
                active = if active { " active" } else { "" },
                name = escape(&h.name),
                climate = escape(h.climate.as_deref().unwrap_or_default()),
            )
        })
        .collect();

    let palette: String = data
        .animals
        .iter()
        .map(|a| {
            format!(
                r#"<form method="post" action="{base}/tokens"><input type="hidden" name="animal_id" value="{id}"><button type="submit" class="palette-item"><img src="{image}" alt="{name}"><span class="palette-text"><span class="strong">{name}</span><small>{emoji} {diet}</small></span><span class="plus">+</span></button></form>"#,
                id = a.id,
                image = escape(a.primary_image().unwrap_or_default()),
                name = escape(&a.name),
                emoji = diet_emoji(a.diet.as_deref()),
                diet = escape(a.diet.as_deref().unwrap_or("Unknown")),
            )
        })
        .collect();

    let gradient = current
        .map(|h| habitat_gradient(&h.name))
        .unwrap_or(FALLBACK_GRADIENT);
    let habitat_info = current
        .map(|h| {
            format!(
                r#"<div class="canvas-info"><h3>{}</h3><p>{}</p></div>"#,
                escape(&h.name),
                escape(h.description.as_deref().unwrap_or_default())
            )
        })
        .unwrap_or_default();

    let canvas = view.canvas();
    let helper = if view.show_helper() {
        let prompts: String = HELPER_PROMPTS
            .iter()
            .map(|p| format!(r#"<button type="button" class="helper-prompt">{}</button>"#, escape(p)))
            .collect();
        format!(
            r#"<div class="panel helper-panel"><div class="helper-icon">✨</div><div><h3>AI Ecosystem Helper - Chain of Thought</h3><p class="text-muted">I'll use step-by-step reasoning to predict ecological changes in your ecosystem.</p>{prompts}</div></div>"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="container">
<header class="page-header"><h1>Ecosystem Builder</h1><p class="text-muted">Build interactive food webs and explore ecological relationships</p></header>
<section class="panel"><h3>Select Habitat</h3><div class="habitat-bar">{habitats}</div></section>
<div class="builder-grid">
<aside class="panel palette"><h3>Add Animals</h3>{palette}</aside>
<div class="builder-center">
<div class="canvas" id="canvas" data-session="{session}" style="background: {gradient}">
{habitat_info}
<div class="canvas-stats"><span>Animals: <b>{token_count}</b></span><span>Relationships: <b>{rel_count}</b></span></div>
{canvas_body}
</div>
{helper_toggle}
{helper}
</div>
<aside class="panel modes">{modes}</aside>
</div>
</div>"#,
        token_count = canvas.tokens().len(),
        rel_count = canvas.relationships().len(),
        canvas_body = canvas_body(&base, canvas),
        helper_toggle = button_form(&format!("{base}/helper"), "button helper-button wide", "✨ AI Ecosystem Helper"),
        modes = mode_panel(&base, canvas),
    )
}

/// Empty-state prompt, or the edge overlay plus the tokens.
pub fn canvas_body(base: &str, canvas: &EcosystemCanvas) -> String {
    if canvas.is_empty() {
        return r#"<div class="canvas-empty"><div class="empty-icon">🕸️</div><h3>Start Building Your Ecosystem</h3><p>Add animals from the left sidebar</p></div>"#
            .to_string();
    }
    format!("{}{}", edge_overlay(base, canvas), tokens(base, canvas))
}

pub fn edge_overlay(base: &str, canvas: &EcosystemCanvas) -> String {
    let markers: String = ARROW_MARKERS
        .iter()
        .map(|(id, color)| {
            format!(
                r#"<marker id="{id}" markerWidth="10" markerHeight="10" refX="9" refY="3" orient="auto"><polygon points="0 0, 10 3, 0 6" fill="{color}"/></marker>"#
            )
        })
        .collect();

    let mut lines = String::new();
    let mut badges = String::new();
    for (rel, from, to) in canvas.resolved_edges() {
        let style = edge_style(rel.kind);
        let (x1, y1) = (pct(from.x + ANCHOR_OFFSET), pct(from.y + ANCHOR_OFFSET));
        let (x2, y2) = (pct(to.x + ANCHOR_OFFSET), pct(to.y + ANCHOR_OFFSET));
        let end = style
            .end_marker
            .map(|m| format!(r#" marker-end="url(#{m})""#))
            .unwrap_or_default();

        lines.push_str(&format!(
            r#"<g class="edge edge-{kind}"><line class="edge-line" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{width}" stroke-dasharray="{dash}"{end} opacity="0.8"/>"#,
            kind = rel.kind.as_str(),
            color = style.color,
            width = style.width,
            dash = style.dash,
        ));
        if style.opposing_line {
            lines.push_str(&format!(
                r#"<line class="edge-line" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="3" stroke-dasharray="10,5" marker-start="url(#arrowhead-orange)" opacity="0.8"/>"#,
                color = style.color,
            ));
        }
        lines.push_str("</g>");

        let mid_x = (from.x + to.x) / 2.0 + ANCHOR_OFFSET;
        let mid_y = (from.y + to.y) / 2.0 + ANCHOR_OFFSET;
        badges.push_str(&format!(
            r#"<div class="edge-badge" style="left: {left}; top: {top}; border-color: {color}" title="{name}"><span>{icon}</span>{remove}</div>"#,
            left = pct(mid_x),
            top = pct(mid_y),
            color = style.color,
            name = rel.kind.display_name(),
            icon = rel.kind.icon(),
            remove = button_form(
                &format!("{}/relationships/{}/remove", base, rel.id),
                "edge-remove",
                "✕"
            ),
        ));
    }

    format!(
        r#"<svg class="edge-overlay" width="100%" height="100%"><defs>{markers}</defs>{lines}</svg><div class="edge-badges">{badges}</div>"#
    )
}

fn tokens(base: &str, canvas: &EcosystemCanvas) -> String {
    let armed = canvas.mode().is_some();
    canvas
        .tokens()
        .iter()
        .map(|t| {
            let selected = canvas.selected() == Some(&t.ecosystem_id);
            let dragging = canvas.dragging() == Some(&t.ecosystem_id);
            let mut class = String::from("token");
            if !dragging {
                class.push_str(" animated");
            }
            if selected {
                class.push_str(if armed { " selected ring-purple" } else { " selected ring-blue" });
            }
            format!(
                r#"<div class="{class}" data-token="{id}" style="left: {left}; top: {top}">
<form method="post" action="{base}/tokens/{id}/click" class="token-click"><button type="submit" class="token-body"><img src="{image}" alt="{name}"></button></form>
{remove}
<div class="token-label">{name}</div>
</div>"#,
                id = escape(t.ecosystem_id.as_str()),
                left = pct(t.x),
                top = pct(t.y),
                image = escape(t.primary_image().unwrap_or_default()),
                name = escape(&t.name),
                remove = button_form(
                    &format!("{}/tokens/{}/remove", base, t.ecosystem_id),
                    "token-remove",
                    "🗑"
                ),
            )
        })
        .collect()
}

fn mode_panel(base: &str, canvas: &EcosystemCanvas) -> String {
    let mode = canvas.mode();
    let buttons: String = RelationshipType::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"<form method="post" action="{base}/mode"><input type="hidden" name="kind" value="{value}"><button type="submit" class="choice{active}"><span>{icon} <span class="strong">{name}</span></span><small>{description}</small></button></form>"#,
                value = kind.as_str(),
                active = if mode == Some(*kind) { " active" } else { "" },
                icon = kind.icon(),
                name = kind.display_name(),
                description = kind.description(),
            )
        })
        .collect();

    let status = mode
        .map(|kind| {
            let step = if canvas.selected().is_some() {
                "2. Click the second animal on the canvas"
            } else {
                "1. Click the first animal on the canvas"
            };
            format!(
                r#"<div class="box purple mode-status"><div class="strong">Creating {}</div><div>{}</div></div>"#,
                kind.display_name(),
                step
            )
        })
        .unwrap_or_default();

    format!("<h3>Add Relationships</h3>{buttons}{status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_api::sample_animals;

    #[test]
    fn test_empty_canvas_has_prompt_and_no_lines() {
        let html = canvas_body("/views/x", &EcosystemCanvas::new());
        assert!(html.contains("Start Building Your Ecosystem"));
        assert!(!html.contains("<line"));
    }

    #[test]
    fn test_competition_draws_two_lines_and_badge_at_midpoint() {
        let animals: Vec<_> = sample_animals().iter().map(|a| a.summary()).collect();
        let mut canvas = EcosystemCanvas::new();
        let a = canvas.add_token_at(&animals[0], 10.0, 20.0).ecosystem_id.clone();
        let b = canvas.add_token_at(&animals[1], 30.0, 60.0).ecosystem_id.clone();
        canvas.toggle_mode(RelationshipType::Competition);
        canvas.click_token(&a).unwrap();
        canvas.click_token(&b).unwrap();

        let html = edge_overlay("/views/x", &canvas);
        assert_eq!(html.matches("<line").count(), 2);
        assert!(html.contains(r#"x1="15%" y1="25%" x2="35%" y2="65%""#));
        assert!(html.contains("marker-start=\"url(#arrowhead-orange)\""));
        assert!(html.contains("left: 25%; top: 45%"));
        assert!(html.contains("⚔️"));
    }

    #[test]
    fn test_predator_prey_line_style() {
        let animals: Vec<_> = sample_animals().iter().map(|a| a.summary()).collect();
        let mut canvas = EcosystemCanvas::new();
        let a = canvas.add_token_at(&animals[1], 50.0, 50.0).ecosystem_id.clone();
        let b = canvas.add_token_at(&animals[0], 70.0, 50.0).ecosystem_id.clone();
        canvas.toggle_mode(RelationshipType::PredatorPrey);
        canvas.click_token(&a).unwrap();
        canvas.click_token(&b).unwrap();

        let html = edge_overlay("/views/x", &canvas);
        assert_eq!(html.matches("<line").count(), 1);
        assert!(html.contains(r##"stroke="#ef4444" stroke-width="4" stroke-dasharray="0" marker-end="url(#arrowhead-red)""##));
    }
}
