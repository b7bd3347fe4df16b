// Conservation action center: stats header, tabs, effort list, solutions and analysis

use super::{
    html::{button_form, escape},
    layout::page,
};
use crate::{
    content::{AiAnalysis, CRITICAL_QUESTIONS, LOCAL_ORGANIZATIONS, USER_ACTION_STATS},
    core::SessionId,
    models::ConservationEffort,
    views::{ActionCenterView, ActionTab, Loadable},
};

pub fn action_center_page(session: SessionId, view: &ActionCenterView) -> String {
    let base = format!("/views/{}", session);
    let body = match view.efforts() {
        Loadable::Loading => {
            r#"<div class="screen-center"><div class="text-center"><div class="spinner"></div><p class="text-muted">Loading conservation efforts...</p></div></div>"#
                .to_string()
        }
        Loadable::Failed(message) => format!(
            r#"<div class="screen-center"><div class="error-card">
<div class="error-icon">⚠️</div><h2>Error Loading Data</h2><p>{message}</p>{retry}
</div></div>"#,
            message = escape(message),
            retry = button_form(&format!("{base}/retry"), "button danger wide", "Retry"),
        ),
        Loadable::Ready(efforts) => {
            let content = match view.tab() {
                ActionTab::Cases => cases_tab(&base, view, efforts),
                ActionTab::Local => local_tab(),
            };
            format!(
                "{header}<div class=\"container\">{tabs}{content}</div>",
                header = header(),
                tabs = tabs(&base, view.tab()),
            )
        }
    };
    page(
        "Conservation Action Center",
        Some("/conservation-action-center"),
        &body,
    )
}

fn header() -> String {
    let stats = USER_ACTION_STATS;
    format!(
        r#"<header class="hero"><div class="container">
<h1>🎯 Conservation Action Center</h1>
<p class="lead">Explore real conservation challenges, compare solutions, and take action to protect wildlife and ecosystems</p>
<div class="stats-grid">
<div class="stat green"><p>✅ Petitions Signed</p><b>{}</b></div>
<div class="stat blue"><p>👥 Organizations</p><b>{}</b></div>
<div class="stat purple"><p>📈 Cases Explored</p><b>{}</b></div>
<div class="stat orange"><p>💡 Solutions Compared</p><b>{}</b></div>
</div>
</div></header>"#,
        stats.petitions_signed,
        stats.organizations_connected,
        stats.cases_explored,
        stats.solutions_compared,
    )
}

fn tabs(base: &str, active: ActionTab) -> String {
    let tab = |tab: ActionTab, label: &str| {
        format!(
            r#"<form method="post" action="{base}/tab" class="inline-form"><input type="hidden" name="tab" value="{value}"><button type="submit" class="tab{active}">{label}</button></form>"#,
            value = tab.as_str(),
            active = if tab == active { " active" } else { "" },
        )
    };
    format!(
        r#"<div class="tabs">{}{}</div>"#,
        tab(ActionTab::Cases, "Conservation Efforts"),
        tab(ActionTab::Local, "Local Organizations"),
    )
}

fn cases_tab(base: &str, view: &ActionCenterView, efforts: &[ConservationEffort]) -> String {
    let selected_id = view.selected_effort().map(|e| e.id);
    let cards: String = efforts
        .iter()
        .map(|e| effort_card(base, e, selected_id == Some(e.id)))
        .collect();

    let detail = match view.selected_effort() {
        Some(effort) => effort_detail(base, view, effort),
        None => r#"<div class="empty-selection"><div class="empty-icon">🎯</div><p>Select a conservation effort to explore solutions</p></div>"#
            .to_string(),
    };

    format!(
        r#"<div class="cases-grid"><div class="effort-list"><h2>Active Conservation Efforts</h2>{cards}</div><div>{detail}</div></div>"#
    )
}

fn optional(value: Option<&str>, render: impl Fn(&str) -> String) -> String {
    value.map(render).unwrap_or_default()
}

fn effort_card(base: &str, effort: &ConservationEffort, selected: bool) -> String {
    format!(
        r#"<form method="post" action="{base}/efforts/{id}/select"><button type="submit" class="effort-card{selected}">
{image}
<div class="effort-body">
<div class="effort-title"><h3>{title}</h3><span class="pill pill-{tone}">{status}</span></div>
<div class="text-muted">📍 {location}</div>
<p class="strong">{description}</p>
{problem}
{organization}
</div>
</button></form>"#,
        id = effort.id,
        selected = if selected { " selected" } else { "" },
        image = optional(effort.image_url.as_deref(), |url| {
            format!(r#"<img src="{}" alt="{}">"#, escape(url), escape(&effort.title))
        }),
        title = escape(&effort.title),
        tone = effort.status_tone(),
        status = escape(effort.current_status.as_deref().unwrap_or_default()),
        location = escape(effort.location.as_deref().unwrap_or_default()),
        description = escape(effort.description.as_deref().unwrap_or_default()),
        problem = optional(effort.conservation_problem.as_deref(), |p| {
            format!(r#"<div class="problem">⚠️ {}</div>"#, escape(p))
        }),
        organization = optional(effort.organization_name.as_deref(), |o| {
            format!(r#"<p class="byline">By: {}</p>"#, escape(o))
        }),
    )
}

fn effort_detail(base: &str, view: &ActionCenterView, effort: &ConservationEffort) -> String {
    let links: String = effort
        .action_links()
        .into_iter()
        .map(|(label, tone, url)| {
            format!(
                r#"<a class="action-link {tone}" href="{url}" target="_blank" rel="noopener noreferrer">{label} ↗</a>"#,
                url = escape(url),
            )
        })
        .collect();

    let solutions: String = view
        .solutions()
        .iter()
        .map(|s| {
            let open = view.is_solution_selected(s.id);
            let details = if open {
                let list = |items: &[String]| -> String {
                    items.iter().map(|i| format!("<li>• {}</li>", escape(i))).collect()
                };
                format!(
                    r#"<div class="pros-cons"><div><p class="text-green strong">Pros</p><ul>{}</ul></div><div><p class="text-red strong">Cons</p><ul>{}</ul></div></div>"#,
                    list(&s.pros),
                    list(&s.cons)
                )
            } else {
                String::new()
            };
            format!(
                r#"<form method="post" action="{base}/solutions/{id}/toggle"><button type="submit" class="solution{open_class}">
<div class="solution-title"><h4>{name}</h4>{check}</div>
<div><span class="chip blue">{approach}</span><span class="chip gray">{timeframe}</span></div>
<div class="text-muted">Effectiveness: {effectiveness}/10 • Cost: {cost}</div>
{details}
</button></form>"#,
                id = s.id,
                open_class = if open { " selected" } else { "" },
                name = escape(&s.name),
                check = if open { r#"<span class="check">✔</span>"# } else { "" },
                approach = escape(&s.approach),
                timeframe = escape(&s.timeframe),
                effectiveness = s.effectiveness,
                cost = escape(&s.cost),
            )
        })
        .collect();

    let toggle_label = if view.show_analysis() {
        "🧠 Hide AI-Generated Solutions"
    } else {
        "🧠 Analyze AI-Generated Solutions"
    };
    let analysis = view.analysis().map(|a| analysis_panel(&a)).unwrap_or_default();

    format!(
        r#"<div class="panel sticky effort-detail">
<h2>{title}</h2>
<p class="text-muted">Compare different approaches to addressing this conservation challenge.</p>
<div class="action-links">{links}</div>
<h3>Solution Approaches</h3>
<div class="solutions">{solutions}</div>
{toggle}
{analysis}
</div>"#,
        title = escape(&effort.title),
        toggle = button_form(&format!("{base}/analysis"), "button analysis-toggle wide", toggle_label),
    )
}

pub fn analysis_panel(analysis: &AiAnalysis) -> String {
    let questions: String = CRITICAL_QUESTIONS
        .iter()
        .map(|q| {
            format!(
                r#"<div class="question"><p class="strong">{}</p><small>{}</small></div>"#,
                escape(q.question),
                escape(q.hint)
            )
        })
        .collect();

    let cascade = analysis
        .cascade
        .map(|steps| {
            let items: String = steps.iter().map(|s| format!("<li>{}</li>", escape(s))).collect();
            format!(
                r#"<div class="box green"><p class="strong">🎯 Real-World Chain of Thought Example</p><p>The Yellowstone wolf reintroduction demonstrates ecological chain reactions:</p><ol class="cascade">{items}</ol><p class="note">This is a trophic cascade - use AI to predict similar chain reactions in other ecosystems!</p></div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="analysis-panel">
<h3>🧠 AI Literacy: Reverse Prompting Analysis</h3>
<p class="text-muted">Let's analyze how this AI-generated solution was created and identify potential biases.</p>
<div class="box white"><p class="strong">Original AI Prompt:</p><p class="example">"{prompt}"</p></div>
<div class="box white"><p class="strong">AI Response:</p><p>{response}</p></div>
<div class="box white"><p class="strong">Critical Analysis Questions:</p>{questions}</div>
<div class="box yellow"><p class="strong">💡 Improved Prompt Example:</p><p class="example">"{improved}"</p></div>
{cascade}
</div>"#,
        prompt = escape(&analysis.prompt),
        response = escape(analysis.response),
        improved = escape(&analysis.improved_prompt),
    )
}

fn local_tab() -> String {
    let orgs: String = LOCAL_ORGANIZATIONS
        .iter()
        .map(|org| {
            format!(
                r#"<div class="org-card"><div><h3>{name}</h3><p class="text-muted">{focus}</p><p class="text-muted">📍 {distance} away</p></div>
<div class="org-actions"><a class="button green" href="{website}" target="_blank" rel="noopener noreferrer">Visit Website ↗</a><button type="button" class="button gray">Connect &amp; Track</button></div></div>"#,
                name = escape(org.name),
                focus = escape(org.focus),
                distance = escape(org.distance),
                website = escape(org.website),
            )
        })
        .collect();

    format!(
        r#"<div class="local-tab">
<h2>Local Wildlife Organizations Near You</h2>
<p class="text-muted">Connect with organizations in Irvine, California working to protect local wildlife and habitats.</p>
{orgs}
<div class="box blue"><h3>🌍 Why Local Action Matters</h3>
<p>While global conservation issues are important, local organizations need volunteers and support. Your nearby actions create real, measurable impact in your community's ecosystems.</p>
<p>Track your connections to see your growing conservation network and the collective impact you're part of!</p></div>
</div>"#
    )
}
