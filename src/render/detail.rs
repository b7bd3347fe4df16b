// Animal detail page and its research-assistant sidebar

use super::{
    components::badge,
    html::{button_form, escape},
    layout::{centered_message, page},
};
use crate::{
    content::prompts::{PromptTechnique, ENERGY_NOTE},
    core::SessionId,
    models::Animal,
    views::{AnimalDetailView, Loadable},
};

pub const DETAIL_PLACEHOLDER: &str = "/api/placeholder/400/300";

pub fn detail_page(session: SessionId, view: &AnimalDetailView) -> String {
    let body = match view.animal() {
        Loadable::Loading => centered_message("text-muted", "Loading animal details..."),
        Loadable::Failed(_) => not_found(session),
        Loadable::Ready(animal) => format!(
            r#"<div class="container">
<a class="button ghost" href="/">← Back to Animals</a>
<div class="detail-grid">
<div class="detail-main">{profile}</div>
<aside class="detail-side">{assistant}</aside>
</div>
</div>"#,
            profile = profile(animal),
            assistant = assistant(session, view, animal),
        ),
    };
    let title = view
        .animal()
        .ready()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Animal".to_string());
    page(&title, None, &body)
}

fn not_found(session: SessionId) -> String {
    format!(
        r#"<div class="screen-center"><div class="text-center">
<div class="text-red text-xl">Animal not found</div>
<a class="button" href="/">Back to Home</a>
{retry}
</div></div>"#,
        retry = button_form(&format!("/views/{}/retry", session), "button outline", "Retry"),
    )
}

fn profile(animal: &Animal) -> String {
    let first = animal.image_urls.first().map(String::as_str).unwrap_or(DETAIL_PLACEHOLDER);
    let second = animal
        .image_urls
        .get(1)
        .map(|url| {
            format!(
                r#"<img class="detail-image" src="{}" alt="{} - view 2">"#,
                escape(url),
                escape(&animal.name)
            )
        })
        .unwrap_or_default();
    let facts: String = animal
        .fun_facts
        .iter()
        .map(|f| format!(r#"<li><span class="bullet">•</span>{}</li>"#, escape(f)))
        .collect();

    format!(
        r#"<section class="panel">
<div class="detail-header"><div><h1>{name}</h1><p class="scientific text-lg">{scientific}</p></div>{badge}</div>
<div class="detail-images"><img class="detail-image" src="{first}" alt="{name} - view 1">{second}</div>
<p class="description">{description}</p>
<div class="detail-facts-grid"><div><span class="text-muted">Diet:</span><p class="strong">{diet}</p></div><div><span class="text-muted">Lifespan:</span><p class="strong">{lifespan}</p></div></div>
<h3>Fun Facts</h3>
<ul class="fun-facts">{facts}</ul>
</section>"#,
        name = escape(&animal.name),
        scientific = escape(&animal.scientific_name),
        badge = badge(animal.conservation_status),
        first = escape(first),
        description = escape(animal.description.as_deref().unwrap_or_default()),
        diet = escape(animal.diet.as_deref().unwrap_or_default()),
        lifespan = escape(animal.lifespan.as_deref().unwrap_or_default()),
    )
}

fn assistant(session: SessionId, view: &AnimalDetailView, animal: &Animal) -> String {
    let base = format!("/views/{}/prompt", session);
    let exercise = view.exercise();

    let interface = match exercise.technique() {
        None => {
            let choices: String = PromptTechnique::ALL
                .iter()
                .map(|t| {
                    format!(
                        r#"<form method="post" action="{base}/technique"><input type="hidden" name="technique" value="{value}"><button type="submit" class="technique"><span class="strong">{icon} {title}</span><small>{description}</small></button></form>"#,
                        value = t.as_str(),
                        icon = t.icon(),
                        title = t.title(),
                        description = t.description(),
                    )
                })
                .collect();
            format!(r#"<p class="text-muted">Choose a prompt technique:</p>{choices}"#)
        }
        Some(technique) => {
            let response = exercise
                .response()
                .map(|text| {
                    let check = match view.fact_check() {
                        Some(facts) => {
                            let items: String = facts
                                .iter()
                                .map(|f| format!("<li>✓ {}</li>", escape(f)))
                                .collect();
                            format!(
                                r#"<div class="box green"><h4>Fact Check:</h4><p>Compare the AI response with verified facts from our database.</p><ul>{items}</ul></div>"#
                            )
                        }
                        None => button_form(
                            &format!("{base}/verify"),
                            "button outline wide",
                            "Verify Against Database Facts",
                        ),
                    };
                    format!(
                        r#"<div class="box purple"><h4>AI Response:</h4><p>{text}</p><div class="energy">⚡ {energy}</div></div>{check}"#,
                        text = escape(text),
                        energy = ENERGY_NOTE,
                    )
                })
                .unwrap_or_default();

            format!(
                r#"<div class="box gray"><p class="strong">Example:</p><p class="example">{example}</p></div>
<form method="post" action="{base}/ask">
<label for="prompt" class="strong">Your prompt:</label>
<textarea id="prompt" name="prompt" rows="4" placeholder="Type your prompt here..." required>{prompt}</textarea>
<button type="submit" class="button wide">⚡ Ask AI Assistant</button>
</form>
{response}
{reset}"#,
                example = escape(&technique.example(&animal.name)),
                prompt = escape(exercise.prompt()),
                reset = button_form(&format!("{base}/reset"), "button outline wide", "Try Different Technique"),
            )
        }
    };

    format!(
        r#"<section class="panel sticky">
<h2>🧠 AI Research Assistant</h2>
<div class="box yellow"><p class="strong">💡 AI Literacy Goal</p><p>Practice prompt engineering techniques</p></div>
{interface}
</section>"#
    )
}
