use super::{
    components::animal_card,
    html::escape,
    layout::{centered_message, page},
};
use crate::{content::demo::demo_animals, views::{DiscoveryView, Loadable}};

pub fn discovery_page(view: &DiscoveryView) -> String {
    let body = match &view.animals {
        Loadable::Loading => centered_message("text-muted", "Loading animals..."),
        Loadable::Failed(message) => {
            centered_message("text-red", &format!("Error: {}", message))
        }
        Loadable::Ready(animals) => {
            let cards: String = animals
                .iter()
                .map(|a| animal_card(a, Some(&format!("/animals/{}", a.id))))
                .collect();
            format!(
                r#"<div class="container">
<header class="page-header"><h1>AnimalDex</h1><p class="text-muted">Discover animals, explore ecosystems, and take conservation action</p></header>
<div class="card-grid">{cards}</div>
</div>"#
            )
        }
    };
    page("Animal Discovery", Some("/"), &body)
}

pub fn demo_page() -> String {
    let cards: String = demo_animals()
        .iter()
        .map(|a| animal_card(a, None))
        .collect();
    let body = format!(
        r#"<div class="container"><h1>{}</h1><div class="card-grid">{cards}</div></div>"#,
        escape("AnimalDex Card Demo")
    );
    page("Card Demo", None, &body)
}
