// Presentation primitives shared by several pages

use super::html::escape;
use crate::models::{AnimalSummary, ConservationStatus};

pub const CARD_PLACEHOLDER: &str = "/api/placeholder/400/400";

/// Conservation badge; grey and empty when the status is unknown.
pub fn badge(status: Option<ConservationStatus>) -> String {
    match status {
        Some(status) => format!(
            r#"<span class="badge badge-{tone}">{label}</span>"#,
            tone = status.badge_tone(),
            label = status.label(),
        ),
        None => r#"<span class="badge badge-gray"></span>"#.to_string(),
    }
}

/// Blob card with an optional hover image, linking to `href` when given.
pub fn animal_card(animal: &AnimalSummary, href: Option<&str>) -> String {
    let image = animal.primary_image().unwrap_or(CARD_PLACEHOLDER);
    let hover = animal
        .image_urls
        .get(1)
        .map(|url| {
            format!(
                r#"<img class="card-image card-image-hover" src="{}" alt="" loading="lazy">"#,
                escape(url)
            )
        })
        .unwrap_or_default();
    let status = animal
        .conservation_status
        .map(|s| badge(Some(s)))
        .unwrap_or_default();

    let inner = format!(
        r#"<div class="card-blob"><img class="card-image" src="{image}" alt="{name}" loading="lazy">{hover}<div class="card-shade"></div><div class="card-eye">👁</div></div>
<div class="card-text"><h3>{name}</h3><p class="scientific">{scientific}</p>{status}</div>"#,
        image = escape(image),
        name = escape(&animal.name),
        scientific = escape(&animal.scientific_name),
    );

    match href {
        Some(href) => format!(
            r#"<a class="animal-card" href="{}">{}</a>"#,
            escape(href),
            inner
        ),
        None => format!(r#"<div class="animal-card">{}</div>"#, inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_tones() {
        assert!(badge(Some(ConservationStatus::ExtinctInTheWild)).contains("badge-purple"));
        assert!(badge(Some(ConservationStatus::Endangered)).contains(">Endangered<"));
        assert!(badge(None).contains("badge-gray"));
    }

    #[test]
    fn test_card_uses_placeholder_and_escapes() {
        let animal = AnimalSummary {
            id: 9,
            name: "<Okapi>".into(),
            scientific_name: "Okapia johnstoni".into(),
            conservation_status: None,
            image_urls: vec![],
            diet: None,
        };
        let html = animal_card(&animal, Some("/animals/9"));
        assert!(html.contains(CARD_PLACEHOLDER));
        assert!(html.contains("&lt;Okapi&gt;"));
        assert!(!html.contains("card-image-hover"));
        assert!(!html.contains("badge"));
    }
}
