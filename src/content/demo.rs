use crate::models::{AnimalSummary, ConservationStatus};

/// Built-in cards for the demo page; no fetch involved.
pub fn demo_animals() -> Vec<AnimalSummary> {
    [
        (
            1,
            "Arctic Fox",
            "Vulpes lagopus",
            ConservationStatus::LeastConcern,
            "https://images.unsplash.com/photo-1470093851219-69951fcbb533",
        ),
        (
            2,
            "African Elephant",
            "Loxodonta africana",
            ConservationStatus::Endangered,
            "https://images.unsplash.com/photo-1564760055775-d63b17a55c44",
        ),
        (
            3,
            "Giant Panda",
            "Ailuropoda melanoleuca",
            ConservationStatus::Vulnerable,
            "https://images.unsplash.com/photo-1564349683136-77e08dba1ef7",
        ),
    ]
    .into_iter()
    .map(|(id, name, scientific_name, status, image)| AnimalSummary {
        id,
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        conservation_status: Some(status),
        image_urls: vec![image.to_string()],
        diet: None,
    })
    .collect()
}
