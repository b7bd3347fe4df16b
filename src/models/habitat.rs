use serde::{Deserialize, Serialize};

use super::nullable::{non_blank, or_default};

/// List entry returned by `GET /api/habitats/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitatSummary {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "non_blank")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub climate: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub key_characteristics: Vec<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habitat_defaults() {
        let habitat: HabitatSummary =
            serde_json::from_str(r#"{"id": 5, "name": "Savanna", "climate": "Tropical", "image_url": ""}"#)
                .unwrap();
        assert_eq!(habitat.climate.as_deref(), Some("Tropical"));
        assert!(habitat.key_characteristics.is_empty());
        assert_eq!(habitat.image_url, None);
    }
}
