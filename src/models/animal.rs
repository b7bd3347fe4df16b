use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::nullable::{non_blank, or_default};

/// IUCN-style tiers as the API spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConservationStatus {
    LeastConcern,
    NearThreatened,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
    ExtinctInTheWild,
    Extinct,
}

impl ConservationStatus {
    pub const ALL: [ConservationStatus; 7] = [
        ConservationStatus::LeastConcern,
        ConservationStatus::NearThreatened,
        ConservationStatus::Vulnerable,
        ConservationStatus::Endangered,
        ConservationStatus::CriticallyEndangered,
        ConservationStatus::ExtinctInTheWild,
        ConservationStatus::Extinct,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "Least Concern",
            ConservationStatus::NearThreatened => "Near Threatened",
            ConservationStatus::Vulnerable => "Vulnerable",
            ConservationStatus::Endangered => "Endangered",
            ConservationStatus::CriticallyEndangered => "Critically Endangered",
            ConservationStatus::ExtinctInTheWild => "Extinct in the Wild",
            ConservationStatus::Extinct => "Extinct",
        }
    }

    /// Upper-snake code used by older payloads and the card demo.
    pub fn code(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "LEAST_CONCERN",
            ConservationStatus::NearThreatened => "NEAR_THREATENED",
            ConservationStatus::Vulnerable => "VULNERABLE",
            ConservationStatus::Endangered => "ENDANGERED",
            ConservationStatus::CriticallyEndangered => "CRITICALLY_ENDANGERED",
            ConservationStatus::ExtinctInTheWild => "EXTINCT_WILD",
            ConservationStatus::Extinct => "EXTINCT",
        }
    }

    /// Badge tone; pairs with the `badge-*` classes in the stylesheet.
    pub fn badge_tone(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "green",
            ConservationStatus::NearThreatened => "yellow",
            ConservationStatus::Vulnerable => "orange",
            ConservationStatus::Endangered => "red",
            ConservationStatus::CriticallyEndangered => "red-strong",
            ConservationStatus::ExtinctInTheWild => "purple",
            ConservationStatus::Extinct => "gray-strong",
        }
    }
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(' ', "_");
        match normalized.as_str() {
            "LEAST_CONCERN" => Ok(ConservationStatus::LeastConcern),
            "NEAR_THREATENED" => Ok(ConservationStatus::NearThreatened),
            "VULNERABLE" => Ok(ConservationStatus::Vulnerable),
            "ENDANGERED" => Ok(ConservationStatus::Endangered),
            "CRITICALLY_ENDANGERED" => Ok(ConservationStatus::CriticallyEndangered),
            "EXTINCT_WILD" | "EXTINCT_IN_THE_WILD" => Ok(ConservationStatus::ExtinctInTheWild),
            "EXTINCT" => Ok(ConservationStatus::Extinct),
            _ => Err(format!("unknown conservation status: {}", s)),
        }
    }
}

impl Serialize for ConservationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ConservationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Unknown, null or non-string statuses decode as "no status" instead of
/// failing the whole record.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ConservationStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(|s| s.parse().ok()))
}

/// Full profile returned by `GET /api/animals/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub common_names: Vec<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub conservation_status: Option<ConservationStatus>,
    #[serde(default, deserialize_with = "non_blank")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub fun_facts: Vec<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub diet: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub lifespan: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub image_urls: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub video_urls: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub audio_urls: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub classification: HashMap<String, String>,
    #[serde(default, deserialize_with = "or_default")]
    pub size_info: HashMap<String, String>,
}

impl Animal {
    /// The fun facts shown by the prompt exercise's fact check.
    pub fn verification_facts(&self) -> &[String] {
        let end = self.fun_facts.len().min(2);
        &self.fun_facts[..end]
    }

    pub fn summary(&self) -> AnimalSummary {
        AnimalSummary {
            id: self.id,
            name: self.name.clone(),
            scientific_name: self.scientific_name.clone(),
            conservation_status: self.conservation_status,
            image_urls: self.image_urls.clone(),
            diet: self.diet.clone(),
        }
    }
}

/// List entry returned by `GET /api/animals/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSummary {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub conservation_status: Option<ConservationStatus>,
    #[serde(default, deserialize_with = "or_default")]
    pub image_urls: Vec<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub diet: Option<String>,
}

impl AnimalSummary {
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    pub fn diet_emoji(&self) -> &'static str {
        diet_emoji(self.diet.as_deref())
    }
}

pub fn diet_emoji(diet: Option<&str>) -> &'static str {
    let Some(diet) = diet else {
        return "🍽️";
    };
    let lower = diet.to_lowercase();
    if lower.contains("carnivore") {
        "🥩"
    } else if lower.contains("herbivore") {
        "🌿"
    } else if lower.contains("omnivore") {
        "🍎"
    } else {
        "🍽️"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_both_spellings() {
        for status in ConservationStatus::ALL {
            assert_eq!(status.label().parse::<ConservationStatus>().unwrap(), status);
            assert_eq!(status.code().parse::<ConservationStatus>().unwrap(), status);
        }
        assert!("Mostly Fine".parse::<ConservationStatus>().is_err());
    }

    #[test]
    fn test_animal_missing_and_null_lists_default_to_empty() {
        let json = r#"{
            "id": 3,
            "name": "Gray Wolf",
            "scientific_name": "Canis lupus",
            "conservation_status": "Least Concern",
            "image_urls": null,
            "fun_facts": ["Packs can travel 50 km a day"]
        }"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert!(animal.image_urls.is_empty());
        assert!(animal.video_urls.is_empty());
        assert!(animal.common_names.is_empty());
        assert_eq!(animal.conservation_status, Some(ConservationStatus::LeastConcern));
        assert_eq!(animal.diet, None);
    }

    #[test]
    fn test_unknown_status_is_dropped() {
        let json = r#"{"id": 1, "name": "Okapi", "scientific_name": "Okapia johnstoni",
                       "conservation_status": "Data Deficient"}"#;
        let summary: AnimalSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.conservation_status, None);
    }

    #[test]
    fn test_non_string_status_is_dropped() {
        for status in ["3", "true", r#"{"code": "EN"}"#, r#"["EN"]"#] {
            let json = format!(
                r#"{{"id": 7, "name": "Red Panda", "scientific_name": "Ailurus fulgens",
                    "conservation_status": {status}, "diet": "Herbivore"}}"#
            );
            let summary: AnimalSummary = serde_json::from_str(&json).unwrap();
            assert_eq!(summary.conservation_status, None, "status {}", status);
            assert_eq!(summary.name, "Red Panda");

            let animal: Animal = serde_json::from_str(&json).unwrap();
            assert_eq!(animal.conservation_status, None);
        }
    }

    #[test]
    fn test_verification_facts_takes_first_two() {
        let mut animal: Animal = serde_json::from_str(
            r#"{"id": 1, "name": "Arctic Fox", "scientific_name": "Vulpes lagopus"}"#,
        )
        .unwrap();
        assert!(animal.verification_facts().is_empty());
        animal.fun_facts = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(animal.verification_facts(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_diet_emoji() {
        assert_eq!(diet_emoji(Some("Carnivore")), "🥩");
        assert_eq!(diet_emoji(Some("mostly herbivore")), "🌿");
        assert_eq!(diet_emoji(Some("Omnivore")), "🍎");
        assert_eq!(diet_emoji(Some("Filter feeder")), "🍽️");
        assert_eq!(diet_emoji(None), "🍽️");
    }
}
