use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::animal::{AnimalSummary, ConservationStatus};
use crate::core::{EcosystemId, RelationshipId};

/// Ecological interaction kinds a relationship edge can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    PredatorPrey,
    Competition,
    Mutualism,
    Commensalism,
    Parasitism,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 5] = [
        RelationshipType::PredatorPrey,
        RelationshipType::Competition,
        RelationshipType::Mutualism,
        RelationshipType::Commensalism,
        RelationshipType::Parasitism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::PredatorPrey => "predator-prey",
            RelationshipType::Competition => "competition",
            RelationshipType::Mutualism => "mutualism",
            RelationshipType::Commensalism => "commensalism",
            RelationshipType::Parasitism => "parasitism",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RelationshipType::PredatorPrey => "Predator-Prey",
            RelationshipType::Competition => "Competition",
            RelationshipType::Mutualism => "Mutualism",
            RelationshipType::Commensalism => "Commensalism",
            RelationshipType::Parasitism => "Parasitism",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RelationshipType::PredatorPrey => "🦁→🦌",
            RelationshipType::Competition => "⚔️",
            RelationshipType::Mutualism => "🤝",
            RelationshipType::Commensalism => "➕",
            RelationshipType::Parasitism => "🦟",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RelationshipType::PredatorPrey => "#ef4444",
            RelationshipType::Competition => "#f97316",
            RelationshipType::Mutualism => "#22c55e",
            RelationshipType::Commensalism => "#3b82f6",
            RelationshipType::Parasitism => "#a855f7",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RelationshipType::PredatorPrey => "One organism hunts another",
            RelationshipType::Competition => "Both compete for resources",
            RelationshipType::Mutualism => "Both organisms benefit",
            RelationshipType::Commensalism => "One benefits, other unaffected",
            RelationshipType::Parasitism => "One benefits, other harmed",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationshipType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown relationship type: {}", s))
    }
}

/// An animal placed on the canvas. Coordinates are percentages of the canvas box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemAnimal {
    pub ecosystem_id: EcosystemId,
    pub animal_id: i64,
    pub name: String,
    pub scientific_name: String,
    pub conservation_status: Option<ConservationStatus>,
    pub image_urls: Vec<String>,
    pub diet: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl EcosystemAnimal {
    pub fn from_summary(animal: &AnimalSummary, ecosystem_id: EcosystemId, x: f64, y: f64) -> Self {
        Self {
            ecosystem_id,
            animal_id: animal.id,
            name: animal.name.clone(),
            scientific_name: animal.scientific_name.clone(),
            conservation_status: animal.conservation_status,
            image_urls: animal.image_urls.clone(),
            diet: animal.diet.clone(),
            x,
            y,
        }
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

/// A typed edge between two tokens on the same canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub from: EcosystemId,
    pub to: EcosystemId,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
}

impl Relationship {
    pub fn touches(&self, token: &EcosystemId) -> bool {
        &self.from == token || &self.to == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_type_wire_names() {
        for kind in RelationshipType::ALL {
            assert_eq!(kind.as_str().parse::<RelationshipType>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        assert!("symbiosis".parse::<RelationshipType>().is_err());
    }

    #[test]
    fn test_relationship_serializes_type_field() {
        let rel = Relationship {
            id: RelationshipId::new("a-b-1"),
            from: EcosystemId::new("a"),
            to: EcosystemId::new("b"),
            kind: RelationshipType::Mutualism,
        };
        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["type"], "mutualism");
        assert_eq!(json["from"], "a");
        assert!(rel.touches(&EcosystemId::new("b")));
        assert!(!rel.touches(&EcosystemId::new("c")));
    }
}
