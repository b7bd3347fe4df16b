use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Prompt-engineering techniques offered by the detail page's research assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptTechnique {
    Role,
    FewShot,
}

impl PromptTechnique {
    pub const ALL: [PromptTechnique; 2] = [PromptTechnique::Role, PromptTechnique::FewShot];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptTechnique::Role => "role",
            PromptTechnique::FewShot => "few-shot",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PromptTechnique::Role => "Role Assignment",
            PromptTechnique::FewShot => "Few-Shot Learning",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromptTechnique::Role => "Ask AI to take on an expert role",
            PromptTechnique::FewShot => "Give AI examples, then ask for similar info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PromptTechnique::Role => "🧠",
            PromptTechnique::FewShot => "📖",
        }
    }

    pub fn example(&self, animal_name: &str) -> String {
        match self {
            PromptTechnique::Role => format!(
                "You are a wildlife biologist specializing in {}. Explain their hunting strategies in detail.",
                animal_name
            ),
            PromptTechnique::FewShot => format!(
                "Here are examples of adaptations:\n- Polar bears have thick fur for insulation\n- Camels store water in humps\n\nNow explain how {} adapts to its environment.",
                animal_name
            ),
        }
    }
}

impl FromStr for PromptTechnique {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptTechnique::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown prompt technique: {}", s))
    }
}

pub fn simulated_response(animal_name: &str) -> String {
    format!(
        "This is a simulated AI response about {}. In production, this would call an actual AI API with your prompt.",
        animal_name
    )
}

pub const ENERGY_NOTE: &str = "Energy used: ~0.01 kWh";
