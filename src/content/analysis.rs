// Canned "reverse prompting" analysis shown in the action center

use super::solutions::CaseKeyword;
use crate::models::ConservationEffort;

pub struct CriticalQuestion {
    pub question: &'static str,
    pub hint: &'static str,
}

pub const CRITICAL_QUESTIONS: [CriticalQuestion; 4] = [
    CriticalQuestion {
        question: "What perspectives might be missing?",
        hint: "Consider: Indigenous voices, local communities, economic impacts, historical context",
    },
    CriticalQuestion {
        question: "What assumptions does the AI make?",
        hint: "Look for: Western-centric solutions, technology focus, cost considerations",
    },
    CriticalQuestion {
        question: "How could this prompt be improved?",
        hint: "Consider adding: local context, stakeholder perspectives, resource constraints",
    },
    CriticalQuestion {
        question: "What's the environmental cost of this AI query?",
        hint: "AI models use energy - was this query necessary? Could we consult experts instead?",
    },
];

pub const TROPHIC_CASCADE: [&str; 6] = [
    "Wolves hunt elk → Elk populations decrease",
    "Fewer elk → Less overgrazing on willows and aspen",
    "Vegetation recovers → Riverbanks stabilize",
    "Stable banks → Beaver habitat improves",
    "Beaver dams → More wetlands created",
    "Wetlands → Biodiversity increases across ecosystem",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AiAnalysis {
    pub prompt: String,
    pub response: &'static str,
    pub improved_prompt: String,
    /// Only the wolf case carries the Yellowstone cascade.
    pub cascade: Option<&'static [&'static str]>,
}

pub fn analysis_for(effort: &ConservationEffort) -> AiAnalysis {
    let keyword = CaseKeyword::from_title(&effort.title);

    let prompt = match keyword {
        CaseKeyword::Reef => "Generate solutions for protecting coral reefs from bleaching".to_string(),
        CaseKeyword::Wolf => {
            "What are effective ways to restore ecosystem balance after removing apex predators?"
                .to_string()
        }
        CaseKeyword::Other => format!(
            "How can we address {}?",
            effort
                .conservation_problem
                .as_deref()
                .unwrap_or(effort.title.as_str())
        ),
    };

    let response = match keyword {
        CaseKeyword::Reef => {
            "To protect coral reefs from bleaching, we should: 1) Create more marine protected areas, \
             2) Restore damaged reefs through coral replanting, 3) Reduce carbon emissions globally."
        }
        CaseKeyword::Wolf => {
            "To restore ecosystem balance: 1) Reintroduce apex predators like wolves, \
             2) Educate local communities about benefits, 3) Implement livestock protection programs."
        }
        CaseKeyword::Other => {
            "Focus on habitat protection, community engagement, and policy enforcement."
        }
    };

    let improved_prompt = format!(
        "What conservation solutions for {} prioritize local community involvement, consider \
         economic sustainability, and respect indigenous knowledge? Include both immediate and \
         long-term strategies with specific examples from similar successful projects.",
        effort.title.to_lowercase()
    );

    AiAnalysis {
        prompt,
        response,
        improved_prompt,
        cascade: (keyword == CaseKeyword::Wolf).then_some(&TROPHIC_CASCADE[..]),
    }
}
