// Canned solution tables for the action center, keyed by a keyword in the effort title

use crate::models::Solution;

/// Which canned case an effort title falls into. Matching is a case-sensitive
/// substring test and "Reef" wins over "Wolf".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKeyword {
    Reef,
    Wolf,
    Other,
}

impl CaseKeyword {
    pub fn from_title(title: &str) -> Self {
        if title.contains("Reef") {
            CaseKeyword::Reef
        } else if title.contains("Wolf") {
            CaseKeyword::Wolf
        } else {
            CaseKeyword::Other
        }
    }
}

struct SolutionRow {
    name: &'static str,
    approach: &'static str,
    effectiveness: u8,
    cost: &'static str,
    timeframe: &'static str,
    pros: [&'static str; 3],
    cons: [&'static str; 3],
}

const REEF: &[SolutionRow] = &[
    SolutionRow {
        name: "Marine Protected Areas Expansion",
        approach: "Conservation",
        effectiveness: 7,
        cost: "High",
        timeframe: "Long-term",
        pros: ["Protects biodiversity", "Natural resilience", "Tourism benefits"],
        cons: ["Expensive monitoring", "Fishing restrictions", "Slow recovery"],
    },
    SolutionRow {
        name: "Coral Restoration & Replanting",
        approach: "Active Restoration",
        effectiveness: 8,
        cost: "Medium",
        timeframe: "Medium-term",
        pros: ["Direct impact", "Community involvement", "Research opportunities"],
        cons: ["Labor intensive", "Limited scale", "Survival uncertainty"],
    },
    SolutionRow {
        name: "Climate Action & Emissions Reduction",
        approach: "Systemic Change",
        effectiveness: 9,
        cost: "Very High",
        timeframe: "Long-term",
        pros: ["Addresses root cause", "Global benefits", "Multiple ecosystems"],
        cons: [
            "Political challenges",
            "Delayed results",
            "International cooperation needed",
        ],
    },
];

const WOLF: &[SolutionRow] = &[
    SolutionRow {
        name: "Apex Predator Reintroduction",
        approach: "Ecosystem Restoration",
        effectiveness: 9,
        cost: "Medium",
        timeframe: "Medium-term",
        pros: [
            "Restores natural balance",
            "Reduces overgrazing",
            "Trophic cascade benefits",
        ],
        cons: ["Livestock conflicts", "Public opposition", "Requires monitoring"],
    },
    SolutionRow {
        name: "Community Education Programs",
        approach: "Social Change",
        effectiveness: 7,
        cost: "Low",
        timeframe: "Long-term",
        pros: ["Builds support", "Reduces conflicts", "Sustainable"],
        cons: ["Slow results", "Ongoing effort needed", "Variable success"],
    },
    SolutionRow {
        name: "Livestock Guardian Programs",
        approach: "Conflict Mitigation",
        effectiveness: 8,
        cost: "Medium",
        timeframe: "Short-term",
        pros: ["Protects livestock", "Reduces wolf killings", "Proven effective"],
        cons: ["Ongoing costs", "Training needed", "Not addressing all conflicts"],
    },
];

const GENERIC: &[SolutionRow] = &[
    SolutionRow {
        name: "Habitat Protection",
        approach: "Conservation",
        effectiveness: 8,
        cost: "Medium",
        timeframe: "Long-term",
        pros: ["Preserves ecosystems", "Multiple species benefit", "Sustainable"],
        cons: ["Land use conflicts", "Enforcement needed", "Political challenges"],
    },
    SolutionRow {
        name: "Community Engagement",
        approach: "Social Change",
        effectiveness: 7,
        cost: "Low",
        timeframe: "Medium-term",
        pros: ["Local ownership", "Cultural respect", "Economic benefits"],
        cons: ["Time intensive", "Variable success", "Training required"],
    },
];

/// Solutions shown for an effort, in display order. Ids start at 1 within each table.
pub fn solutions_for(title: &str) -> Vec<Solution> {
    let rows = match CaseKeyword::from_title(title) {
        CaseKeyword::Reef => REEF,
        CaseKeyword::Wolf => WOLF,
        CaseKeyword::Other => GENERIC,
    };

    rows.iter()
        .zip(1u32..)
        .map(|(row, id)| Solution {
            id,
            name: row.name.to_string(),
            approach: row.approach.to_string(),
            effectiveness: row.effectiveness,
            cost: row.cost.to_string(),
            timeframe: row.timeframe.to_string(),
            pros: row.pros.iter().map(|s| s.to_string()).collect(),
            cons: row.cons.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(title: &str) -> Vec<String> {
        solutions_for(title).into_iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_wolf_solutions_in_order() {
        assert_eq!(
            names("Yellowstone Wolf Reintroduction"),
            vec![
                "Apex Predator Reintroduction",
                "Community Education Programs",
                "Livestock Guardian Programs",
            ]
        );
    }

    #[test]
    fn test_reef_checked_before_wolf() {
        assert_eq!(CaseKeyword::from_title("Wolf Reef Survey"), CaseKeyword::Reef);
        assert_eq!(names("Great Barrier Reef Restoration").len(), 3);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(CaseKeyword::from_title("grey wolf count"), CaseKeyword::Other);
        assert_eq!(
            names("grey wolf count"),
            vec!["Habitat Protection", "Community Engagement"]
        );
    }

    #[test]
    fn test_effectiveness_in_range_and_ids_sequential() {
        for title in ["Reef", "Wolf", "Panda"] {
            for (i, s) in solutions_for(title).iter().enumerate() {
                assert_eq!(s.id as usize, i + 1);
                assert!((1..=10).contains(&s.effectiveness));
                assert_eq!(s.pros.len(), 3);
                assert_eq!(s.cons.len(), 3);
            }
        }
    }
}
