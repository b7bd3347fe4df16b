// Visual tables for the ecosystem builder: habitat backgrounds, edge styles, helper prompts

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::RelationshipType;

pub const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, #f3f4f6, #e5e7eb)";

static HABITAT_GRADIENTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Arctic Tundra", "linear-gradient(135deg, #dbeafe, #ecfeff, #ffffff)"),
        ("Tropical Rainforest", "linear-gradient(135deg, #dcfce7, #ecfdf5, #dcfce7)"),
        ("Coral Reef", "linear-gradient(135deg, #eff6ff, #ccfbf1, #ecfeff)"),
        ("Temperate Forest", "linear-gradient(135deg, #f0fdf4, #fefce8, #fff7ed)"),
        ("Savanna", "linear-gradient(135deg, #fef9c3, #fff7ed, #fef3c7)"),
    ])
});

/// Canvas background for a habitat, by exact name.
pub fn habitat_gradient(name: &str) -> &'static str {
    HABITAT_GRADIENTS
        .get(name)
        .copied()
        .unwrap_or(FALLBACK_GRADIENT)
}

/// How an edge of a given type is drawn on the canvas overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeStyle {
    pub color: &'static str,
    /// SVG `stroke-dasharray`; "0" is solid.
    pub dash: &'static str,
    pub width: u8,
    /// Marker id for the line end, if any.
    pub end_marker: Option<&'static str>,
    /// Competition draws a second line with a start arrow.
    pub opposing_line: bool,
}

pub fn edge_style(kind: RelationshipType) -> EdgeStyle {
    let color = kind.color();
    match kind {
        RelationshipType::PredatorPrey => EdgeStyle {
            color,
            dash: "0",
            width: 4,
            end_marker: Some("arrowhead-red"),
            opposing_line: false,
        },
        RelationshipType::Competition => EdgeStyle {
            color,
            dash: "10,5",
            width: 3,
            end_marker: None,
            opposing_line: true,
        },
        RelationshipType::Mutualism => EdgeStyle {
            color,
            dash: "0",
            width: 4,
            end_marker: Some("arrowhead-green"),
            opposing_line: false,
        },
        RelationshipType::Commensalism => EdgeStyle {
            color,
            dash: "15,5,5,5",
            width: 3,
            end_marker: Some("arrowhead-blue"),
            opposing_line: false,
        },
        RelationshipType::Parasitism => EdgeStyle {
            color,
            dash: "5,5",
            width: 3,
            end_marker: Some("arrowhead-purple"),
            opposing_line: false,
        },
    }
}

/// Arrow markers declared once in the overlay's `<defs>`.
pub const ARROW_MARKERS: [(&str, &str); 5] = [
    ("arrowhead-red", "#ef4444"),
    ("arrowhead-orange", "#f97316"),
    ("arrowhead-green", "#22c55e"),
    ("arrowhead-blue", "#3b82f6"),
    ("arrowhead-purple", "#a855f7"),
];

pub const HELPER_PROMPTS: [&str; 3] = [
    "💡 What would happen if I removed a top predator?",
    "🔍 Analyze the energy flow in this food web",
    "🎯 Show me the Yellowstone wolf case study",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habitat_gradient_fallback() {
        assert!(habitat_gradient("Savanna").contains("#fef9c3"));
        assert_eq!(habitat_gradient("Deep Sea Vent"), FALLBACK_GRADIENT);
    }

    #[test]
    fn test_only_competition_draws_two_lines() {
        for kind in RelationshipType::ALL {
            let style = edge_style(kind);
            assert_eq!(style.opposing_line, kind == RelationshipType::Competition);
            assert_eq!(style.end_marker.is_none(), style.opposing_line);
            assert_eq!(style.color, kind.color());
        }
    }
}
