use serde::{Deserialize, Serialize};

use super::nullable::non_blank;

/// Real-world case record returned by `GET /api/conservation-efforts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationEffort {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "non_blank")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub organization_name: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub conservation_problem: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub current_status: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub petition_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub volunteer_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub donation_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub image_url: Option<String>,
}

impl ConservationEffort {
    /// Pill tone for the effort's status text, matched by keyword.
    pub fn status_tone(&self) -> &'static str {
        let status = self
            .current_status
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        if status.contains("success") {
            "green"
        } else if status.contains("active") {
            "blue"
        } else if status.contains("critical") {
            "red"
        } else {
            "gray"
        }
    }

    /// Outbound action links in display order, skipping the ones the record lacks.
    pub fn action_links(&self) -> Vec<(&'static str, &'static str, &str)> {
        [
            ("Learn More", "blue", self.website_url.as_deref()),
            ("Volunteer", "green", self.volunteer_url.as_deref()),
            ("Donate", "purple", self.donation_url.as_deref()),
            ("Sign Petition", "orange", self.petition_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, tone, url)| url.map(|url| (label, tone, url)))
        .collect()
    }
}

/// One candidate approach shown for a selected effort. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub id: u32,
    pub name: String,
    pub approach: String,
    /// 1..=10
    pub effectiveness: u8,
    pub cost: String,
    pub timeframe: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}
