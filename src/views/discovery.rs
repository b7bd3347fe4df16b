use super::Loadable;
use crate::{infrastructure::api_client::AnimalDexApi, models::AnimalSummary};

/// The landing page's card grid. Rendered once per request; it has no gestures,
/// so it never needs a session.
#[derive(Debug, Clone)]
pub struct DiscoveryView {
    pub animals: Loadable<Vec<AnimalSummary>>,
}

impl DiscoveryView {
    pub async fn load(api: &dyn AnimalDexApi) -> Self {
        Self {
            animals: Loadable::from_result(api.list_animals().await, "Failed to fetch animals"),
        }
    }
}
