use std::sync::Arc;

use crate::{
    config::Config,
    infrastructure::{AnimalDexApi, HttpApiClient, SessionStore},
};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AnimalDexApi>,
    pub sessions: Arc<SessionStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // Remote catalog client
        let api = HttpApiClient::new(&config.api)?;
        Self::with_api(config, Arc::new(api))
    }

    /// Same wiring with any catalog implementation; tests pass the in-memory one.
    pub fn with_api(config: Config, api: Arc<dyn AnimalDexApi>) -> anyhow::Result<Self> {
        let sessions = SessionStore::new(config.sessions.capacity)?;

        Ok(Self {
            api,
            sessions: Arc::new(sessions),
            config,
        })
    }
}
