use chrono::Duration;

use crate::config::Config;
use crate::services::{AdminClient, IntakeClient};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub intake: IntakeClient,
    pub admin: AdminClient,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            intake: IntakeClient::new(&config.backend_url),
            admin: AdminClient::new(&config.backend_url),
            sessions: SessionStore::new(Duration::minutes(config.session_ttl_minutes)),
            config,
        }
    }
}
