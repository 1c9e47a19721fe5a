use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::bridge::BridgeCommands;
use crate::entity::GeneralSettings;

#[async_trait]
pub trait SettingsInteractor: Send + Sync {
    async fn general_settings(&self) -> Result<GeneralSettings>;
}

pub struct SettingsInteractorImpl {
    bridge: Arc<BridgeCommands>,
}

impl SettingsInteractorImpl {
    pub fn new(bridge: Arc<BridgeCommands>) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl SettingsInteractor for SettingsInteractorImpl {
    async fn general_settings(&self) -> Result<GeneralSettings> {
        self.bridge.settings_get().await
    }
}
