use std::sync::Arc;

use tokio::sync::watch;

use crate::error::Result;
use crate::prefs::PreferenceStore;

/// Exposes the dark-theme flag to the settings screen.
#[derive(Clone)]
pub struct SettingsController {
    prefs: Arc<PreferenceStore>,
}

impl SettingsController {
    pub fn new(prefs: Arc<PreferenceStore>) -> Self {
        Self { prefs }
    }

    pub fn is_dark_theme(&self) -> bool {
        self.prefs.is_dark_theme()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.prefs.subscribe()
    }

    pub async fn set_dark_theme(&self, dark: bool) -> Result<()> {
        self.prefs.set_dark_theme(dark).await
    }
}
