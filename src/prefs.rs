//! Durable dark-theme preference with change notification.
//!
//! The flag lives in a small JSON file (`settings.json`) under the
//! preference directory. Readers take the current value or subscribe to a
//! [`watch`] channel that yields every change; there is a single writer,
//! [`PreferenceStore::set_dark_theme`].

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::{watch, Mutex};

use crate::config;
use crate::error::Result;

pub struct PreferenceStore {
    path: PathBuf,
    dark_theme: watch::Sender<bool>,
    write_lock: Mutex<()>,
}

impl PreferenceStore {
    /// Open the store in `dir`, creating the directory if needed.
    ///
    /// A missing file reads as the default (`false`). A corrupt file is
    /// logged and also read as the default; the next write replaces it.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).await?;
        let path = dir.join(config::SETTINGS_FILE);

        let stored = match read_map(&path).await {
            Ok(map) => map
                .get(config::DARK_THEME_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(false),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Unreadable preferences, using defaults");
                false
            }
        };

        let (tx, _) = watch::channel(stored);
        Ok(Self {
            path,
            dark_theme: tx,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dark_theme(&self) -> bool {
        *self.dark_theme.borrow()
    }

    /// Receive the current value and every later change.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.dark_theme.subscribe()
    }

    /// Persist the flag, then publish it to subscribers.
    ///
    /// The file is written to a temp path and renamed into place, so an
    /// interrupted write never leaves a truncated file behind.
    pub async fn set_dark_theme(&self, dark: bool) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut map = read_map(&self.path).await.unwrap_or_default();
        map.insert(config::DARK_THEME_KEY.to_string(), Value::Bool(dark));
        let bytes = serde_json::to_vec_pretty(&Value::Object(map))?;

        let tmp = self.path.with_extension("json.tmp");
        let written = async {
            fs::write(&tmp, &bytes).await?;
            fs::rename(&tmp, &self.path).await
        }
        .await;
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(dark, "Saved theme preference");
        self.dark_theme.send_replace(dark);
        Ok(())
    }
}

async fn read_map(path: &Path) -> Result<Map<String, Value>> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Value>(&bytes)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
        Err(e) => Err(e.into()),
    }
}
