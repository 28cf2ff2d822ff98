use crate::error::{VoiceCmdError, VoiceCmdResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Trigger file (`<trigger>|<action>|<true|false>` per line)
    pub triggers_path: PathBuf,
    pub log_level: String,
    /// Print confidence and alternates under each result
    pub show_metadata: bool,
    /// Recognitions below this confidence are dropped before dispatch
    pub min_confidence: f32,
    /// Record program launches in the audit log
    pub audit_launches: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            triggers_path: std::env::current_dir()
                .unwrap_or_default()
                .join("example.txt"),
            log_level: "INFO".to_string(),
            show_metadata: false,
            min_confidence: 0.0,
            audit_launches: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`; a missing file yields defaults.
    ///
    /// An unparsable file is reported as `VoiceCmdError::Json` so the caller
    /// can fall back via [`Settings::back_up_corrupt`] once logging is up.
    pub fn load_from(path: &Path) -> VoiceCmdResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Move an unparsable settings file aside for debugging
    pub fn back_up_corrupt(path: &Path, err: &serde_json::Error) {
        tracing::warn!("⚠️ Settings file corrupted or invalid, using defaults: {}", err);
        let backup_path = path.with_extension("json.corrupt");
        match std::fs::rename(path, &backup_path) {
            Ok(()) => tracing::warn!("   Moved it to {}", backup_path.display()),
            Err(e) => tracing::warn!("   Could not back it up: {}", e),
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> VoiceCmdResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> VoiceCmdResult<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(VoiceCmdError::Settings(format!(
                "min_confidence must be between 0 and 1, got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voicecmd")
        .join("config.json")
}
