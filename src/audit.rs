use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only record of program launches
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Audit log in the user config directory (respecting XDG)
    pub fn in_config_dir() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        Self::new(config_dir.join("voicecmd").join("audit.log"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an entry to the audit log
    pub fn log(&self, entry: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(
            file,
            "[{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            entry
        )?;
        Ok(())
    }

    /// Record a launch attempt for `trigger`
    pub fn log_launch(&self, trigger: &str, program: &str, outcome: Result<(), &str>) -> Result<()> {
        match outcome {
            Ok(()) => self.log(&format!("LAUNCH '{}' -> {} | OK", trigger, program)),
            Err(reason) => self.log(&format!(
                "LAUNCH '{}' -> {} | FAILED: {}",
                trigger, program, reason
            )),
        }
    }
}
