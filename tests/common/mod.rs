#![allow(dead_code)]

pub mod mock_source;

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;
use voicecmd::launcher::Launcher;
use voicecmd::{VoiceCmdError, VoiceCmdResult};

/// Trigger file used across the integration tests
pub const SAMPLE_TRIGGERS: &str = "\
-- this is a comment
open browser|notepad|true
smiley|🙂|false

-- broken launcher entry
broken|/no/such/binary|true
";

/// A temporary directory holding a trigger file
pub struct TriggerFixture {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TriggerFixture {
    pub fn new(contents: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("triggers.txt");
        std::fs::write(&path, contents).expect("Failed to write trigger file");
        Self { temp_dir, path }
    }
}

/// Launcher that records every attempt and succeeds unless the program is listed in `missing`
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub launched: Mutex<Vec<String>>,
    pub missing: Vec<String>,
}

impl RecordingLauncher {
    pub fn failing_for(programs: &[&str]) -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            missing: programs.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.launched.lock().expect("lock poisoned").clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, program: &str) -> VoiceCmdResult<()> {
        self.launched
            .lock()
            .expect("lock poisoned")
            .push(program.to_string());

        if self.missing.iter().any(|m| m == program) {
            return Err(VoiceCmdError::Launch {
                command: program.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
