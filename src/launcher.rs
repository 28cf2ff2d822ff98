//! External program launching
//!
//! Launches are fire-and-forget: the child is spawned with no arguments,
//! inherited environment and output streams, then handed to a reaper thread so
//! the dispatch path never waits on it. Stdin is not shared, since it may carry
//! the utterance stream.

use crate::error::{VoiceCmdError, VoiceCmdResult};
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, info};

/// Starts external programs for executable triggers
pub trait Launcher: Send + Sync + std::fmt::Debug {
    /// Start `program` and return without waiting for it
    fn launch(&self, program: &str) -> VoiceCmdResult<()>;

    fn name(&self) -> &str;
}

/// Launches real OS processes
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, program: &str) -> VoiceCmdResult<()> {
        let mut child = Command::new(program)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| VoiceCmdError::Launch {
                command: program.to_string(),
                source,
            })?;

        let pid = child.id();
        info!("🚀 Started '{}' (PID: {})", program, pid);

        // Reap the child in the background so it does not linger as a zombie.
        let program = program.to_string();
        thread::spawn(move || match child.wait() {
            Ok(status) => debug!("'{}' (PID: {}) exited with {}", program, pid, status),
            Err(e) => debug!("Could not wait on '{}' (PID: {}): {}", program, pid, e),
        });

        Ok(())
    }

    fn name(&self) -> &str {
        "process"
    }
}
