//! Utterance dispatch
//!
//! Resolves a recognized utterance against the trigger table and either
//! substitutes text, launches a program, or passes the utterance through.

use crate::audit::AuditLog;
use crate::error::VoiceCmdResult;
use crate::launcher::{Launcher, ProcessLauncher};
use crate::triggers::{TriggerEntry, TriggerTable};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Prefix of the confirmation returned after a successful launch
pub const LAUNCH_CONFIRMATION: &str = "you just started: ";

/// Outcome of resolving one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// A trigger matched; holds the substitution text or launch confirmation
    Matched(String),
    /// No trigger matched, or its launch failed; holds the original utterance
    Unmatched(String),
}

impl DispatchResult {
    /// Text to present to the user
    pub fn text(&self) -> &str {
        match self {
            DispatchResult::Matched(text) | DispatchResult::Unmatched(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            DispatchResult::Matched(text) | DispatchResult::Unmatched(text) => text,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, DispatchResult::Matched(_))
    }
}

/// Maps utterances to substitutions or program launches
#[derive(Debug)]
pub struct Dispatcher {
    table: TriggerTable,
    launcher: Arc<dyn Launcher>,
    audit: Option<AuditLog>,
}

impl Dispatcher {
    /// Create a dispatcher that launches real processes
    pub fn new(table: TriggerTable) -> Self {
        Self::with_launcher(table, Arc::new(ProcessLauncher::new()))
    }

    pub fn with_launcher(table: TriggerTable, launcher: Arc<dyn Launcher>) -> Self {
        debug!(
            "Dispatcher ready: {} trigger(s), '{}' launcher",
            table.len(),
            launcher.name()
        );
        Self {
            table,
            launcher,
            audit: None,
        }
    }

    /// Record every launch attempt in `audit`
    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn table(&self) -> &TriggerTable {
        &self.table
    }

    /// Resolve a finalized utterance.
    ///
    /// Launch failures are contained here and reported as `Unmatched`, so the
    /// caller sees the same result as for free dictation.
    pub fn resolve(&self, utterance: &str) -> DispatchResult {
        let Some(entry) = self.table.get(utterance) else {
            debug!("No trigger matched: '{}'", utterance);
            return DispatchResult::Unmatched(utterance.to_string());
        };

        debug!("🎯 Matched trigger: '{}'", entry.trigger);

        match self.dispatch_entry(entry) {
            Ok(text) => DispatchResult::Matched(text),
            Err(e) => {
                warn!("❌ Trigger '{}' failed: {}", entry.trigger, e);
                DispatchResult::Unmatched(utterance.to_string())
            }
        }
    }

    /// Perform the action for a matched entry and return its result text
    pub fn dispatch_entry(&self, entry: &TriggerEntry) -> VoiceCmdResult<String> {
        if !entry.is_executable {
            return Ok(entry.action.clone());
        }

        let outcome = self.launcher.launch(&entry.action);
        self.audit_launch(entry, &outcome);
        outcome?;

        info!("⚡ '{}' -> started {}", entry.trigger, entry.action);
        Ok(format!("{}{}", LAUNCH_CONFIRMATION, entry.action))
    }

    fn audit_launch(&self, entry: &TriggerEntry, outcome: &VoiceCmdResult<()>) {
        let Some(audit) = &self.audit else {
            return;
        };

        let reason = outcome.as_ref().err().map(|e| e.to_string());
        let result = match &reason {
            Some(reason) => Err(reason.as_str()),
            None => Ok(()),
        };
        if let Err(e) = audit.log_launch(&entry.trigger, &entry.action, result) {
            warn!("Could not write audit log {}: {}", audit.path().display(), e);
        }
    }
}
