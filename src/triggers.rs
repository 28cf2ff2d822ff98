//! Trigger table
//!
//! Parses the `<trigger>|<action>|<true|false>` command file and provides
//! exact-match lookup for the dispatcher.

use crate::error::{VoiceCmdError, VoiceCmdResult};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use strsim::normalized_levenshtein;
use tracing::{debug, info};

/// Lines starting with this marker are ignored
pub const COMMENT_MARKER: &str = "--";

/// Field separator within a trigger line
pub const FIELD_SEPARATOR: char = '|';

/// The only token that marks an action as executable
pub const EXECUTABLE_TOKEN: &str = "true";

/// Byte order mark written by some Windows editors
const BOM: char = '\u{FEFF}';

/// Split on `\r\n`, `\n` or a bare `\r`
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// A configured voice command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerEntry {
    /// Exact utterance that activates this entry
    pub trigger: String,
    /// Replacement text, or the program to launch
    pub action: String,
    /// Whether `action` names a program
    pub is_executable: bool,
}

impl TriggerEntry {
    pub fn new(trigger: &str, action: &str, is_executable: bool) -> Self {
        Self {
            trigger: trigger.to_string(),
            action: action.to_string(),
            is_executable,
        }
    }

    /// Parse a single non-comment line.
    fn parse(line: &str, line_number: usize) -> VoiceCmdResult<Self> {
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        match parts.as_slice() {
            [trigger, action, flag] => Ok(Self::new(trigger, action, *flag == EXECUTABLE_TOKEN)),
            _ => Err(VoiceCmdError::ConfigFormat {
                line_number,
                line: line.to_string(),
            }),
        }
    }
}

/// Ordered, read-only trigger → entry mapping
#[derive(Debug, Clone, Default)]
pub struct TriggerTable {
    entries: Vec<TriggerEntry>,
    index: HashMap<String, usize>,
}

impl TriggerTable {
    /// Build a table from raw lines, failing on the first malformed one
    pub fn load<I, S>(lines: I) -> VoiceCmdResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line = if idx == 0 {
                line.strip_prefix(BOM).unwrap_or(line)
            } else {
                line
            };
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let entry = TriggerEntry::parse(line, idx + 1)?;
            table.insert(entry);
        }

        debug!("Loaded {} trigger(s)", table.len());
        Ok(table)
    }

    /// Build a table from a reader (one entry per line)
    pub fn from_reader<R: Read>(mut reader: R) -> VoiceCmdResult<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::load(split_lines(&content))
    }

    /// Build a table from a trigger file on disk
    pub fn from_path(path: &Path) -> VoiceCmdResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::load(split_lines(&content))?;
        info!(
            "📖 Loaded {} trigger(s) from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    fn insert(&mut self, entry: TriggerEntry) {
        match self.index.get(&entry.trigger) {
            Some(&pos) => {
                debug!("Trigger '{}' redefined, last definition wins", entry.trigger);
                self.entries[pos] = entry;
            }
            None => {
                self.index.insert(entry.trigger.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, trigger: &str) -> Option<&TriggerEntry> {
        self.index.get(trigger).map(|&pos| &self.entries[pos])
    }

    /// Number of distinct triggers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriggerEntry> {
        self.entries.iter()
    }

    /// Trigger phrases in load order, for registering with a recognizer
    /// vocabulary alongside free dictation.
    pub fn phrases(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.trigger.as_str()).collect()
    }

    /// Closest known trigger and its similarity score, if any reaches `cutoff`
    pub fn closest(&self, text: &str, cutoff: f64) -> Option<(&str, f64)> {
        let text = text.to_lowercase();
        self.entries
            .iter()
            .map(|e| {
                let score = normalized_levenshtein(&text, &e.trigger.to_lowercase());
                (e.trigger.as_str(), score)
            })
            .filter(|(_, score)| *score >= cutoff)
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}
