//! Transcript presentation
//!
//! Renders one dispatch outcome together with its recognition metadata.

use crate::dispatcher::DispatchResult;
use crate::recognition::Recognition;
use serde::{Deserialize, Serialize};

/// A single line of the running transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Text shown to the user
    pub result: String,
    /// True when the utterance was passed through
    pub unmatched: bool,
    pub confidence: f32,
    pub alternates: Vec<String>,
}

impl TranscriptEntry {
    pub fn new(outcome: DispatchResult, recognition: &Recognition) -> Self {
        Self {
            unmatched: !outcome.is_matched(),
            result: outcome.into_text(),
            confidence: recognition.confidence,
            alternates: recognition.alternates.clone(),
        }
    }

    /// Human-readable rendering; metadata lines follow the result when requested
    pub fn render_text(&self, show_metadata: bool) -> String {
        if !show_metadata {
            return self.result.clone();
        }

        // The first alternate shares the header line, the rest get one line each.
        let alternates: Vec<String> = self.alternates.iter().map(|alt| format!(" ({})", alt)).collect();
        format!(
            "{}\n  Confidence: {}\nAlternatives{}",
            self.result,
            self.confidence,
            alternates.join("\n")
        )
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
