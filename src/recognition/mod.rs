//! Recognition Module
//!
//! Boundary with the speech recognizer. The dispatcher only consumes the
//! recognized text; confidence and alternates are carried for display.
//! - LineSource: utterances as text or JSON lines from any async reader

pub mod line;

use crate::error::VoiceCmdResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use line::LineSource;

/// One finalized utterance from the recognizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub text: String,
    #[serde(default = "full_confidence")]
    pub confidence: f32,
    #[serde(default)]
    pub alternates: Vec<String>,
}

fn full_confidence() -> f32 {
    1.0
}

impl Recognition {
    /// A plain utterance with full confidence and no alternates
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            confidence: full_confidence(),
            alternates: Vec::new(),
        }
    }
}

/// Trait for sources of recognized utterances
#[async_trait]
pub trait RecognitionSource: Send {
    /// Next finalized utterance, or `None` when the source is exhausted.
    /// Results below the source's confidence threshold are filtered out internally.
    async fn next(&mut self) -> VoiceCmdResult<Option<Recognition>>;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_json_defaults() {
        let r: Recognition = serde_json::from_str(r#"{"text":"smiley"}"#).unwrap();
        assert_eq!(r, Recognition::from_text("smiley"));
    }

    #[test]
    fn test_source_as_trait_object() {
        let input: &[u8] = b"open browser\r\nsmiley";
        let mut source: Box<dyn RecognitionSource> =
            Box::new(LineSource::new(tokio::io::BufReader::new(input)));

        let texts = tokio_test::block_on(async {
            let mut texts = Vec::new();
            while let Some(r) = source.next().await.unwrap() {
                texts.push(r.text);
            }
            texts
        });
        assert_eq!(texts, vec!["open browser", "smiley"]);
        assert_eq!(source.name(), "lines");
    }
}
