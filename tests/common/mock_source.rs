//! Mock recognition source for testing
//!
//! Replays a fixed queue of recognitions.

use async_trait::async_trait;
use std::collections::VecDeque;
use voicecmd::recognition::{Recognition, RecognitionSource};
use voicecmd::VoiceCmdResult;

pub struct MockSource {
    responses: VecDeque<Recognition>,
}

impl MockSource {
    pub fn new(responses: Vec<Recognition>) -> Self {
        Self {
            responses: responses.into(),
        }
    }

    /// Plain utterances with full confidence
    pub fn with_phrases(phrases: &[&str]) -> Self {
        Self::new(phrases.iter().map(|p| Recognition::from_text(p)).collect())
    }
}

#[async_trait]
impl RecognitionSource for MockSource {
    async fn next(&mut self) -> VoiceCmdResult<Option<Recognition>> {
        Ok(self.responses.pop_front())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
