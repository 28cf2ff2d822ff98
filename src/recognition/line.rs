//! Line-oriented recognition source
//!
//! Reads one utterance per line. A line holding a JSON object such as
//! `{"text": "smiley", "confidence": 0.9, "alternates": ["smile"]}` is taken
//! as a full recognition event; any other non-blank line is plain text.

use super::{Recognition, RecognitionSource};
use crate::error::{VoiceCmdError, VoiceCmdResult};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    min_confidence: f32,
}

impl<R: AsyncBufRead + Unpin + Send> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            min_confidence: 0.0,
        }
    }

    /// Drop recognitions scoring below `min_confidence`
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

/// Parse a single input line into a recognition event
pub fn parse_line(line: &str) -> Option<Recognition> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
        return None;
    }

    if trimmed.trim_start().starts_with('{') {
        if let Ok(recognition) = serde_json::from_str::<Recognition>(trimmed) {
            return Some(recognition);
        }
        debug!("Line looks like JSON but is not a recognition event, using as text");
    }

    Some(Recognition::from_text(trimmed))
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> RecognitionSource for LineSource<R> {
    async fn next(&mut self) -> VoiceCmdResult<Option<Recognition>> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .await
                .map_err(|e| VoiceCmdError::Recognition(e.to_string()))?;
            if read == 0 {
                return Ok(None);
            }

            // A garbled line must not end the session.
            let line = String::from_utf8_lossy(&self.buf);
            if let std::borrow::Cow::Owned(_) = line {
                warn!("⚠️ Input line was not valid UTF-8, replaced invalid bytes");
            }

            let Some(recognition) = parse_line(&line) else {
                continue;
            };

            if recognition.confidence < self.min_confidence {
                debug!(
                    "Discarding '{}' (confidence {:.2} < {:.2})",
                    recognition.text, recognition.confidence, self.min_confidence
                );
                continue;
            }

            return Ok(Some(recognition));
        }
    }

    fn name(&self) -> &str {
        "lines"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[test]
    fn test_parse_plain_and_json() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("smiley"), Some(Recognition::from_text("smiley")));

        let r = parse_line(r#"{"text":"open browser","confidence":0.42,"alternates":["open browsers"]}"#)
            .unwrap();
        assert_eq!(r.text, "open browser");
        assert!((r.confidence - 0.42).abs() < f32::EPSILON);
        assert_eq!(r.alternates, vec!["open browsers".to_string()]);

        // Not an event object: the raw line is the utterance.
        assert_eq!(parse_line("{not json"), Some(Recognition::from_text("{not json")));
    }

    #[tokio::test]
    async fn test_source_filters_blank_and_low_confidence() {
        let input = "smiley\n\n{\"text\":\"mumble\",\"confidence\":0.1}\n{\"text\":\"wave\",\"confidence\":0.9}\n";
        let mut source = LineSource::new(BufReader::new(input.as_bytes())).with_min_confidence(0.5);

        let first = source.next().await.unwrap().unwrap();
        assert_eq!(first.text, "smiley");
        let second = source.next().await.unwrap().unwrap();
        assert_eq!(second.text, "wave");
        assert!(source.next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_source() {
        let input: &[u8] = b"caf\xe9\nsmiley\n";
        let mut source = LineSource::new(BufReader::new(input));

        let first = source.next().await.unwrap().unwrap();
        assert_eq!(first.text, "caf\u{FFFD}");
        let second = source.next().await.unwrap().unwrap();
        assert_eq!(second.text, "smiley");
        assert!(source.next().await.unwrap().is_none());
    }
}
