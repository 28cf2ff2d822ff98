//! voicecmd Error Types
//!
//! Centralized error handling for loading and dispatch.

use thiserror::Error;

/// Central error type for voicecmd
#[derive(Error, Debug)]
pub enum VoiceCmdError {
    /// A trigger file line did not have exactly three `|`-separated fields
    #[error("Malformed trigger line {line_number}: '{line}' (expected <trigger>|<action>|<true|false>)")]
    ConfigFormat { line_number: usize, line: String },

    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Recognition source error: {0}")]
    Recognition(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for voicecmd operations
pub type VoiceCmdResult<T> = Result<T, VoiceCmdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_format_names_line() {
        let err = VoiceCmdError::ConfigFormat {
            line_number: 3,
            line: "open browser|firefox".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("open browser|firefox"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_launch_error_names_command() {
        let err = VoiceCmdError::Launch {
            command: "/no/such/binary".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/no/such/binary"));
    }
}
