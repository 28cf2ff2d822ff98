//! voicecmd Library
//!
//! Resolves recognized speech against a trigger table: each utterance becomes
//! substitution text, a program launch, or passes through unchanged.

pub mod audit;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod launcher;
pub mod presentation;
pub mod recognition;
pub mod triggers;

pub use dispatcher::{DispatchResult, Dispatcher};
pub use error::{VoiceCmdError, VoiceCmdResult};
pub use triggers::{TriggerEntry, TriggerTable};
