//! voicecmd - Voice command dispatcher
//!
//! Reads recognized utterances (one per line, plain text or JSON) from stdin
//! and prints the dispatch result for each.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use voicecmd::audit::AuditLog;
use voicecmd::config::{self, Settings};
use voicecmd::presentation::TranscriptEntry;
use voicecmd::recognition::{LineSource, RecognitionSource};
use voicecmd::{Dispatcher, TriggerTable, VoiceCmdError};

/// Minimum similarity for the "did you mean" hint on unmatched utterances
const HINT_CUTOFF: f64 = 0.8;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Trigger file (overrides the settings file)
    #[arg(short, long)]
    triggers: Option<PathBuf>,

    /// Settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the trigger file, print its phrases (or entries with --json) and exit
    #[arg(long)]
    check: bool,

    /// Print JSON objects instead of plain text
    #[arg(long)]
    json: bool,

    /// Show confidence and alternates under each result
    #[arg(long)]
    metadata: bool,

    /// Drop recognitions below this confidence
    #[arg(long)]
    min_confidence: Option<f32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let (mut settings, corrupt) = match Settings::load_from(&config_path) {
        Ok(settings) => (settings, None),
        Err(VoiceCmdError::Json(e)) => (Settings::default(), Some(e)),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read settings from {}", config_path.display())
            })
        }
    };
    if let Some(path) = args.triggers.clone() {
        settings.triggers_path = path;
    }
    if let Some(min_confidence) = args.min_confidence {
        settings.min_confidence = min_confidence;
    }
    settings.show_metadata |= args.metadata;
    settings.validate()?;

    // Setup logging (stderr, so stdout carries only results)
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_lowercase()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = corrupt {
        Settings::back_up_corrupt(&config_path, &e);
    }

    info!("🎙️ voicecmd v{} starting...", env!("CARGO_PKG_VERSION"));

    let table = TriggerTable::from_path(&settings.triggers_path).with_context(|| {
        format!(
            "Failed to load triggers from {}",
            settings.triggers_path.display()
        )
    })?;

    if args.check {
        for entry in table.iter() {
            if args.json {
                println!("{}", serde_json::to_string(entry)?);
            } else {
                println!("{}", entry.trigger);
            }
        }
        info!("✅ {} trigger(s) OK", table.len());
        return Ok(());
    }

    let mut dispatcher = Dispatcher::new(table);
    if settings.audit_launches {
        let audit = AuditLog::in_config_dir();
        info!("📝 Auditing launches to {}", audit.path().display());
        dispatcher = dispatcher.with_audit(audit);
    }

    let mut source = LineSource::new(BufReader::new(tokio::io::stdin()))
        .with_min_confidence(settings.min_confidence);

    info!("✅ voicecmd ready - reading utterances from {}", source.name());

    while let Some(recognition) = source.next().await? {
        debug!("📝 Heard: '{}'", recognition.text);

        let outcome = dispatcher.resolve(&recognition.text);
        if !outcome.is_matched() {
            if let Some((trigger, score)) = dispatcher.table().closest(&recognition.text, HINT_CUTOFF) {
                debug!("Closest trigger: '{}' ({:.2})", trigger, score);
            }
        }

        let entry = TranscriptEntry::new(outcome, &recognition);
        let line = if args.json {
            entry.render_json()?
        } else {
            entry.render_text(settings.show_metadata)
        };
        println!("{}", line);
    }

    info!("👋 Input closed, shutting down");
    Ok(())
}
