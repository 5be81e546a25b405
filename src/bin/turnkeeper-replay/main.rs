//! Replays a recorded answer stream through a panel session.
//!
//! Usage:
//!
//! ```text
//! turnkeeper-replay [--fingerprint] [--count-each-assistant] [--freeze-on-boundary] <updates.jsonl>
//! ```
//!
//! Each non-blank line of the input is one transport update: either the full
//! message list as a JSON array, or a submission marker:
//!
//! ```json
//! {"submit": true}
//! ```
//!
//! A marker freezes the current turn the way a host does before sending a
//! new query. When the input is exhausted the session ends and a JSON report
//! with the history and the final live state is written to stdout. Logs go
//! to stderr and honour `RUST_LOG`.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use turnkeeper::{
    panel::{
        config::{ChangeDetection, SameRolePolicy, SessionConfig},
        domain::{LiveState, RoleAnomaly, SessionId, Snapshot, TurnIndex, TurnPhase},
        ports::HistoryStore,
        services::PanelSession,
    },
    stream::{decode_messages, domain::Message, error::DecodeError},
};

#[derive(Debug, Parser)]
#[command(name = "turnkeeper-replay")]
#[command(about = "Replay recorded answer-stream updates through a panel session")]
struct Cli {
    /// JSON Lines file of transport updates
    input: PathBuf,

    /// Reprocess same-length batches whose content changed
    #[arg(long)]
    fingerprint: bool,

    /// Open a new turn for every assistant message, even consecutive ones
    #[arg(long)]
    count_each_assistant: bool,

    /// Freeze the outgoing turn automatically at each boundary
    #[arg(long)]
    freeze_on_boundary: bool,
}

impl Cli {
    const fn config(&self) -> SessionConfig {
        SessionConfig {
            change_detection: if self.fingerprint {
                ChangeDetection::Fingerprint
            } else {
                ChangeDetection::PartCount
            },
            same_role_policy: if self.count_each_assistant {
                SameRolePolicy::CountEach
            } else {
                SameRolePolicy::MergeConsecutive
            },
            freeze_on_boundary: self.freeze_on_boundary,
        }
    }
}

/// Errors that can occur while replaying a recording.
#[derive(Debug, Error)]
enum ReplayError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
    #[error("failed to encode replay report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write replay report: {0}")]
    Write(#[from] io::Error),
}

/// One line of a recording.
#[derive(Debug)]
enum ReplayLine {
    Update(Vec<Message>),
    Submit,
    Ignored,
}

#[derive(Debug, Deserialize)]
struct SubmitMarker {
    #[serde(default)]
    submit: bool,
}

/// Everything the session held when the recording ended.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayReport {
    session: SessionId,
    updates: usize,
    current_turn: Option<TurnIndex>,
    phase: TurnPhase,
    live: LiveState,
    history: Vec<Snapshot>,
    anomalies: Vec<RoleAnomaly>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("turnkeeper=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let recording = read_recording(&cli.input)?;
    let report = replay(&recording, cli.config())?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}

fn read_recording(path: &Path) -> Result<String, ReplayError> {
    fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_line(line: &str) -> Result<ReplayLine, DecodeError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ReplayLine::Ignored);
    }
    if trimmed.starts_with('{') {
        let marker: SubmitMarker = serde_json::from_str(trimmed)?;
        return Ok(if marker.submit {
            ReplayLine::Submit
        } else {
            ReplayLine::Ignored
        });
    }
    decode_messages(trimmed).map(ReplayLine::Update)
}

fn replay(recording: &str, config: SessionConfig) -> Result<ReplayReport, ReplayError> {
    let mut session = PanelSession::new(config);
    let mut updates = 0_usize;
    let mut anomalies = Vec::new();

    for (offset, line) in recording.lines().enumerate() {
        let line_number = offset.saturating_add(1);
        let parsed = parse_line(line).map_err(|source| ReplayError::Decode {
            line: line_number,
            source,
        })?;
        match parsed {
            ReplayLine::Update(messages) => {
                let outcome = session.ingest(&messages);
                updates = updates.saturating_add(1);
                anomalies.extend(outcome.anomalies);
            }
            ReplayLine::Submit => {
                let frozen = session.prepare_submission();
                debug!(line = line_number, ?frozen, "submission marker");
            }
            ReplayLine::Ignored => {}
        }
    }

    let id = session.id();
    let current_turn = session.current_turn();
    let phase = session.phase();
    let live = session.live().clone();
    let history = session.end();
    info!(updates, turns = history.len(), "replay finished");

    Ok(ReplayReport {
        session: id,
        updates,
        current_turn,
        phase,
        live,
        history: history.iter().cloned().collect(),
        anomalies,
    })
}

#[cfg(test)]
mod tests;
