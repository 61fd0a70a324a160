//! # Tipsplit CLI Library
//!
//! Line-oriented front end for the tipsplit calculator. Reads one JSON
//! command per stdin line and writes one JSON response per stdout line.
//!
//! ## Module Organization
//! ```text
//! tipsplit_cli/
//! ├── lib.rs          ◄─── You are here (logging & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── session.rs  ◄─── Bill, tip, roster and summary
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum, dispatch, response envelope
//! │   ├── split.rs    ◄─── Bill/tip/simple split commands
//! │   └── roster.rs   ◄─── People and item commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! Logs go to stderr so stdout carries only responses.

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tipsplit_core::SplitConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use state::SessionState;

/// Runs the command loop until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, stderr writer                 │
/// │     • Default: INFO, tipsplit crates at DEBUG; override with RUST_LOG   │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • SplitConfig::from_env (TIPSPLIT_* variables)                      │
/// │                                                                         │
/// │  3. Create Session                                                      │
/// │     • One participant, empty bill, default tip                          │
/// │                                                                         │
/// │  4. Loop: read line ─► handle_line ─► write response                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = SplitConfig::from_env();
    info!(
        max_participants = config.max_participants,
        default_tip_percent = config.default_tip_percent,
        "Starting tipsplit session"
    );

    let mut session = SessionState::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    serve(&mut session, stdin.lock(), &mut stdout)?;

    info!(revision = session.roster.revision(), "Session closed");
    Ok(())
}

/// Processes every non-blank line of `input`, one response line each.
///
/// A line that is not valid UTF-8 is decoded lossily, so it fails to parse
/// and gets an `INVALID_REQUEST` reply; the session keeps going.
pub fn serve<R: BufRead, W: Write>(
    session: &mut SessionState,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        debug!(line = %line, "Received command");
        let response = commands::handle_line(session, line);
        writeln!(output, "{}", response)?;
        output.flush()?;
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tipsplit=trace` - Show trace for tipsplit crates only
/// - Default: INFO, DEBUG for tipsplit crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tipsplit=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
