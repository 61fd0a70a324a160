//! # Tipsplit Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin ──► commands::handle_line ──► SessionState ──► tipsplit-core    │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  stdout ◄── {"ok":...} envelope          stderr ◄── tracing logs        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() {
    // The loop lives in lib.rs so it can be tested against in-memory buffers
    if let Err(err) = tipsplit_cli::run() {
        eprintln!("tipsplit: {}", err);
        std::process::exit(1);
    }
}
