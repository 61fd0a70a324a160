//! # State Module
//!
//! Session state for the command loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     SessionState                                 │  │
//! │  │                                                                  │  │
//! │  │  roster ─────────► participants + items (tipsplit-core Roster)   │  │
//! │  │  bill_input/bill ► last accepted bill text and its value         │  │
//! │  │  tip_percent ────► clamped tip                                   │  │
//! │  │  config ─────────► SplitConfig (read-only after start)           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Single owner, single thread: no Mutex needed.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod session;

pub use session::{PersonLine, SessionState, SessionSummary};
