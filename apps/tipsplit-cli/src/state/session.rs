//! # Session State
//!
//! Everything one bill-splitting session remembers between commands.
//!
//! ## Ownership
//! The CLI owns exactly one `SessionState` and processes commands one at a
//! time, so there is no locking. A server exposing the same commands would
//! create one `SessionState` per client session.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command              Session Change               Result               │
//! │  ───────              ──────────────               ──────               │
//! │  setBill "42.5" ────► bill_input, bill ──────────► summary              │
//! │  setTip 18      ────► tip_percent (clamped) ─────► summary              │
//! │  addItem ...    ────► roster.add_item ───────────► summary              │
//! │  deletePerson 2 ────► roster.delete_participant ─► summary              │
//! │                                                                         │
//! │  summary() re-runs both calculators on every call.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tipsplit_core::money::parse_amount;
use tipsplit_core::validation::clamp_tip_percent;
use tipsplit_core::{
    compute_simple_split, BillItem, ItemizedSplit, Roster, SimpleSplit, SplitConfig,
    ValidationError,
};

/// One participant's share, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonLine {
    pub index: u32,
    pub name: String,
    pub base: String,
    pub tip: String,
    pub total: String,
}

/// Snapshot returned after every session command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Roster revision this snapshot was computed from.
    pub revision: u64,

    pub bill: f64,
    pub tip_percent: f64,
    pub participant_count: u32,

    /// Even split of `bill` across the roster.
    pub simple: SimpleSplit,

    /// Per-item split over the roster's items.
    pub itemized: ItemizedSplit,

    pub items: Vec<BillItem>,

    /// `itemized.results` with names and currency strings.
    pub lines: Vec<PersonLine>,

    /// Names of items that lost every assignee.
    pub unassigned_items: Vec<String>,
}

/// State for a single session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub roster: Roster,

    /// Bill text exactly as last accepted.
    bill_input: String,

    bill: f64,

    tip_percent: f64,

    config: SplitConfig,
}

impl SessionState {
    /// Starts a session: one participant, empty bill, default tip.
    pub fn new(config: SplitConfig) -> Self {
        SessionState {
            roster: Roster::from_config(&config),
            bill_input: String::new(),
            bill: 0.0,
            tip_percent: clamp_tip_percent(config.default_tip_percent),
            config,
        }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn bill(&self) -> f64 {
        self.bill
    }

    pub fn bill_input(&self) -> &str {
        &self.bill_input
    }

    pub fn tip_percent(&self) -> f64 {
        self.tip_percent
    }

    /// Accepts new bill text. Text the bill field would refuse (two decimal
    /// points, more than two decimals) is rejected and the old bill kept.
    pub fn set_bill(&mut self, text: &str) -> Result<f64, ValidationError> {
        let amount = parse_amount(text).ok_or_else(|| ValidationError::InvalidFormat {
            field: "bill".to_string(),
            reason: "expected an amount with at most two decimals".to_string(),
        })?;

        self.bill_input = text.to_string();
        self.bill = amount;
        Ok(amount)
    }

    /// Sets the tip percentage, clamped to `[0, 100]`.
    pub fn set_tip_percent(&mut self, tip_percent: f64) -> f64 {
        self.tip_percent = clamp_tip_percent(tip_percent);
        self.tip_percent
    }

    /// Simple mode over the session's bill and roster size.
    pub fn simple_split(&self) -> SimpleSplit {
        compute_simple_split(
            self.bill,
            self.tip_percent,
            self.roster.participant_count() as i64,
        )
    }

    /// Itemized mode over the session's roster.
    pub fn itemized_split(&self) -> ItemizedSplit {
        self.roster.split(self.tip_percent)
    }

    /// Recomputes both splits and formats them.
    pub fn summary(&self) -> SessionSummary {
        let itemized = self.itemized_split();
        let lines = itemized
            .results
            .iter()
            .map(|person| PersonLine {
                index: person.person_index,
                name: self
                    .roster
                    .display_name(person.person_index)
                    .unwrap_or_default(),
                base: self.config.format_currency(person.base_amount),
                tip: self.config.format_currency(person.tip_amount),
                total: self.config.format_currency(person.total_amount),
            })
            .collect();

        SessionSummary {
            revision: self.roster.revision(),
            bill: self.bill,
            tip_percent: self.tip_percent,
            participant_count: self.roster.participant_count(),
            simple: self.simple_split(),
            items: self.roster.items().to_vec(),
            unassigned_items: self
                .roster
                .unassigned_items()
                .map(|item| item.name.clone())
                .collect(),
            itemized,
            lines,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}
