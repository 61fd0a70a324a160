//! # Commands Module
//!
//! All commands the session accepts on stdin.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Command enum + dispatch)
//! ├── split.rs    ◄─── Bill, tip, simple split, summary
//! └── roster.rs   ◄─── People and items
//! ```
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin (one JSON object per line)                                       │
//! │  ─────                                                                  │
//! │  {"command":"setBill","amount":"84.50"}                                 │
//! │  {"command":"incrementPeople"}                                          │
//! │  {"command":"addItem","name":"Pizza","price":30,"assignedTo":[1]}       │
//! │  {"command":"addItem","name":"Wine","price":20,"all":true}              │
//! │  {"command":"deletePerson","index":2}                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&mut SessionState, Command)                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout                                                                 │
//! │  ──────                                                                 │
//! │  {"ok":true,"data":{...summary...}}                                     │
//! │  {"ok":false,"error":{"code":"NOT_FOUND","message":"..."}}              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod roster;
pub mod split;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::state::SessionState;

/// A parsed stdin command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Stateless even split; does not touch the session.
    SimpleSplit {
        bill: f64,
        tip_percent: f64,
        people: i64,
    },
    SetBill {
        amount: String,
    },
    SetTip {
        tip_percent: f64,
    },
    IncrementPeople,
    DecrementPeople,
    DeletePerson {
        index: u32,
    },
    RenamePerson {
        index: u32,
        name: String,
    },
    AddItem {
        name: String,
        price: f64,
        #[serde(default)]
        assigned_to: Vec<u32>,
        #[serde(default)]
        all: bool,
    },
    EditItem {
        id: String,
        name: String,
        price: f64,
        #[serde(default)]
        assigned_to: Vec<u32>,
        #[serde(default)]
        all: bool,
    },
    DeleteItem {
        id: String,
    },
    ClearItems,
    Summary,
    /// Session configuration (presets, ceiling, currency).
    Config,
}

/// Response envelope written to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn from_result(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response {
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Response {
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Runs one command against the session.
pub fn dispatch(session: &mut SessionState, command: Command) -> Result<Value, ApiError> {
    let value = match command {
        Command::SimpleSplit {
            bill,
            tip_percent,
            people,
        } => serde_json::to_value(split::simple_split(bill, tip_percent, people))?,
        Command::SetBill { amount } => serde_json::to_value(split::set_bill(session, &amount)?)?,
        Command::SetTip { tip_percent } => {
            serde_json::to_value(split::set_tip(session, tip_percent))?
        }
        Command::IncrementPeople => serde_json::to_value(roster::increment_people(session)?)?,
        Command::DecrementPeople => serde_json::to_value(roster::decrement_people(session)?)?,
        Command::DeletePerson { index } => {
            serde_json::to_value(roster::delete_person(session, index)?)?
        }
        Command::RenamePerson { index, name } => {
            serde_json::to_value(roster::rename_person(session, index, &name)?)?
        }
        Command::AddItem {
            name,
            price,
            assigned_to,
            all,
        } => serde_json::to_value(roster::add_item(session, &name, price, assigned_to, all)?)?,
        Command::EditItem {
            id,
            name,
            price,
            assigned_to,
            all,
        } => serde_json::to_value(roster::edit_item(
            session,
            &id,
            &name,
            price,
            assigned_to,
            all,
        )?)?,
        Command::DeleteItem { id } => serde_json::to_value(roster::delete_item(session, &id)?)?,
        Command::ClearItems => serde_json::to_value(roster::clear_items(session))?,
        Command::Summary => serde_json::to_value(split::summary(session))?,
        Command::Config => serde_json::to_value(session.config())?,
    };
    Ok(value)
}

/// Parses one stdin line, runs it, and renders the response envelope.
pub fn handle_line(session: &mut SessionState, line: &str) -> String {
    let result = serde_json::from_str::<Command>(line)
        .map_err(ApiError::from)
        .and_then(|command| dispatch(session, command));

    if let Err(err) = &result {
        warn!(code = ?err.code, message = %err.message, "command failed");
    }

    let response = Response::from_result(result);
    render(&response).unwrap_or_else(|e| {
        warn!(error = %e, "failed to render response");
        let fallback = Response::from_result(Err(ApiError::internal(e.to_string())));
        render(&fallback).unwrap_or_default()
    })
}

fn render(response: &Response) -> Result<String, serde_json::Error> {
    serde_json::to_string(response)
}
