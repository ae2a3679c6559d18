//! The combined ledger + settings value that is persisted and transferred.
//!
//! Wire shape:
//! `{"hourlyRate": n, "hours": {"YYYY-MM-DD": {"normal", "ot50", "ot100"}}, "taxRate": n, "currency": "USD"}`

use crate::models::currency::DEFAULT_CURRENCY;
use crate::models::day_entry::{DayEntry, HourField};
use crate::models::ledger::TimeLedger;
use crate::models::settings::Settings;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub ledger: TimeLedger,
    pub settings: Settings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotWire<'a> {
    hourly_rate: f64,
    hours: &'a TimeLedger,
    tax_rate: f64,
    currency: &'a str,
}

/// Why a payload could not be turned into a [`Snapshot`].
#[derive(Error, Debug)]
pub enum SnapshotParseError {
    #[error("invalid JSON ({0})")]
    Json(#[from] serde_json::Error),

    #[error("top-level value is not an object")]
    NotAnObject,
}

impl Snapshot {
    pub fn new(ledger: TimeLedger, settings: Settings) -> Self {
        Self { ledger, settings }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.wire())
    }

    fn wire(&self) -> SnapshotWire<'_> {
        SnapshotWire {
            hourly_rate: self.settings.hourly_rate,
            hours: &self.ledger,
            tax_rate: self.settings.tax_rate,
            currency: &self.settings.currency,
        }
    }

    /// Tolerant decoding shared by `load` and `import`.
    ///
    /// The payload must be a JSON object. Inside it nothing is fatal:
    /// - `hourlyRate` / `taxRate` that are missing, zero or not numbers → 0
    /// - `currency` missing, empty or not a string → `USD`
    /// - `hours` that is not an object → empty ledger
    /// - a day that is not an object is dropped, a missing or non-numeric
    ///   hour field is 0, and all-zero days are pruned
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SnapshotParseError> {
        let value: Value = serde_json::from_slice(bytes)?;
        let Value::Object(obj) = value else {
            return Err(SnapshotParseError::NotAnObject);
        };

        let settings = Settings {
            hourly_rate: number_or_zero(obj.get("hourlyRate")),
            tax_rate: number_or_zero(obj.get("taxRate")),
            currency: match obj.get("currency") {
                Some(Value::String(s)) if !s.is_empty() => s.clone(),
                _ => DEFAULT_CURRENCY.to_string(),
            },
        };

        let ledger = match obj.get("hours") {
            Some(Value::Object(days)) => TimeLedger::from_entries(
                days.iter()
                    .filter_map(|(k, v)| v.as_object().map(|o| (k.clone(), day_from_object(o)))),
            ),
            _ => TimeLedger::new(),
        };

        Ok(Self { ledger, settings })
    }
}

fn number_or_zero(v: Option<&Value>) -> f64 {
    v.and_then(Value::as_f64).unwrap_or(0.0)
}

fn day_from_object(obj: &Map<String, Value>) -> DayEntry {
    let mut entry = DayEntry::default();
    for field in HourField::ALL {
        entry.set(field, number_or_zero(obj.get(field.as_str())));
    }
    entry
}
