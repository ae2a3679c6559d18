//! Timesheet state and its validated mutations.
//!
//! Every successful mutation produces a new [`Snapshot`], replaces the current
//! one and persists it. Failed validations leave the state untouched. A
//! failed save is reported through the status line but never rolls back the
//! in-memory state, which stays authoritative.

use crate::core::calculator::{Totals, WeekWindow, totals_for};
use crate::db::store::{STORAGE_KEY, SnapshotStore};
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::{DayEntry, HourField};
use crate::models::ledger::TimeLedger;
use crate::models::settings::Settings;
use crate::models::snapshot::Snapshot;
use crate::ui::status::{DEFAULT_STATUS_TTL_SECS, StatusKind, StatusMessage};
use tracing::{debug, warn};

pub const MSG_LOAD_FAILED: &str = "Could not load saved data. Starting fresh.";
pub const MSG_SAVE_FAILED: &str = "Could not save data. Storage might be full.";
pub const MSG_IMPORTED: &str = "Data imported successfully";
pub const MSG_CLEARED: &str = "All saved data has been cleared";

/// How the initial read of the store went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored snapshot was decoded.
    Loaded,
    /// Nothing stored yet; defaults in use.
    Empty,
    /// Stored data was unreadable; defaults in use.
    Recovered,
}

pub struct Timesheet<S: SnapshotStore> {
    store: S,
    snapshot: Snapshot,
    status: Option<StatusMessage>,
    status_ttl_secs: i64,
    load_outcome: LoadOutcome,
}

impl<S: SnapshotStore> Timesheet<S> {
    /// Read the persisted snapshot from `store`.
    ///
    /// Never fails: absent data yields defaults, unreadable data yields
    /// defaults plus a "could not load" status, and the broken value is
    /// removed from the store.
    pub fn load(store: S) -> Self {
        Self::load_with_ttl(store, DEFAULT_STATUS_TTL_SECS)
    }

    pub fn load_with_ttl(mut store: S, status_ttl_secs: i64) -> Self {
        let (snapshot, outcome) = match store.read(STORAGE_KEY) {
            Ok(None) => (Snapshot::default(), LoadOutcome::Empty),
            Ok(Some(raw)) => match Snapshot::from_json_slice(raw.as_bytes()) {
                Ok(s) => (s, LoadOutcome::Loaded),
                Err(e) => {
                    warn!(error = %e, "stored snapshot is unreadable, starting fresh");
                    if let Err(e) = store.remove(STORAGE_KEY) {
                        warn!(error = %e, "could not remove unreadable snapshot");
                    }
                    (Snapshot::default(), LoadOutcome::Recovered)
                }
            },
            Err(e) => {
                warn!(error = %e, "could not read snapshot store");
                (Snapshot::default(), LoadOutcome::Recovered)
            }
        };

        let mut ts = Self {
            store,
            snapshot,
            status: None,
            status_ttl_secs,
            load_outcome: outcome,
        };

        if outcome == LoadOutcome::Recovered {
            ts.notify(StatusKind::Warning, MSG_LOAD_FAILED);
        }

        debug!(entries = ts.snapshot.ledger.len(), ?outcome, "timesheet loaded");
        ts
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn ledger(&self) -> &TimeLedger {
        &self.snapshot.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.snapshot.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Latest status, whether or not it has expired.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Latest status if still inside its visibility window.
    pub fn visible_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref().filter(|s| s.is_visible())
    }

    /// Totals for `week`, recomputed from the current state.
    pub fn totals(&self, week: &WeekWindow) -> Totals {
        totals_for(&self.snapshot.ledger, &self.snapshot.settings, week)
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Set one hour field of `date_key`. See [`TimeLedger::set_hours`].
    pub fn set_hours(
        &mut self,
        date_key: &str,
        field: HourField,
        raw: &str,
    ) -> AppResult<Option<DayEntry>> {
        let mut next = self.snapshot.clone();
        let stored = self.validated(next.ledger.set_hours(date_key, field, raw))?;

        let message = match &stored {
            Some(e) => format!(
                "{}={} (normal {}, ot50 {}, ot100 {})",
                field.as_str(),
                e.get(field),
                e.normal,
                e.ot50,
                e.ot100
            ),
            None => "entry removed".to_string(),
        };
        self.commit(next, "set_hours", date_key, &message);
        Ok(stored)
    }

    pub fn set_rate(&mut self, raw: &str) -> AppResult<f64> {
        let mut next = self.snapshot.clone();
        let rate = self.validated(next.settings.set_rate(raw))?;
        self.commit(next, "set_rate", "", &format!("hourly rate = {rate}"));
        Ok(rate)
    }

    pub fn set_tax_rate(&mut self, raw: &str) -> AppResult<f64> {
        let mut next = self.snapshot.clone();
        let tax = self.validated(next.settings.set_tax_rate(raw))?;
        self.commit(next, "set_tax", "", &format!("tax rate = {tax}%"));
        Ok(tax)
    }

    /// Replace the currency code. The caller picks from the supported set.
    pub fn set_currency(&mut self, code: &str) {
        let mut next = self.snapshot.clone();
        next.settings.set_currency(code);
        self.commit(next, "set_currency", code, "currency changed");
    }

    /// Drop every entry, reset settings and erase the persisted snapshot.
    /// Destructive: confirmation is the caller's job.
    pub fn clear(&mut self) {
        self.snapshot = Snapshot::default();

        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warn!(error = %e, "could not erase stored snapshot");
            self.notify(StatusKind::Warning, MSG_SAVE_FAILED);
            return;
        }

        self.audit("clear", "", "all data cleared");
        self.notify(StatusKind::Success, MSG_CLEARED);
    }

    // ---------------------------
    // Transfer
    // ---------------------------

    /// Serialized snapshot, same shape as the persisted value.
    pub fn export_snapshot(&self) -> AppResult<Vec<u8>> {
        Ok(self.snapshot.to_json()?.into_bytes())
    }

    /// Replace the whole state with the snapshot in `bytes`.
    ///
    /// A payload that is not a JSON object is rejected and nothing changes.
    pub fn import_snapshot(&mut self, bytes: &[u8]) -> AppResult<()> {
        let parsed = Snapshot::from_json_slice(bytes)
            .map_err(|e| AppError::InvalidImport(format!("Invalid JSON file ({e})")));
        let next = self.validated(parsed)?;

        let count = next.ledger.len();
        self.commit(next, "import", "", &format!("{count} day(s) imported"));
        if !self.save_failed() {
            self.notify(StatusKind::Success, MSG_IMPORTED);
        }
        Ok(())
    }

    /// Write the current snapshot to the store.
    pub fn save(&mut self) -> AppResult<()> {
        let json = self.snapshot.to_json()?;
        self.store.write(STORAGE_KEY, &json)
    }

    // ---------------------------
    // Internals
    // ---------------------------

    fn validated<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        if let Err(e) = &result {
            debug!(error = %e, "mutation rejected");
            self.notify(StatusKind::Error, e.to_string());
        }
        result
    }

    fn commit(&mut self, next: Snapshot, operation: &str, target: &str, message: &str) {
        self.snapshot = next;
        self.status = None;

        match self.save() {
            Ok(()) => self.audit(operation, target, message),
            Err(e) => {
                warn!(error = %e, operation, "snapshot not saved");
                self.notify(StatusKind::Warning, MSG_SAVE_FAILED);
            }
        }
    }

    fn save_failed(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| s.text == MSG_SAVE_FAILED)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.audit(operation, target, message) {
            warn!(error = %e, "failed to write internal log");
        }
    }

    fn notify(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(kind, text, self.status_ttl_secs));
    }
}
