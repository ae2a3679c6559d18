pub mod currency;
pub mod day_entry;
pub mod ledger;
pub mod settings;
pub mod snapshot;

pub use currency::Currency;
pub use day_entry::{DayEntry, HourField};
pub use ledger::TimeLedger;
pub use settings::Settings;
pub use snapshot::Snapshot;
