use serde::{Deserialize, Serialize};

/// Multiplier applied to the base rate for 50% overtime hours.
pub const OT50_MULTIPLIER: f64 = 1.5;
/// Multiplier applied to the base rate for 100% overtime hours.
pub const OT100_MULTIPLIER: f64 = 2.0;

/// Hours recorded for a single calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub normal: f64,
    pub ot50: f64,
    pub ot100: f64,
}

impl DayEntry {
    pub fn new(normal: f64, ot50: f64, ot100: f64) -> Self {
        Self {
            normal,
            ot50,
            ot100,
        }
    }

    pub fn get(&self, field: HourField) -> f64 {
        match field {
            HourField::Normal => self.normal,
            HourField::Ot50 => self.ot50,
            HourField::Ot100 => self.ot100,
        }
    }

    pub fn set(&mut self, field: HourField, value: f64) {
        match field {
            HourField::Normal => self.normal = value,
            HourField::Ot50 => self.ot50 = value,
            HourField::Ot100 => self.ot100 = value,
        }
    }

    /// An entry whose three fields are exactly zero carries no information
    /// and is never kept in the ledger.
    pub fn is_empty(&self) -> bool {
        self.normal == 0.0 && self.ot50 == 0.0 && self.ot100 == 0.0
    }

    /// Gross pay for this day at the given base hourly rate.
    pub fn gross(&self, rate: f64) -> f64 {
        (self.normal * rate)
            + (self.ot50 * rate * OT50_MULTIPLIER)
            + (self.ot100 * rate * OT100_MULTIPLIER)
    }
}

/// The three hour categories of a [`DayEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourField {
    Normal,
    Ot50,
    Ot100,
}

impl HourField {
    pub const ALL: [HourField; 3] = [HourField::Normal, HourField::Ot50, HourField::Ot100];

    /// Key used in the persisted JSON snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            HourField::Normal => "normal",
            HourField::Ot50 => "ot50",
            HourField::Ot100 => "ot100",
        }
    }
}
