use rtimesheet::errors::AppError;
use rtimesheet::models::{DayEntry, HourField, Settings, TimeLedger};
use rtimesheet::utils::number::parse_or_zero;

#[test]
fn test_set_hours_creates_entry() {
    let mut ledger = TimeLedger::new();

    let stored = ledger
        .set_hours("2025-03-10", HourField::Normal, "8")
        .unwrap();

    assert_eq!(stored, Some(DayEntry::new(8.0, 0.0, 0.0)));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.get("2025-03-10").unwrap().normal, 8.0);
}

#[test]
fn test_set_hours_updates_single_field() {
    let mut ledger = TimeLedger::new();
    ledger.set_hours("2025-03-10", HourField::Normal, "8").unwrap();
    ledger.set_hours("2025-03-10", HourField::Ot100, "1.5").unwrap();

    let e = ledger.get("2025-03-10").unwrap();
    assert_eq!(*e, DayEntry::new(8.0, 0.0, 1.5));
}

#[test]
fn test_zeroing_all_fields_prunes_entry() {
    let mut ledger = TimeLedger::new();
    ledger.set_hours("2025-03-10", HourField::Normal, "8").unwrap();
    ledger.set_hours("2025-03-10", HourField::Ot50, "2").unwrap();

    ledger.set_hours("2025-03-10", HourField::Normal, "0").unwrap();
    assert!(ledger.contains("2025-03-10"), "ot50 still set");

    let stored = ledger.set_hours("2025-03-10", HourField::Ot50, "0").unwrap();
    assert_eq!(stored, None);
    assert!(!ledger.contains("2025-03-10"));
    assert!(ledger.is_empty());
}

#[test]
fn test_pruning_is_idempotent() {
    let mut ledger = TimeLedger::new();
    ledger.set_hours("2025-03-10", HourField::Normal, "4").unwrap();
    ledger.set_hours("2025-03-10", HourField::Normal, "0").unwrap();
    let after_first = ledger.clone();

    ledger.set_hours("2025-03-10", HourField::Normal, "0").unwrap();
    assert_eq!(ledger, after_first);
    assert!(ledger.is_empty());
}

#[test]
fn test_zero_on_untouched_day_is_noop() {
    let mut ledger = TimeLedger::new();
    let stored = ledger.set_hours("2025-03-11", HourField::Ot50, "").unwrap();
    assert_eq!(stored, None);
    assert!(ledger.is_empty());
}

#[test]
fn test_negative_hours_rejected_without_mutation() {
    let mut ledger = TimeLedger::new();
    ledger.set_hours("2025-03-10", HourField::Normal, "8").unwrap();
    let before = ledger.clone();

    let err = ledger
        .set_hours("2025-03-10", HourField::Normal, "-1")
        .unwrap_err();
    assert!(matches!(err, AppError::NegativeHours));
    assert!(err.is_validation());
    assert_eq!(ledger, before);

    let err = ledger
        .set_hours("2025-03-12", HourField::Ot50, "-0.5")
        .unwrap_err();
    assert!(matches!(err, AppError::NegativeHours));
    assert!(!ledger.contains("2025-03-12"));
}

#[test]
fn test_unparsable_value_counts_as_zero() {
    assert_eq!(parse_or_zero("abc"), 0.0);
    assert_eq!(parse_or_zero(""), 0.0);
    assert_eq!(parse_or_zero("NaN"), 0.0);
    assert_eq!(parse_or_zero("-0"), 0.0);
    assert_eq!(parse_or_zero("  7.25"), 7.25);
    assert_eq!(parse_or_zero("8h"), 8.0);
    assert_eq!(parse_or_zero(".5"), 0.5);
    assert_eq!(parse_or_zero("1e2"), 100.0);

    let mut ledger = TimeLedger::new();
    ledger.set_hours("2025-03-10", HourField::Normal, "8").unwrap();
    ledger.set_hours("2025-03-10", HourField::Normal, "oops").unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn test_non_finite_input_counts_as_zero() {
    assert_eq!(parse_or_zero("Infinity"), 0.0);
    assert_eq!(parse_or_zero("-Infinity"), 0.0);
    assert_eq!(parse_or_zero("1e400"), 0.0);
    assert_eq!(parse_or_zero("-1e400"), 0.0);
    assert_eq!(parse_or_zero("inf"), 0.0);

    let mut ledger = TimeLedger::new();
    let stored = ledger
        .set_hours("2025-01-06", HourField::Normal, "1e400")
        .unwrap();
    assert_eq!(stored, None);
    assert!(ledger.is_empty());

    ledger.set_hours("2025-01-06", HourField::Ot50, "2").unwrap();
    ledger
        .set_hours("2025-01-06", HourField::Ot100, "Infinity")
        .unwrap();
    assert_eq!(
        ledger.get("2025-01-06"),
        Some(&DayEntry::new(0.0, 2.0, 0.0))
    );
}

#[test]
fn test_non_finite_rate_and_tax_count_as_zero() {
    let mut s = Settings::default();
    s.set_rate("12").unwrap();
    assert_eq!(s.set_rate("1e400").unwrap(), 0.0);
    assert_eq!(s.hourly_rate, 0.0);
    assert_eq!(s.set_rate("Infinity").unwrap(), 0.0);

    s.set_tax_rate("20").unwrap();
    assert_eq!(s.set_tax_rate("1e400").unwrap(), 0.0);
    assert_eq!(s.tax_rate, 0.0);
    assert!(s.hourly_rate.is_finite() && s.tax_rate.is_finite());
}

#[test]
fn test_filter_by_year_and_month() {
    let mut ledger = TimeLedger::new();
    ledger.set_hours("2024-12-31", HourField::Normal, "1").unwrap();
    ledger.set_hours("2025-01-02", HourField::Normal, "2").unwrap();
    ledger.set_hours("2025-01-20", HourField::Normal, "3").unwrap();
    ledger.set_hours("2025-02-03", HourField::Normal, "4").unwrap();
    ledger.set_hours("not-a-date", HourField::Normal, "5").unwrap();

    assert_eq!(ledger.len(), 5);
    assert_eq!(ledger.dated_entries().count(), 4);
    assert_eq!(ledger.entries_in_year(2025).count(), 3);
    assert_eq!(ledger.entries_in_month(2025, 1).count(), 2);
    assert_eq!(ledger.entries_in_month(2024, 12).count(), 1);

    let keys: Vec<&str> = ledger.iter().map(|(k, _)| k).collect();
    assert_eq!(keys.first(), Some(&"2024-12-31"));
}

#[test]
fn test_from_entries_drops_empty_days() {
    let ledger = TimeLedger::from_entries([
        ("2025-01-01".to_string(), DayEntry::default()),
        ("2025-01-02".to_string(), DayEntry::new(0.0, 0.0, 3.0)),
    ]);
    assert_eq!(ledger.len(), 1);
    assert!(ledger.contains("2025-01-02"));
}

#[test]
fn test_rate_validation() {
    let mut s = Settings::default();
    assert_eq!(s.set_rate("25.5").unwrap(), 25.5);
    assert!(matches!(s.set_rate("-1"), Err(AppError::NegativeRate)));
    assert_eq!(s.hourly_rate, 25.5);

    assert_eq!(s.set_rate("junk").unwrap(), 0.0);
    assert_eq!(s.hourly_rate, 0.0);
}

#[test]
fn test_tax_accepts_closed_interval_only() {
    let mut s = Settings::default();
    assert_eq!(s.set_tax_rate("0").unwrap(), 0.0);
    assert_eq!(s.set_tax_rate("100").unwrap(), 100.0);
    assert_eq!(s.set_tax_rate("42.5").unwrap(), 42.5);

    assert!(matches!(
        s.set_tax_rate("100.0001"),
        Err(AppError::TaxRateOutOfRange)
    ));
    assert!(matches!(
        s.set_tax_rate("-0.0001"),
        Err(AppError::TaxRateOutOfRange)
    ));
    assert_eq!(s.tax_rate, 42.5);
}

#[test]
fn test_settings_defaults() {
    let s = Settings::default();
    assert_eq!(s.hourly_rate, 0.0);
    assert_eq!(s.tax_rate, 0.0);
    assert_eq!(s.currency, "USD");
}
