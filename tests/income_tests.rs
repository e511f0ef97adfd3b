// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;

use rust_decimal::Decimal;

use spendbook::errors::LedgerError;
use spendbook::income::IncomeBook;
use spendbook::models::Month;

fn month(s: &str) -> Month {
    s.parse().unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn exact_month_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = IncomeBook::load(dir.path().join("income.json")).unwrap();
    book.set("R$", month("2024-01"), dec("5000")).unwrap();
    assert_eq!(book.income_for("R$", month("2024-01")).unwrap(), dec("5000"));
}

#[test]
fn carry_forward_fills_the_gap_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("income.json");
    let mut book = IncomeBook::load(path.clone()).unwrap();
    book.set("R$", month("2024-01"), dec("5000")).unwrap();

    assert_eq!(book.income_for("R$", month("2024-03")).unwrap(), dec("5000"));

    // the carried value was written back under 2024-03
    let mut reloaded = IncomeBook::load(path).unwrap();
    assert_eq!(
        reloaded.income_for("R$", month("2024-03")).unwrap(),
        dec("5000")
    );
    let entries = reloaded.entries();
    assert!(entries.contains(&("R$", month("2024-03"), dec("5000"))));
}

#[test]
fn carry_forward_picks_the_nearest_prior_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = IncomeBook::load(dir.path().join("income.json")).unwrap();
    book.set("R$", month("2024-01"), dec("5000")).unwrap();
    book.set("R$", month("2024-04"), dec("6000")).unwrap();

    assert_eq!(book.income_for("R$", month("2024-06")).unwrap(), dec("6000"));
    assert_eq!(book.income_for("R$", month("2024-02")).unwrap(), dec("5000"));
}

#[test]
fn unconfigured_currency_or_too_early_month_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = IncomeBook::load(dir.path().join("income.json")).unwrap();
    assert!(matches!(
        book.income_for("R$", month("2024-01")).unwrap_err(),
        LedgerError::NoIncomeConfigured { .. }
    ));

    book.set("R$", month("2024-05"), dec("5000")).unwrap();
    assert!(matches!(
        book.income_for("R$", month("2024-01")).unwrap_err(),
        LedgerError::NoIncomeConfigured { .. }
    ));
}

#[test]
fn zero_income_means_inactive_tracking() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = IncomeBook::load(dir.path().join("income.json")).unwrap();
    book.set("USD", month("2024-02"), dec("0")).unwrap();
    assert!(matches!(
        book.income_for("USD", month("2024-02")).unwrap_err(),
        LedgerError::NoIncomeConfigured { .. }
    ));
    assert!(matches!(
        book.income_for("USD", month("2024-03")).unwrap_err(),
        LedgerError::NoIncomeConfigured { .. }
    ));
}

#[test]
fn failed_write_back_does_not_poison_the_in_memory_table() {
    let dir = tempfile::tempdir().unwrap();
    let inc_dir = dir.path().join("inc");
    fs::create_dir(&inc_dir).unwrap();
    let path = inc_dir.join("income.json");
    fs::write(&path, r#"{"R$":{"2024-01":"5000"}}"#).unwrap();
    let mut book = IncomeBook::load(path.clone()).unwrap();

    // a plain file now blocks the directory path, so saving fails
    fs::remove_file(&path).unwrap();
    fs::remove_dir(&inc_dir).unwrap();
    fs::write(&inc_dir, "").unwrap();

    let err = book.income_for("R$", month("2024-03")).unwrap_err();
    assert!(matches!(err, LedgerError::Storage { .. }));
    assert!(!book
        .entries()
        .contains(&("R$", month("2024-03"), dec("5000"))));

    // once storage is back the same lookup carries forward cleanly
    fs::remove_file(&inc_dir).unwrap();
    fs::create_dir(&inc_dir).unwrap();
    assert_eq!(book.income_for("R$", month("2024-03")).unwrap(), dec("5000"));
    let reloaded = IncomeBook::load(path).unwrap();
    assert!(reloaded
        .entries()
        .contains(&("R$", month("2024-03"), dec("5000"))));
}

#[test]
fn latest_returns_the_last_configured_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = IncomeBook::load(dir.path().join("income.json")).unwrap();
    book.set("R$", month("2024-01"), dec("5000")).unwrap();
    book.set("R$", month("2024-05"), dec("7000")).unwrap();
    assert_eq!(book.latest("R$").unwrap(), (month("2024-05"), dec("7000")));
}
