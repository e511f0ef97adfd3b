// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use spendbook::config::Config;
use spendbook::errors::LedgerError;
use spendbook::models::Category;
use spendbook::plan;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn single_installment_keeps_exact_date() {
    let cfg = Config::default();
    let rows = plan::build(
        &cfg,
        "popcorn",
        Category::Food,
        dec("3.25"),
        1,
        None,
        None,
        date("2024-03-15"),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, dec("3.25"));
    assert_eq!(rows[0].date, date("2024-03-15"));
    assert_eq!(rows[0].currency, "R$");
    assert_eq!(rows[0].description, "NO DESCRIPTION");
}

#[test]
fn installments_split_evenly_and_post_on_the_first() {
    let cfg = Config::default();
    let rows = plan::build(
        &cfg,
        "sneakers",
        Category::Clothes,
        dec("300"),
        3,
        None,
        None,
        date("2024-01-10"),
    )
    .unwrap();
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.amount, dec("100"));
    }
    assert_eq!(rows[0].date, date("2024-01-10"));
    assert_eq!(rows[1].date, date("2024-02-01"));
    assert_eq!(rows[2].date, date("2024-03-01"));
}

#[test]
fn rounding_residue_goes_to_the_last_installment() {
    let cfg = Config::default();
    let rows = plan::build(
        &cfg,
        "course",
        Category::Study,
        dec("100"),
        3,
        None,
        None,
        date("2024-01-05"),
    )
    .unwrap();
    assert_eq!(rows[0].amount, dec("33.33"));
    assert_eq!(rows[1].amount, dec("33.33"));
    assert_eq!(rows[2].amount, dec("33.34"));
    let total: Decimal = rows.iter().map(|r| r.amount).sum();
    assert_eq!(total, dec("100"));
}

#[test]
fn residue_never_drives_an_installment_nonpositive() {
    let cfg = Config::default();
    let rows = plan::build(
        &cfg,
        "tiny",
        Category::Food,
        dec("0.14"),
        9,
        None,
        None,
        date("2024-01-05"),
    )
    .unwrap();
    assert!(rows.iter().all(|r| r.amount > Decimal::ZERO));
    assert_eq!(rows[0].amount, dec("0.01"));
    assert_eq!(rows[8].amount, dec("0.06"));
    let total: Decimal = rows.iter().map(|r| r.amount).sum();
    assert_eq!(total, dec("0.14"));

    let rows = plan::build(
        &cfg,
        "small",
        Category::Food,
        dec("0.06"),
        4,
        None,
        None,
        date("2024-01-05"),
    )
    .unwrap();
    assert!(rows.iter().all(|r| r.amount > Decimal::ZERO));
    assert_eq!(rows[3].amount, dec("0.03"));
}

#[test]
fn amount_too_small_to_split_is_rejected() {
    let cfg = Config::default();
    let err = plan::build(
        &cfg,
        "dust",
        Category::Food,
        dec("0.01"),
        9,
        None,
        None,
        date("2024-01-05"),
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "amount", .. }));
}

#[test]
fn installment_dates_roll_over_the_year() {
    let cfg = Config::default();
    let rows = plan::build(
        &cfg,
        "tv",
        Category::Others,
        dec("900"),
        3,
        None,
        None,
        date("2024-11-20"),
    )
    .unwrap();
    assert_eq!(rows[1].date, date("2024-12-01"));
    assert_eq!(rows[2].date, date("2025-01-01"));
}

#[test]
fn rejects_non_positive_amount() {
    let cfg = Config::default();
    let err = plan::build(
        &cfg,
        "bad",
        Category::Food,
        dec("0"),
        1,
        None,
        None,
        date("2024-01-01"),
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "amount", .. }));
}

#[test]
fn rejects_unsupported_currency_and_empty_name() {
    let cfg = Config::default();
    let err = plan::build(
        &cfg,
        "imported",
        Category::Food,
        dec("10"),
        1,
        None,
        Some("GBP".to_string()),
        date("2024-01-01"),
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "currency", .. }));

    let err = plan::build(
        &cfg,
        "   ",
        Category::Food,
        dec("10"),
        1,
        None,
        None,
        date("2024-01-01"),
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "name", .. }));
}

#[test]
fn rejects_zero_installments() {
    let cfg = Config::default();
    let err = plan::build(
        &cfg,
        "zero",
        Category::Food,
        dec("10"),
        0,
        None,
        None,
        date("2024-01-01"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Validation { field: "installments", .. }
    ));
}
