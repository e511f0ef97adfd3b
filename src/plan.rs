// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction builder: validates one logical expense and expands it
//! into an immutable sequence of per-month installment rows, before
//! any I/O happens.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::Config;
use crate::errors::LedgerError;
use crate::models::{Category, Month, Transaction};

/// Expand an expense into `installments` rows.
///
/// The first installment keeps the requested date; every later one
/// posts on the 1st of its billing month. Each row carries
/// `total / installments` truncated to two decimals, with the rounding
/// residue added to the last row so the plan sums exactly to `total`
/// and every row stays positive.
pub fn build(
    cfg: &Config,
    name: &str,
    category: Category,
    total: Decimal,
    installments: u32,
    description: Option<String>,
    currency: Option<String>,
    start: NaiveDate,
) -> Result<Vec<Transaction>, LedgerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::Validation {
            field: "name",
            reason: "must not be empty".to_string(),
        });
    }
    if total <= Decimal::ZERO {
        return Err(LedgerError::Validation {
            field: "amount",
            reason: format!("{} is not positive", total),
        });
    }
    if installments == 0 {
        return Err(LedgerError::Validation {
            field: "installments",
            reason: "must be at least 1".to_string(),
        });
    }
    let currency = currency.unwrap_or_else(|| cfg.default_currency.clone());
    if !cfg.supports(&currency) {
        return Err(LedgerError::Validation {
            field: "currency",
            reason: format!(
                "'{}' is not one of {}",
                currency,
                cfg.supported_currencies.join(", ")
            ),
        });
    }
    let description = description.unwrap_or_else(|| cfg.default_description.clone());

    // Truncate toward zero so the residue on the last installment is
    // never negative; a per-installment share of zero means the amount
    // cannot split into that many positive rows.
    let per = (total / Decimal::from(installments)).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    if installments > 1 && per <= Decimal::ZERO {
        return Err(LedgerError::Validation {
            field: "amount",
            reason: format!(
                "{} cannot be split into {} positive installments",
                total, installments
            ),
        });
    }
    let last = total - per * Decimal::from(installments - 1);

    let mut rows = Vec::with_capacity(installments as usize);
    let mut month = Month::from_date(start);
    for k in 0..installments {
        let date = if k == 0 {
            start
        } else {
            month = month.succ();
            month.first_day()
        };
        let amount = if k + 1 == installments { last } else { per };
        rows.push(Transaction {
            name: name.to_string(),
            category,
            amount,
            currency: currency.clone(),
            description: description.clone(),
            date,
        });
    }
    Ok(rows)
}
