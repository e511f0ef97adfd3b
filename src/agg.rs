// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation engine: grouped sums over ledger rows and the
//! synthetic "AMOUNT LEFT" pseudo-category (configured income minus
//! non-SAVINGS spend). Read-only apart from the income carry-forward
//! write-back.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::LedgerError;
use crate::income::IncomeBook;
use crate::models::{Category, Month, Transaction};
use crate::store::LedgerStore;

/// Label of the synthetic remaining-budget row, shown as a peer slice
/// alongside real categories.
pub const AMOUNT_LEFT: &str = "AMOUNT LEFT";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
}

/// The `{lineSeries, categorySums, remaining}` surface consumed by the
/// report command. `remaining` is `None` when no income resolves for
/// any month in the span; spend totals are still populated.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub currency: String,
    pub months: Vec<Month>,
    pub rows: Vec<Transaction>,
    pub line_series: Vec<DailyTotal>,
    pub category_totals: Vec<CategoryTotal>,
    pub spend: Decimal,
    pub budget: Option<Decimal>,
    pub remaining: Option<Decimal>,
}

pub fn filter_currency(rows: &[Transaction], currency: &str) -> Vec<Transaction> {
    rows.iter()
        .filter(|t| t.currency == currency)
        .cloned()
        .collect()
}

/// Per-category sums, sorted by category label for reproducible output.
pub fn sum_by_category(rows: &[Transaction]) -> Vec<CategoryTotal> {
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in rows {
        *map.entry(t.category.to_string()).or_insert(Decimal::ZERO) += t.amount;
    }
    map.into_iter()
        .map(|(category, amount)| CategoryTotal { category, amount })
        .collect()
}

/// Per-(date, category) sums, sorted by date then category.
pub fn sum_by_date_category(rows: &[Transaction]) -> Vec<DailyTotal> {
    let mut map: BTreeMap<(NaiveDate, String), Decimal> = BTreeMap::new();
    for t in rows {
        *map.entry((t.date, t.category.to_string()))
            .or_insert(Decimal::ZERO) += t.amount;
    }
    map.into_iter()
        .map(|((date, category), amount)| DailyTotal {
            date,
            category,
            amount,
        })
        .collect()
}

/// Spend for remaining-budget purposes: everything except SAVINGS.
pub fn non_savings_spend(rows: &[Transaction]) -> Decimal {
    rows.iter()
        .filter(|t| t.category != Category::Savings)
        .map(|t| t.amount)
        .sum()
}

/// Total budget over the spanned months. Months where the currency's
/// income is unset or inactive are excluded from the sum; `None` when
/// no month resolves at all.
pub fn budget_for(
    income: &mut IncomeBook,
    currency: &str,
    months: &[Month],
) -> Result<Option<Decimal>, LedgerError> {
    let mut total = None;
    for m in months {
        match income.income_for(currency, *m) {
            Ok(v) => *total.get_or_insert(Decimal::ZERO) += v,
            Err(LedgerError::NoIncomeConfigured { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Summarize currency-filtered rows over `months`. The synthetic
/// AMOUNT LEFT row joins the category totals only when a budget is
/// known; a negative amount means over budget.
pub fn summarize(
    rows: Vec<Transaction>,
    currency: &str,
    months: Vec<Month>,
    income: &mut IncomeBook,
) -> Result<Summary, LedgerError> {
    let spend = non_savings_spend(&rows);
    let budget = budget_for(income, currency, &months)?;
    let remaining = budget.map(|b| b - spend);

    let mut category_totals = sum_by_category(&rows);
    if let Some(left) = remaining {
        category_totals.push(CategoryTotal {
            category: AMOUNT_LEFT.to_string(),
            amount: left,
        });
        category_totals.sort_by(|a, b| a.category.cmp(&b.category));
    }

    Ok(Summary {
        currency: currency.to_string(),
        line_series: sum_by_date_category(&rows),
        category_totals,
        spend,
        budget,
        remaining,
        months,
        rows,
    })
}

/// Summary for a single month. A missing ledger file means an empty
/// row set, not an error.
pub fn monthly_summary(
    store: &LedgerStore,
    income: &mut IncomeBook,
    month: Month,
    currency: &str,
) -> Result<Summary, LedgerError> {
    let rows = if store.ledger_path(month).exists() {
        store.read(month)?
    } else {
        Vec::new()
    };
    summarize(filter_currency(&rows, currency), currency, vec![month], income)
}

/// Summary across an inclusive month range. Rows are concatenated in
/// chronological file order; the budget spans every month in the
/// range, present or not.
pub fn range_summary(
    store: &LedgerStore,
    income: &mut IncomeBook,
    from: Month,
    to: Month,
    currency: &str,
) -> Result<Summary, LedgerError> {
    let months = Month::range_inclusive(from, to);
    let mut rows = Vec::new();
    for m in &months {
        if store.ledger_path(*m).exists() {
            rows.extend(store.read(*m)?);
        }
    }
    summarize(filter_currency(&rows, currency), currency, months, income)
}
