// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Income ceilings per (month, currency), persisted as a JSON keyed
//! table: currency -> { "YYYY-MM": amount }.
//!
//! Ceilings are entered sparsely. A lookup for an unset month carries
//! the nearest prior entry forward and writes it back under the
//! looked-up month, so the record of what budget applied when is
//! preserved and the next lookup is a direct hit. A currency with no
//! resolvable entry, or an entry of zero, means budget tracking is
//! inactive for that month: `NoIncomeConfigured`, never a zero budget.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use crate::errors::LedgerError;
use crate::models::Month;

type Table = BTreeMap<String, BTreeMap<Month, Decimal>>;

pub struct IncomeBook {
    path: PathBuf,
    table: Table,
}

impl IncomeBook {
    pub fn load(path: PathBuf) -> Result<Self, LedgerError> {
        let table = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| LedgerError::storage(&path, e))?;
            serde_json::from_str(&text).map_err(|e| LedgerError::CorruptLedger {
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            Table::new()
        };
        Ok(IncomeBook { path, table })
    }

    fn save(&self) -> Result<(), LedgerError> {
        save_table(&self.path, &self.table)
    }

    pub fn set(&mut self, currency: &str, month: Month, amount: Decimal) -> Result<(), LedgerError> {
        self.table
            .entry(currency.to_string())
            .or_default()
            .insert(month, amount);
        self.save()
    }

    /// Budget ceiling for a month, with carry-forward write-back.
    pub fn income_for(&mut self, currency: &str, month: Month) -> Result<Decimal, LedgerError> {
        let no_income = || LedgerError::NoIncomeConfigured {
            currency: currency.to_string(),
        };
        let months = self.table.get(currency).ok_or_else(no_income)?;
        if let Some(v) = months.get(&month) {
            if *v == Decimal::ZERO {
                return Err(no_income());
            }
            return Ok(*v);
        }
        let carried = months
            .range(..=month)
            .next_back()
            .map(|(_, v)| *v)
            .ok_or_else(no_income)?;
        if carried == Decimal::ZERO {
            return Err(no_income());
        }
        // Persist first, commit to the in-memory table only once disk
        // has the entry, so a failed save cannot surface a value disk
        // never recorded.
        let mut updated = self.table.clone();
        if let Some(months) = updated.get_mut(currency) {
            months.insert(month, carried);
        }
        save_table(&self.path, &updated)?;
        self.table = updated;
        Ok(carried)
    }

    /// The chronologically last configured entry for a currency.
    pub fn latest(&self, currency: &str) -> Result<(Month, Decimal), LedgerError> {
        self.table
            .get(currency)
            .and_then(|months| months.iter().next_back())
            .map(|(m, v)| (*m, *v))
            .ok_or_else(|| LedgerError::NoIncomeConfigured {
                currency: currency.to_string(),
            })
    }

    /// All entries, for listings: (currency, month, amount) sorted by
    /// currency then month.
    pub fn entries(&self) -> Vec<(&str, Month, Decimal)> {
        self.table
            .iter()
            .flat_map(|(ccy, months)| {
                months.iter().map(move |(m, v)| (ccy.as_str(), *m, *v))
            })
            .collect()
    }
}

fn save_table(path: &Path, table: &Table) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LedgerError::storage(parent, e))?;
    }
    let text =
        serde_json::to_string_pretty(table).map_err(|e| LedgerError::CorruptLedger {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    fs::write(path, text).map_err(|e| LedgerError::storage(path, e))
}
