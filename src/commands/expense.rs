// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::agg;
use crate::config::Config;
use crate::errors::LedgerError;
use crate::income::IncomeBook;
use crate::models::Category;
use crate::plan;
use crate::store::LedgerStore;
use crate::utils::{TX_HEADERS, fmt_money, parse_date, parse_decimal, pretty_table, tx_rows};

/// Build the installment plan, post each row in ascending date order,
/// then show the resulting month ledger and what is left per currency.
/// A failure at installment k leaves installments before k persisted
/// and reports k in the error.
pub fn add(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let installments = *sub.get_one::<u32>("installments").unwrap();
    let description = sub.get_one::<String>("description").cloned();
    let currency = sub.get_one::<String>("currency").cloned();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let rows = plan::build(
        cfg,
        name,
        category,
        amount,
        installments,
        description,
        currency,
        date,
    )?;
    let store = LedgerStore::new(cfg);
    for (index, tx) in rows.iter().enumerate() {
        store.append(tx).map_err(|e| LedgerError::Installment {
            index,
            date: tx.date,
            source: Box::new(e),
        })?;
        println!(
            "Recorded {} on {} ({}/{})",
            fmt_money(&tx.amount, &tx.currency),
            tx.date,
            index + 1,
            rows.len()
        );
    }

    let first_month = rows[0].month();
    let ledger = store.read(first_month)?;
    println!(
        "==> Expense added to {}",
        store.ledger_path(first_month).display()
    );
    println!("{}", pretty_table(&TX_HEADERS, tx_rows(&ledger)));

    let mut income = IncomeBook::load(cfg.income_path())?;
    for ccy in &cfg.supported_currencies {
        match income.income_for(ccy, first_month) {
            Ok(ceiling) => {
                let spent = agg::non_savings_spend(&agg::filter_currency(&ledger, ccy));
                println!("==> You have {} left.", fmt_money(&(ceiling - spent), ccy));
            }
            // inactive currency for this month: nothing to report
            Err(LedgerError::NoIncomeConfigured { .. }) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
