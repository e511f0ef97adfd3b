// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::agg::{self, Summary};
use crate::config::Config;
use crate::income::IncomeBook;
use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(cfg, sub)?,
        Some(("range", sub)) => range(cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn currency_arg(cfg: &Config, sub: &clap::ArgMatches) -> String {
    sub.get_one::<String>("currency")
        .cloned()
        .unwrap_or_else(|| cfg.default_currency.clone())
}

fn month(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let currency = currency_arg(cfg, sub);
    let store = LedgerStore::new(cfg);
    let mut income = IncomeBook::load(cfg.income_path())?;
    let summary = agg::monthly_summary(&store, &mut income, month, &currency)?;
    render(&summary, sub.get_flag("json"), sub.get_flag("jsonl"))
}

fn range(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let from = parse_month(sub.get_one::<String>("from").unwrap())?;
    let to = parse_month(sub.get_one::<String>("to").unwrap())?;
    let currency = currency_arg(cfg, sub);
    let store = LedgerStore::new(cfg);
    let mut income = IncomeBook::load(cfg.income_path())?;
    let summary = agg::range_summary(&store, &mut income, from, to, &currency)?;
    render(&summary, sub.get_flag("json"), sub.get_flag("jsonl"))
}

fn render(s: &Summary, json_flag: bool, jsonl_flag: bool) -> Result<()> {
    if maybe_print_json(json_flag, jsonl_flag, s)? {
        return Ok(());
    }

    let line_rows = s
        .line_series
        .iter()
        .map(|d| vec![d.date.to_string(), d.category.clone(), d.amount.to_string()])
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Category", "Amount"], line_rows)
    );

    let cat_rows = s
        .category_totals
        .iter()
        .map(|c| vec![c.category.clone(), c.amount.round_dp(2).to_string()])
        .collect();
    println!("{}", pretty_table(&["Category", "Total"], cat_rows));

    match s.remaining {
        Some(left) if left < Decimal::ZERO => {
            println!("==> Over budget by {}.", fmt_money(&-left, &s.currency));
        }
        Some(left) => {
            println!("==> You have {} left.", fmt_money(&left, &s.currency));
        }
        None => {
            println!(
                "==> Remaining budget unknown: no income configured for {}.",
                s.currency
            );
        }
    }
    Ok(())
}
