// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::config::Config;
use crate::income::IncomeBook;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, parse_month, pretty_table};

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(cfg, sub)?,
        Some(("get", sub)) => get(cfg, sub)?,
        Some(("list", sub)) => list(cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn currency_arg(cfg: &Config, sub: &clap::ArgMatches) -> String {
    sub.get_one::<String>("currency")
        .cloned()
        .unwrap_or_else(|| cfg.default_currency.clone())
}

fn set(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let currency = currency_arg(cfg, sub);
    let mut book = IncomeBook::load(cfg.income_path())?;
    book.set(&currency, month, amount)?;
    println!("Income set for {} / {} = {}", month, currency, amount);
    Ok(())
}

fn get(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let currency = currency_arg(cfg, sub);
    let mut book = IncomeBook::load(cfg.income_path())?;
    let (month, amount) = match sub.get_one::<String>("month") {
        Some(s) => {
            let month = parse_month(s)?;
            (month, book.income_for(&currency, month)?)
        }
        None => book.latest(&currency)?,
    };
    let data = json!({ "month": month, "currency": currency, "amount": amount });
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{} for {}", fmt_money(&amount, &currency), month);
    }
    Ok(())
}

fn list(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let book = IncomeBook::load(cfg.income_path())?;
    let entries = book.entries();
    let data: Vec<_> = entries
        .iter()
        .map(|(ccy, m, v)| json!({ "currency": ccy, "month": m, "amount": v }))
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = entries
            .iter()
            .map(|(ccy, m, v)| vec![ccy.to_string(), m.to_string(), v.to_string()])
            .collect();
        println!("{}", pretty_table(&["Currency", "Month", "Income"], rows));
    }
    Ok(())
}
