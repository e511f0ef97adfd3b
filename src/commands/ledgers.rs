// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::config::Config;
use crate::store::LedgerStore;
use crate::utils::{TX_HEADERS, maybe_print_json, parse_month, pretty_table, tx_rows};

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(cfg, sub)?,
        Some(("show", sub)) => show(cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let store = LedgerStore::new(cfg);
    let months = store.months()?;
    if !maybe_print_json(json_flag, jsonl_flag, &months)? {
        let rows = months
            .iter()
            .map(|m| vec![m.to_string(), store.ledger_path(*m).display().to_string()])
            .collect();
        println!("{}", pretty_table(&["Month", "File"], rows));
    }
    Ok(())
}

fn show(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let store = LedgerStore::new(cfg);
    if !store.ledger_path(month).exists() {
        return Err(anyhow!("No ledger for {}", month));
    }
    let rows = store.read(month)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        println!("{}", pretty_table(&TX_HEADERS, tx_rows(&rows)));
    }
    Ok(())
}
