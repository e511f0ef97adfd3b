// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendbook::{cli, commands, config::Config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = Config::load()?;

    match matches.subcommand() {
        Some(("add", sub)) => commands::expense::add(&cfg, sub)?,
        Some(("income", sub)) => commands::income::handle(&cfg, sub)?,
        Some(("report", sub)) => commands::report::handle(&cfg, sub)?,
        Some(("ledger", sub)) => commands::ledgers::handle(&cfg, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
