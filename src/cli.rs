// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendbook")
        .version(clap::crate_version!())
        .about("Monthly CSV expense ledger with installments, income ceilings, and spending reports")
        .subcommand(
            Command::new("add")
                .about("Add an expense, optionally split into monthly installments")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .required(true)
                        .help("Name of the expense"),
                )
                .arg(
                    Arg::new("amount")
                        .short('a')
                        .long("amount")
                        .required(true)
                        .help("Total monetary amount"),
                )
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .default_value("OTHERS")
                        .help("Expense category (SPORTS, HEALTH, STUDY, FOOD, LEISURE, CLOTHES, OTHERS, SAVINGS)"),
                )
                .arg(
                    Arg::new("installments")
                        .short('i')
                        .long("installments")
                        .value_parser(value_parser!(u32))
                        .default_value("1")
                        .help("Number of monthly installments"),
                )
                .arg(
                    Arg::new("description")
                        .short('d')
                        .long("description")
                        .help("Free-text description"),
                )
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .help("Currency code, defaults to the configured default"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Start date YYYY-MM-DD, defaults to today"),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Manage monthly income ceilings per currency")
                .subcommand(
                    Command::new("set")
                        .about("Set the ceiling for a month")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("currency").long("currency")),
                )
                .subcommand(json_flags(
                    Command::new("get")
                        .about("Look up the ceiling applying to a month (carry-forward)")
                        .arg(Arg::new("month").long("month"))
                        .arg(Arg::new("currency").long("currency")),
                ))
                .subcommand(json_flags(
                    Command::new("list").about("List all configured ceilings"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Spending summaries")
                .subcommand(json_flags(
                    Command::new("month")
                        .about("Summary for one month")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("currency").long("currency")),
                ))
                .subcommand(json_flags(
                    Command::new("range")
                        .about("Summary across an inclusive month range")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true))
                        .arg(Arg::new("currency").long("currency")),
                )),
        )
        .subcommand(
            Command::new("ledger")
                .about("Inspect monthly ledger files")
                .subcommand(json_flags(
                    Command::new("list").about("List months that have a ledger file"),
                ))
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Dump one monthly ledger")
                        .arg(Arg::new("month").long("month").required(true)),
                )),
        )
}
