// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

use crate::config;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn period_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .help("Year to show (default: current)"),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .value_parser(value_parser!(u32))
            .help("Month 1-12 to show (default: current)"),
    )
}

fn transaction_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .required(required)
            .help("income | expense"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(required)
            .allow_hyphen_values(true)
            .help("Positive amount, e.g. 42.50"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .help("YYYY-MM-DD (default: today for new transactions)"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .help("Category, e.g. FOOD or salary (default depends on type)"),
    )
    .arg(Arg::new("description").long("description").help("Free text"))
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Transaction id")
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Command-line client for the personal finance tracker")
        .version(clap::crate_version!())
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .env("FINTRACK_API_URL")
                .default_value(config::DEFAULT_API_URL)
                .help("Backend base URL"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .env("FINTRACK_DATA_DIR")
                .help("Where the session is stored (default: platform data dir)"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .default_value(config::DEFAULT_CURRENCY)
                .help("Currency code used when printing amounts"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_parser(value_parser!(u64))
                .default_value("15")
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (-v, -vv)"),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(Arg::new("username").long("username").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .env("FINTRACK_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and open the dashboard")
                .arg(Arg::new("username").long("username").required(true))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .env("FINTRACK_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(Command::new("whoami").about("Show the logged-in user"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(json_flags(period_args(
                    Command::new("list").about("List a month's transactions, newest first"),
                )))
                .subcommand(json_flags(
                    Command::new("show").about("Show one transaction").arg(id_arg()),
                ))
                .subcommand(transaction_fields(
                    Command::new("add").about("Record a transaction"),
                    true,
                ))
                .subcommand(
                    transaction_fields(Command::new("edit").about("Change a transaction"), false)
                        .arg(id_arg()),
                )
                .subcommand(Command::new("rm").about("Delete a transaction").arg(id_arg())),
        )
        .subcommand(json_flags(period_args(
            Command::new("summary").about("Income, expense and balance for a month"),
        )))
        .subcommand(json_flags(period_args(
            Command::new("by-category").about("Expenses by category for a month"),
        )))
        .subcommand(period_args(
            Command::new("dashboard").about("Summary, category breakdown and transactions"),
        ))
}
