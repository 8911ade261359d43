// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::transactions::{print_rows, transaction_rows};
use crate::commands::{period_from, today, SESSION_EXPIRED};
use crate::dashboard::{category_shares, CategoryShare, DashboardData, Period};
use crate::models::DashboardSummary;
use crate::navigation::DASHBOARD;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub async fn summary(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    app.require(DASHBOARD)?;
    let period = period_from(sub, today())?;
    let s = app.transactions.summary(period.year, period.month).await?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        print_summary(period, &s, &app.config.currency);
    }
    Ok(())
}

pub async fn by_category(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    app.require(DASHBOARD)?;
    let period = period_from(sub, today())?;
    let items = app
        .transactions
        .expenses_by_category(period.year, period.month)
        .await?;
    let shares = category_shares(&items);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &shares)? {
        print_shares(period, &shares, &app.config.currency);
    }
    Ok(())
}

pub async fn dashboard(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    app.require(DASHBOARD)?;
    let period = period_from(sub, today())?;
    show_dashboard(app, period).await
}

/// Loads and prints all three sections; a failed section prints its own message.
/// A 401 on any section has already ended the session, which is reported as an error.
pub async fn show_dashboard(app: &App, period: Period) -> Result<()> {
    let mut dashboard = app.dashboard(period);
    let data = dashboard.refresh().await;
    render(data, &app.config.currency);
    if !app.session.is_authenticated() {
        return Err(anyhow!(SESSION_EXPIRED));
    }
    Ok(())
}

pub fn render(data: &DashboardData, ccy: &str) {
    println!("Dashboard ({})", data.period.label());
    match &data.summary {
        Ok(s) => print_summary(data.period, s, ccy),
        Err(msg) => println!("Could not load summary: {}", msg),
    }
    match &data.categories {
        Ok(items) => print_shares(data.period, &category_shares(items), ccy),
        Err(msg) => println!("Could not load expense breakdown: {}", msg),
    }
    match &data.transactions {
        Ok(_) => print_rows(
            data.period,
            transaction_rows(&data.period_transactions(), ccy),
        ),
        Err(msg) => println!("Could not load transactions: {}", msg),
    }
}

fn print_summary(period: Period, s: &DashboardSummary, ccy: &str) {
    let balance_note = if s.balance >= Decimal::ZERO {
        "surplus"
    } else {
        "deficit"
    };
    let rows = vec![
        vec!["Total income".to_string(), fmt_money(&s.total_income, ccy)],
        vec!["Total expense".to_string(), fmt_money(&s.total_expense, ccy)],
        vec![
            format!("Net balance ({})", balance_note),
            fmt_money(&s.balance, ccy),
        ],
    ];
    println!("Summary ({})", period.label());
    println!("{}", pretty_table(&["", "Amount"], rows));
}

fn print_shares(period: Period, shares: &[CategoryShare], ccy: &str) {
    if shares.is_empty() {
        println!("No expenses to break down for {}.", period.label());
        return;
    }
    let rows: Vec<Vec<String>> = shares
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                fmt_money(&s.total_amount, ccy),
                format!("{:.1}%", s.share_pct),
                share_bar(s.share_pct),
            ]
        })
        .collect();
    println!("Expenses by category ({})", period.label());
    println!("{}", pretty_table(&["Category", "Spent", "Share", ""], rows));
}

/// One block per 5%.
fn share_bar(pct: Decimal) -> String {
    let n = (pct / Decimal::from(5)).round().to_usize().unwrap_or(0);
    "█".repeat(n.min(20))
}
