// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::{period_from, today};
use crate::dashboard::{transactions_for_period, Period};
use crate::form::TransactionForm;
use crate::models::{Category, Transaction, TransactionType};
use crate::navigation::DASHBOARD;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use serde::Serialize;

pub async fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    app.require(DASHBOARD)?;
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub).await?,
        Some(("show", sub)) => show(app, sub).await?,
        Some(("add", sub)) => add(app, sub).await?,
        Some(("edit", sub)) => edit(app, sub).await?,
        Some(("rm", sub)) => remove(app, sub).await?,
        _ => {}
    }
    Ok(())
}

async fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let period = period_from(sub, today())?;
    let all = app.transactions.list().await?;
    let data = transaction_rows(&transactions_for_period(&all, period), &app.config.currency);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_rows(period, data);
    }
    Ok(())
}

async fn show(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").ok_or_else(|| anyhow!("id is required"))?;
    let t = app.transactions.get(id).await?;
    let data = transaction_rows(std::slice::from_ref(&t), &app.config.currency);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        print_rows(Period::containing(t.transaction_date), data);
    }
    Ok(())
}

async fn add(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let form = form_from_args(sub, TransactionForm::new(today()))?;
    let period = Period::containing(crate::utils::parse_date(form.transaction_date.trim())?);
    let mut dashboard = app.dashboard(period);
    let created = dashboard.create(&form).await?;
    println!(
        "Recorded {} {} on {} ({})",
        created.kind.label(),
        fmt_money(&created.amount, &app.config.currency),
        created.transaction_date,
        created.category.label()
    );
    print_refreshed(app, &dashboard);
    Ok(())
}

async fn edit(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").ok_or_else(|| anyhow!("id is required"))?;
    let existing = app.transactions.get(id).await?;
    let form = form_from_args(sub, TransactionForm::from_transaction(&existing))?;
    let period = Period::containing(crate::utils::parse_date(form.transaction_date.trim())?);
    let mut dashboard = app.dashboard(period);
    let updated = dashboard.update(id, &form).await?;
    println!(
        "Updated transaction {}: {} {} on {}",
        updated.id,
        updated.kind.label(),
        fmt_money(&updated.amount, &app.config.currency),
        updated.transaction_date
    );
    print_refreshed(app, &dashboard);
    Ok(())
}

async fn remove(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").ok_or_else(|| anyhow!("id is required"))?;
    let mut dashboard = app.dashboard(Period::containing(today()));
    dashboard.delete(id).await?;
    println!("Deleted transaction {}", id);
    Ok(())
}

/// Applies the given flags on top of `form`. A type change without an explicit
/// category falls back to that type's default category.
pub fn form_from_args(sub: &clap::ArgMatches, mut form: TransactionForm) -> Result<TransactionForm> {
    if let Some(kind) = sub.get_one::<String>("type") {
        let kind: TransactionType = kind.parse().map_err(|e: String| anyhow!(e))?;
        form.set_kind(kind);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        form.category = cat.parse::<Category>().map_err(|e| anyhow!(e))?;
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        form.amount = amount.clone();
    }
    if let Some(date) = sub.get_one::<String>("date") {
        form.transaction_date = date.clone();
    }
    if let Some(desc) = sub.get_one::<String>("description") {
        form.description = desc.clone();
    }
    Ok(form)
}

fn print_refreshed(app: &App, dashboard: &crate::dashboard::Dashboard) {
    let Some(data) = dashboard.data() else {
        return;
    };
    match &data.transactions {
        Ok(_) => print_rows(
            data.period,
            transaction_rows(&data.period_transactions(), &app.config.currency),
        ),
        Err(msg) => eprintln!("Could not reload transactions: {}", msg),
    }
}

pub fn print_rows(period: Period, data: Vec<TransactionRow>) {
    if data.is_empty() {
        println!("No transactions for {}.", period.label());
        return;
    }
    println!("Transactions ({})", period.label());
    let rows: Vec<Vec<String>> = data
        .into_iter()
        .map(|r| vec![r.id.to_string(), r.date, r.kind, r.category, r.description, r.amount])
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Type", "Category", "Description", "Amount"], rows)
    );
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

pub fn transaction_rows(items: &[Transaction], ccy: &str) -> Vec<TransactionRow> {
    items
        .iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.transaction_date.to_string(),
            kind: t.kind.label().to_string(),
            category: t.category.label().to_string(),
            description: t.description.clone().unwrap_or_default(),
            amount: fmt_money(&t.amount, ccy),
        })
        .collect()
}
