// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly dashboard: the three independently loaded sections and the
//! create/update/delete operations that always re-fetch afterwards.

use crate::api::TransactionService;
use crate::error::{FormError, HttpError, SubmitError};
use crate::form::TransactionForm;
use crate::models::{CategorySummary, DashboardSummary, Transaction};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of years offered in the year picker, counting back from the current one.
pub const YEAR_CHOICES: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, FormError> {
        if !(1..=12).contains(&month) {
            return Err(FormError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn label(&self) -> String {
        let name = MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }
}

pub fn selectable_years(current_year: i32) -> Vec<i32> {
    (0..YEAR_CHOICES).map(|i| current_year - i).collect()
}

/// Transactions dated inside `period`, newest first.
pub fn transactions_for_period(all: &[Transaction], period: Period) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = all
        .iter()
        .filter(|t| period.contains(t.transaction_date))
        .cloned()
        .collect();
    out.sort_by(|a, b| {
        b.transaction_date
            .cmp(&a.transaction_date)
            .then_with(|| b.id.cmp(&a.id))
    });
    out
}

/// One section's outcome; the error side is the message to display.
pub type Section<T> = Result<T, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub period: Period,
    pub transactions: Section<Vec<Transaction>>,
    pub summary: Section<DashboardSummary>,
    pub categories: Section<Vec<CategorySummary>>,
}

impl DashboardData {
    /// The period's rows from the transactions section, or empty if it failed.
    pub fn period_transactions(&self) -> Vec<Transaction> {
        match &self.transactions {
            Ok(all) => transactions_for_period(all, self.period),
            Err(_) => Vec::new(),
        }
    }
}

/// Fetches the three sections concurrently. A failure stays in its own section.
pub async fn load(service: &TransactionService, period: Period) -> DashboardData {
    tracing::debug!(year = period.year, month = period.month, "loading dashboard");
    let (transactions, summary, categories) = tokio::join!(
        service.list(),
        service.summary(period.year, period.month),
        service.expenses_by_category(period.year, period.month),
    );
    DashboardData {
        period,
        transactions: section("transactions", transactions),
        summary: section("summary", summary),
        categories: section("categories", categories),
    }
}

fn section<T>(name: &str, r: Result<T, HttpError>) -> Section<T> {
    r.map_err(|e| {
        tracing::warn!(section = name, error = %e, "dashboard section failed");
        e.display_message(HttpError::GENERIC_MESSAGE)
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total_amount: Decimal,
    pub share_pct: Decimal,
}

/// Each category's share of the period's expenses, in the order given.
pub fn category_shares(items: &[CategorySummary]) -> Vec<CategoryShare> {
    let total: Decimal = items.iter().map(|c| c.total_amount).sum();
    items
        .iter()
        .map(|c| CategoryShare {
            category: c.category.label().to_string(),
            total_amount: c.total_amount,
            share_pct: if total.is_zero() {
                Decimal::ZERO
            } else {
                (c.total_amount * Decimal::ONE_HUNDRED / total).round_dp(1)
            },
        })
        .collect()
}

/// Dashboard view state. Every successful mutation is followed by a full
/// reload; the local list is never patched in place.
pub struct Dashboard {
    service: TransactionService,
    period: Period,
    data: Option<DashboardData>,
}

impl Dashboard {
    pub fn new(service: TransactionService, period: Period) -> Self {
        Self {
            service,
            period,
            data: None,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    pub async fn select_period(&mut self, period: Period) -> &DashboardData {
        self.period = period;
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> &DashboardData {
        let data = load(&self.service, self.period).await;
        self.data.insert(data)
    }

    pub async fn create(&mut self, form: &TransactionForm) -> Result<Transaction, SubmitError> {
        let payload = form.validate()?;
        let created = self.service.create(&payload).await?;
        tracing::info!(id = created.id, "transaction created");
        self.refresh().await;
        Ok(created)
    }

    pub async fn update(
        &mut self,
        id: i64,
        form: &TransactionForm,
    ) -> Result<Transaction, SubmitError> {
        let payload = form.validate()?;
        let updated = self.service.update(id, &payload).await?;
        tracing::info!(id, "transaction updated");
        self.refresh().await;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), HttpError> {
        self.service.delete(id).await?;
        tracing::info!(id, "transaction deleted");
        self.refresh().await;
        Ok(())
    }
}
