// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FormError;
use crate::models::{Category, Transaction, TransactionPayload, TransactionType};
use crate::utils::parse_date;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// Category preselected for a new transaction of the given type.
pub fn default_category(kind: TransactionType) -> Category {
    match kind {
        TransactionType::Income => Category::Salary,
        TransactionType::Expense => Category::Food,
    }
}

/// Editable transaction fields, kept as entered until [`TransactionForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub kind: TransactionType,
    pub amount: String,
    pub transaction_date: String,
    pub category: Category,
    pub description: String,
}

impl TransactionForm {
    /// Blank expense form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            amount: String::new(),
            transaction_date: today.to_string(),
            category: default_category(TransactionType::Expense),
            description: String::new(),
        }
    }

    pub fn from_transaction(t: &Transaction) -> Self {
        Self {
            kind: t.kind,
            amount: t.amount.to_string(),
            transaction_date: t.transaction_date.to_string(),
            category: t.category,
            description: t.description.clone().unwrap_or_default(),
        }
    }

    /// Switching type resets a category that belongs to the other type.
    pub fn set_kind(&mut self, kind: TransactionType) {
        self.kind = kind;
        if self.category.kind() != kind {
            self.category = default_category(kind);
        }
    }

    pub fn validate(&self) -> Result<TransactionPayload, FormError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let amount = raw
            .parse::<Decimal>()
            .map_err(|_| FormError::InvalidAmount(raw.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(FormError::NonPositiveAmount);
        }
        let transaction_date = parse_date(self.transaction_date.trim())
            .map_err(|_| FormError::InvalidDate(self.transaction_date.trim().to_string()))?;
        if self.category.kind() != self.kind {
            return Err(FormError::CategoryMismatch {
                category: self.category.to_string(),
                kind: self.kind.to_string(),
            });
        }
        Ok(TransactionPayload {
            kind: self.kind,
            amount,
            transaction_date,
            category: self.category,
            description: self.description.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().is_empty() {
            return Err(FormError::MissingUsername);
        }
        if !EMAIL.is_match(self.email.trim()) {
            return Err(FormError::InvalidEmail(self.email.trim().to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(())
    }
}
