// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authenticated identity kept by the session store and mirrored into storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful `POST /api/auth/login`. The backend does not echo the username.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Register response, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAck {
    pub status: u16,
    pub body: String,
}

impl ServerAck {
    pub const DEFAULT_MESSAGE: &'static str = "Registration successful!";

    /// The backend may answer with a plain string, a JSON string or a `{message}` object.
    pub fn message(&self) -> String {
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            return Self::DEFAULT_MESSAGE.to_string();
        }
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::String(s)) if !s.is_empty() => s,
            Ok(serde_json::Value::Object(map)) => map
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string()),
            Ok(_) => Self::DEFAULT_MESSAGE.to_string(),
            Err(_) => trimmed.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(format!("Unknown transaction type '{}' (use income|expense)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Salary,
    Freelance,
    Investment,
    Gift,
    OtherIncome,
    Food,
    Transportation,
    Housing,
    Bills,
    Health,
    Education,
    Entertainment,
    Shopping,
    Travel,
    OtherExpense,
}

impl Category {
    pub const INCOME: [Category; 5] = [
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Gift,
        Category::OtherIncome,
    ];

    pub const EXPENSE: [Category; 10] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Bills,
        Category::Health,
        Category::Education,
        Category::Entertainment,
        Category::Shopping,
        Category::Travel,
        Category::OtherExpense,
    ];

    /// Categories offered for a transaction type, in display order.
    pub fn for_type(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Income => &Self::INCOME,
            TransactionType::Expense => &Self::EXPENSE,
        }
    }

    pub fn kind(&self) -> TransactionType {
        if Self::INCOME.contains(self) {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "SALARY",
            Category::Freelance => "FREELANCE",
            Category::Investment => "INVESTMENT",
            Category::Gift => "GIFT",
            Category::OtherIncome => "OTHER_INCOME",
            Category::Food => "FOOD",
            Category::Transportation => "TRANSPORTATION",
            Category::Housing => "HOUSING",
            Category::Bills => "BILLS",
            Category::Health => "HEALTH",
            Category::Education => "EDUCATION",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Shopping => "SHOPPING",
            Category::Travel => "TRAVEL",
            Category::OtherExpense => "OTHER_EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
            Category::Gift => "Gift",
            Category::OtherIncome => "Other income",
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::OtherExpense => "Other expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::INCOME
            .iter()
            .chain(Self::EXPENSE.iter())
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category '{}'", s.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update body. Amount goes over the wire as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    pub category: Category,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub total_amount: Decimal,
}
