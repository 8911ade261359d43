// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced by the HTTP client. Callers get these unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No response was received.
    #[error("network failure: {0}")]
    Network(String),
    #[error("server returned {status}")]
    Server { status: u16, body: String },
    /// 401 from the backend. The auth middleware has already logged the user out.
    #[error("authentication expired")]
    AuthExpired { body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl HttpError {
    pub const GENERIC_MESSAGE: &'static str = "Something went wrong while loading data.";
    pub const BAD_CREDENTIALS: &'static str = "Invalid username or password.";

    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Server { status, .. } => Some(*status),
            HttpError::AuthExpired { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, HttpError::AuthExpired { .. })
    }

    /// Human-readable message carried in the response body, if any.
    pub fn message(&self) -> Option<String> {
        let body = match self {
            HttpError::Server { body, .. } | HttpError::AuthExpired { body } => body.trim(),
            _ => return None,
        };
        if body.is_empty() {
            return None;
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Object(map)) => map
                .get("message")
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            Ok(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
            Ok(_) => None,
            // plain-text bodies are shown as-is unless they look like an HTML error page
            Err(_) if !body.starts_with('<') => Some(body.to_string()),
            Err(_) => None,
        }
    }

    pub fn display_message(&self, fallback: &str) -> String {
        self.message().unwrap_or_else(|| fallback.to_string())
    }

    /// Message shown after a failed login attempt.
    pub fn login_message(&self) -> String {
        if let Some(m) = self.message() {
            return m;
        }
        if self.is_auth_expired() {
            return Self::BAD_CREDENTIALS.to_string();
        }
        self.to_string()
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        HttpError::Network(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Failures of session operations: the backend call or persisting the result.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    pub fn login_message(&self) -> String {
        match self {
            SessionError::Http(e) => e.login_message(),
            SessionError::Storage(e) => e.to_string(),
        }
    }
}

/// Client-side validation failures. These never reach the network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Amount is required")]
    MissingAmount,
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Category {category} does not belong to {kind} transactions")]
    CategoryMismatch { category: String, kind: String },
    #[error("Username is required")]
    MissingUsername,
    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
}

/// A form submission fails either locally or at the backend.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Http(#[from] HttpError),
}
