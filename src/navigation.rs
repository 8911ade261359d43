// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::{Mutex, MutexGuard};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        match normalize(path).as_str() {
            HOME => Route::Home,
            LOGIN => Route::Login,
            REGISTER => Route::Register,
            DASHBOARD => Route::Dashboard,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => HOME,
            Route::Login => LOGIN,
            Route::Register => REGISTER,
            Route::Dashboard => DASHBOARD,
            Route::NotFound(p) => p,
        }
    }

    /// Routes that need a session before they render.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Drops the query string and any trailing slash; empty means root.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Location the client is "on", plus the state carried by the last navigation.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str, return_target: Option<String>);
    fn return_target(&self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub return_target: Option<String>,
}

/// In-process navigation history.
#[derive(Debug)]
pub struct History {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl Default for History {
    fn default() -> Self {
        Self::starting_at(HOME)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(path: &str) -> Self {
        Self {
            entries: Mutex::new(vec![HistoryEntry {
                path: normalize(path),
                return_target: None,
            }]),
        }
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HistoryEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Navigator for History {
    fn current_path(&self) -> String {
        self.lock()
            .last()
            .map(|e| e.path.clone())
            .unwrap_or_else(|| HOME.to_string())
    }

    fn navigate(&self, path: &str, return_target: Option<String>) {
        let path = normalize(path);
        tracing::debug!(%path, ?return_target, "navigate");
        self.lock().push(HistoryEntry {
            path,
            return_target,
        });
    }

    fn return_target(&self) -> Option<String> {
        self.lock().last().and_then(|e| e.return_target.clone())
    }
}
