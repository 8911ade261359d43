// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_CURRENCY: &str = "TRY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub currency: String,
    pub timeout: Duration,
    pub verbosity: u8,
}

impl Config {
    /// Resolves global flags; the data dir falls back to the platform default.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let api_url = m
            .get_one::<String>("api-url")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let data_dir = match m.get_one::<String>("data-dir") {
            Some(dir) => PathBuf::from(dir),
            None => crate::db::default_data_dir()?,
        };
        let currency = m
            .get_one::<String>("currency")
            .map(|s| s.trim().to_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let timeout = Duration::from_secs(
            m.get_one::<u64>("timeout")
                .copied()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        );
        Ok(Self {
            api_url,
            data_dir,
            currency,
            timeout,
            verbosity: m.get_count("verbose"),
        })
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
