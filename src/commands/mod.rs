// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod reports;
pub mod transactions;

use crate::dashboard::Period;
use crate::error::{HttpError, SubmitError};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// `--year`/`--month` with the month containing `today` as the default.
pub fn period_from(sub: &clap::ArgMatches, today: NaiveDate) -> Result<Period> {
    let current = Period::containing(today);
    let year = sub.get_one::<i32>("year").copied().unwrap_or(current.year);
    let month = sub.get_one::<u32>("month").copied().unwrap_or(current.month);
    Ok(Period::new(year, month)?)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Swaps backend errors for the message the backend sent, and 401s for a
/// re-login hint. Anything else passes through.
pub fn user_facing(err: anyhow::Error) -> anyhow::Error {
    let http = err.downcast_ref::<HttpError>().or_else(|| {
        match err.downcast_ref::<SubmitError>() {
            Some(SubmitError::Http(h)) => Some(h),
            _ => None,
        }
    });
    let replacement = match http {
        Some(h) if h.is_auth_expired() => Some(SESSION_EXPIRED.to_string()),
        Some(h) => h.message(),
        None => None,
    };
    match replacement {
        Some(msg) => anyhow!(msg),
        None => err,
    }
}
