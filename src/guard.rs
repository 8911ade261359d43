// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::navigation::{self, Route};
use crate::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session hydration has not finished; show a placeholder.
    Loading,
    Render(Route),
    /// Not authenticated. `from` is where the user should land after logging in.
    Redirect { to: String, from: String },
}

pub struct RouteGuard;

impl RouteGuard {
    /// Evaluated fresh for every navigation.
    pub fn check(session: &SessionStore, path: &str) -> GuardDecision {
        if session.is_loading() {
            return GuardDecision::Loading;
        }
        let route = Route::parse(path);
        if !route.is_protected() || session.is_authenticated() {
            return GuardDecision::Render(route);
        }
        GuardDecision::Redirect {
            to: navigation::LOGIN.to_string(),
            from: route.path().to_string(),
        }
    }
}

/// Where to go once login succeeds.
pub fn post_login_target(return_target: Option<&str>) -> String {
    match return_target.map(navigation::normalize) {
        Some(p) if p != navigation::LOGIN && p != navigation::REGISTER => p,
        _ => navigation::DASHBOARD.to_string(),
    }
}
