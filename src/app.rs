// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{AuthApi, TransactionService};
use crate::config::Config;
use crate::dashboard::{Dashboard, Period};
use crate::error::SessionError;
use crate::guard::{post_login_target, GuardDecision, RouteGuard};
use crate::http::{AuthMiddleware, HttpClient, ReqwestTransport, Transport};
use crate::models::Session;
use crate::navigation::{self, History, Navigator};
use crate::session::SessionStore;
use crate::storage::{SqliteStorage, Storage};
use anyhow::{anyhow, Result};
use std::sync::Arc;

/// Everything a command needs, wired once per process.
pub struct App {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub history: Arc<History>,
    pub auth: AuthApi,
    pub transactions: TransactionService,
}

impl App {
    pub fn open(config: Config) -> Result<Self> {
        let storage = SqliteStorage::open(&config.data_dir)?;
        let transport = ReqwestTransport::new(&config.api_url, config.timeout)?;
        Ok(Self::with_parts(config, Arc::new(storage), Arc::new(transport)))
    }

    /// Auth endpoints get the bare transport; transaction endpoints go through
    /// the auth middleware.
    pub fn with_parts(
        config: Config,
        storage: Arc<dyn Storage>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let session = Arc::new(SessionStore::open(storage));
        let history = Arc::new(History::new());
        let auth = AuthApi::new(HttpClient::new(transport.clone()));
        let authed = AuthMiddleware::new(transport, session.clone(), history.clone());
        let transactions = TransactionService::new(HttpClient::new(Arc::new(authed)));
        Self {
            config,
            session,
            history,
            auth,
            transactions,
        }
    }

    /// Runs the route guard for `path` and records the resulting navigation.
    pub fn visit(&self, path: &str) -> GuardDecision {
        let decision = RouteGuard::check(&self.session, path);
        match &decision {
            GuardDecision::Render(route) => self.history.navigate(route.path(), None),
            GuardDecision::Redirect { to, from } => {
                tracing::info!(%from, "login required");
                self.history.navigate(to, Some(from.clone()));
            }
            GuardDecision::Loading => {}
        }
        decision
    }

    /// Like [`App::visit`], but anything other than a render is an error.
    pub fn require(&self, path: &str) -> Result<()> {
        match self.visit(path) {
            GuardDecision::Render(_) => Ok(()),
            GuardDecision::Redirect { from, .. } => Err(anyhow!(
                "You need to log in to open {}. Run `fintrack login` first.",
                from
            )),
            GuardDecision::Loading => Err(anyhow!("Session is still loading")),
        }
    }

    /// Logs in and moves on to the preserved return target (or the dashboard).
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(Session, String), SessionError> {
        let session = self.session.login(&self.auth, username, password).await?;
        let target = post_login_target(self.history.return_target().as_deref());
        self.history.navigate(&target, None);
        Ok((session, target))
    }

    pub fn logout(&self) {
        self.session.logout();
        self.history.navigate(navigation::LOGIN, None);
    }

    pub fn dashboard(&self, period: Period) -> Dashboard {
        Dashboard::new(self.transactions.clone(), period)
    }
}
