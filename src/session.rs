// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::AuthApi;
use crate::error::{HttpError, SessionError};
use crate::models::{ServerAck, Session};
use crate::storage::{load_json, save_json, Storage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "user";

const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Owns the authenticated session and its durable copy.
///
/// Starts in the loading state; [`SessionStore::hydrate`] reads the stored
/// session once and clears the flag. Nothing should treat the user as logged
/// out while `is_loading()` is still true.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    current: RwLock<Option<Session>>,
    loading: AtomicBool,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
            loading: AtomicBool::new(true),
        }
    }

    /// New store, hydrated from storage before returning.
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let store = Self::new(storage);
        store.hydrate();
        store
    }

    pub fn hydrate(&self) {
        let stored = match load_json::<Session>(self.storage.as_ref(), SESSION_KEY) {
            Ok(Some(session)) if !session.access_token.is_empty() => Some(session),
            Ok(Some(_)) => {
                tracing::warn!("stored session has an empty token; discarding it");
                self.forget_stored();
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "stored session unreadable; discarding it");
                self.forget_stored();
                None
            }
        };
        if let Some(s) = &stored {
            tracing::debug!(username = %s.username, "session restored");
        }
        self.replace(stored);
        self.loading.store(false, Ordering::SeqCst);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Logs in against the backend and persists the resulting session.
    /// The username is the one submitted; the backend does not echo it.
    pub async fn login(
        &self,
        auth: &AuthApi,
        username: &str,
        password: &str,
    ) -> Result<Session, SessionError> {
        let resp = auth.login(username, password).await.inspect_err(|e| {
            tracing::error!(error = %e, %username, "login failed");
        })?;
        let access_token = resp
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| HttpError::Decode("login response has no accessToken".into()))?;
        let session = Session {
            access_token,
            token_type: resp
                .token_type
                .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string()),
            username: username.to_string(),
        };
        save_json(self.storage.as_ref(), SESSION_KEY, &session)?;
        self.replace(Some(session.clone()));
        tracing::info!(%username, "logged in");
        Ok(session)
    }

    /// Creates an account. Does not log in.
    pub async fn register(
        &self,
        auth: &AuthApi,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<ServerAck, HttpError> {
        auth.register(username, email, password)
            .await
            .inspect_err(|e| tracing::error!(error = %e, %username, "registration failed"))
    }

    /// Clears the stored and in-memory session. Never calls the backend.
    pub fn logout(&self) {
        self.forget_stored();
        if let Some(previous) = self.current.write().unwrap_or_else(|e| e.into_inner()).take() {
            tracing::info!(username = %previous.username, "logged out");
        }
    }

    fn forget_stored(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::error!(error = %e, "could not remove stored session");
        }
    }

    fn replace(&self, session: Option<Session>) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = session;
    }
}
