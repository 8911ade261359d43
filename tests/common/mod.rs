// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use async_trait::async_trait;
use fintrack::app::App;
use fintrack::config::Config;
use fintrack::error::HttpError;
use fintrack::http::{ApiRequest, ApiResponse, Transport};
use fintrack::models::Session;
use fintrack::session::SESSION_KEY;
use fintrack::storage::{MemoryStorage, Storage};
use reqwest::Method;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted backend: fixed answer per (method, path), every request recorded.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), Result<ApiResponse, String>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes.lock().unwrap().insert(
            (method, path.to_string()),
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: Method, path: &str, msg: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Err(msg.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        let key = (request.method.clone(), request.path.clone());
        self.requests.lock().unwrap().push(request);
        match self.routes.lock().unwrap().get(&key) {
            Some(Ok(resp)) => Ok(resp.clone()),
            Some(Err(msg)) => Err(HttpError::Network(msg.clone())),
            None => Ok(ApiResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

pub fn config() -> Config {
    Config {
        api_url: "http://backend.test".into(),
        data_dir: PathBuf::from("unused"),
        currency: "TRY".into(),
        timeout: Duration::from_secs(15),
        verbosity: 0,
    }
}

pub fn session(token: &str, username: &str) -> Session {
    Session {
        access_token: token.into(),
        token_type: "Bearer".into(),
        username: username.into(),
    }
}

pub fn storage_with(session: Option<&Session>) -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    if let Some(s) = session {
        storage
            .set(SESSION_KEY, &serde_json::to_string(s).unwrap())
            .unwrap();
    }
    storage
}

/// App wired to a fake backend, optionally already logged in.
pub fn app(fake: &Arc<FakeTransport>, logged_in: Option<&Session>) -> (App, Arc<MemoryStorage>) {
    let storage = storage_with(logged_in);
    let app = App::with_parts(config(), storage.clone(), fake.clone());
    (app, storage)
}

pub const TRANSACTIONS_JSON: &str = r#"[
    {"id": 1, "type": "EXPENSE", "amount": 50, "transactionDate": "2024-05-01", "category": "FOOD", "description": "groceries"},
    {"id": 2, "type": "INCOME", "amount": 200, "transactionDate": "2024-05-02", "category": "SALARY", "description": null},
    {"id": 3, "type": "EXPENSE", "amount": 12.5, "transactionDate": "2024-04-30", "category": "TRAVEL"}
]"#;
