// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::HttpError;
use crate::http::HttpClient;
use crate::models::{
    CategorySummary, DashboardSummary, LoginRequest, LoginResponse, RegisterRequest, ServerAck,
    Transaction, TransactionPayload,
};
use reqwest::Method;

pub const AUTH_PATH: &str = "/api/auth";
pub const TRANSACTIONS_PATH: &str = "/api/transactions";

/// Unauthenticated auth endpoints. Built on a client without the auth middleware,
/// so a failed login never triggers the forced-logout path.
#[derive(Clone)]
pub struct AuthApi {
    http: HttpClient,
}

impl AuthApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, HttpError> {
        self.http
            .post_json(
                &format!("{AUTH_PATH}/login"),
                &LoginRequest { username, password },
            )
            .await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<ServerAck, HttpError> {
        let body = serde_json::to_value(RegisterRequest {
            username,
            email,
            password,
        })
        .map_err(|e| HttpError::Decode(e.to_string()))?;
        let resp = self
            .http
            .send(Method::POST, &format!("{AUTH_PATH}/register"), Some(body), &[])
            .await?;
        Ok(ServerAck {
            status: resp.status,
            body: resp.body,
        })
    }
}

/// Transaction endpoints; every call carries the bearer token.
#[derive(Clone)]
pub struct TransactionService {
    http: HttpClient,
}

impl TransactionService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Transaction>, HttpError> {
        self.http.get_json(TRANSACTIONS_PATH, &[]).await
    }

    pub async fn get(&self, id: i64) -> Result<Transaction, HttpError> {
        self.http
            .get_json(&format!("{TRANSACTIONS_PATH}/{id}"), &[])
            .await
    }

    pub async fn create(&self, payload: &TransactionPayload) -> Result<Transaction, HttpError> {
        self.http.post_json(TRANSACTIONS_PATH, payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &TransactionPayload,
    ) -> Result<Transaction, HttpError> {
        self.http
            .put_json(&format!("{TRANSACTIONS_PATH}/{id}"), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), HttpError> {
        self.http
            .delete(&format!("{TRANSACTIONS_PATH}/{id}"))
            .await
    }

    pub async fn summary(&self, year: i32, month: u32) -> Result<DashboardSummary, HttpError> {
        self.http
            .get_json(
                &format!("{TRANSACTIONS_PATH}/summary"),
                &period_query(year, month),
            )
            .await
    }

    pub async fn expenses_by_category(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<CategorySummary>, HttpError> {
        self.http
            .get_json(
                &format!("{TRANSACTIONS_PATH}/expenses/by-category"),
                &period_query(year, month),
            )
            .await
    }
}

fn period_query(year: i32, month: u32) -> [(&'static str, String); 2] {
    [("year", year.to_string()), ("month", month.to_string())]
}
