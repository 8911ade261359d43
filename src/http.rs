// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! HTTP plumbing: a raw [`Transport`], the [`AuthMiddleware`] decorator that
//! injects the bearer token and reacts to 401s, and the [`HttpClient`] the
//! domain services talk to.

use crate::error::HttpError;
use crate::navigation::{self, Navigator};
use crate::session::SessionStore;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON: &str = "application/json";

const UA: &str = concat!(
    "fintrack/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/fintrack)"
);

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Replaces any existing header with the same (case-insensitive) name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|e| HttpError::Decode(e.to_string()))
    }
}

/// Sends one request and returns whatever status came back.
/// Only a missing response is an error at this level.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(UA)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(ApiResponse { status, body })
    }
}

/// Wraps a transport with session-aware behaviour:
/// attaches `Authorization: Bearer <token>` while a session exists, and on a
/// 401 logs the user out and sends the navigator to the login route.
pub struct AuthMiddleware {
    inner: Arc<dyn Transport>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthMiddleware {
    pub fn new(
        inner: Arc<dyn Transport>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner,
            session,
            navigator,
        }
    }
}

#[async_trait]
impl Transport for AuthMiddleware {
    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, HttpError> {
        match self.session.current() {
            Some(session) => {
                request.set_header(AUTHORIZATION, format!("Bearer {}", session.access_token))
            }
            None => request.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(AUTHORIZATION)),
        }

        let response = self.inner.send(request).await?;
        if response.status == 401 {
            tracing::warn!("401 Unauthorized, token may be expired or invalid; logging out");
            self.session.logout();
            if self.navigator.current_path() != navigation::LOGIN {
                self.navigator.navigate(navigation::LOGIN, None);
            }
        }
        Ok(response)
    }
}

/// The configured request sender used by the API services.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        query: &[(&str, String)],
    ) -> Result<ApiResponse, HttpError> {
        let mut request = ApiRequest::new(method, path);
        request.set_header(CONTENT_TYPE, JSON);
        request.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        request.body = body;

        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        match response.status {
            401 => Err(HttpError::AuthExpired {
                body: response.body,
            }),
            status => Err(HttpError::Server {
                status,
                body: response.body,
            }),
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HttpError> {
        self.send(Method::GET, path, None, query).await?.json()
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.send(Method::POST, path, Some(to_value(body)?), &[])
            .await?
            .json()
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.send(Method::PUT, path, Some(to_value(body)?), &[])
            .await?
            .json()
    }

    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.send(Method::DELETE, path, None, &[]).await?;
        Ok(())
    }
}

fn to_value<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, HttpError> {
    serde_json::to_value(body).map_err(|e| HttpError::Decode(e.to_string()))
}
