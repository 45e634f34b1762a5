//! Trading Backend API Client

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by backend calls
///
/// Every outbound request is wrapped here so a transport failure is an
/// ordinary value at the call site and never unwinds through the dispatcher.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which backend endpoint an order is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRoute {
    PlaceOrder,
    TpslOrder,
}

impl OrderRoute {
    /// Endpoint path relative to the backend base URL
    pub fn path(self) -> &'static str {
        match self {
            OrderRoute::PlaceOrder => "/order/place_order/",
            OrderRoute::TpslOrder => "/position/tpsl_order/",
        }
    }

    /// Select the endpoint for a parsed order payload
    ///
    /// TP/SL orders go to the position endpoint; everything else,
    /// including payloads without a `type` field, goes to place-order.
    pub fn for_payload(payload: &Value) -> Self {
        match payload.get("type").and_then(Value::as_str) {
            Some("STOP_LOSS") | Some("TAKE_PROFIT") => OrderRoute::TpslOrder,
            _ => OrderRoute::PlaceOrder,
        }
    }
}

/// Outcome of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Backend returned 200 with a token
    Accepted { access_token: String },
    /// Backend rejected the credentials (any non-200 status)
    Rejected,
}

/// Raw backend reply to an order submission, relayed verbatim to the user
#[derive(Debug, Clone)]
pub struct OrderReply {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Client for the trading backend
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create new backend client
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, BackendError> {
        let url = format!("{}/auth/token/", self.base_url);
        debug!("POST {}", url);

        let response = self.client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!("Login rejected with status {}", response.status());
            return Ok(LoginOutcome::Rejected);
        }

        let body: LoginResponse = serde_json::from_str(&response.text().await?)?;
        Ok(LoginOutcome::Accepted {
            access_token: body.access_token,
        })
    }

    /// Submit an order payload with the bearer token attached
    ///
    /// The reply body is returned verbatim; interpreting success or
    /// failure is left to the user reading it.
    pub async fn submit_order(
        &self,
        route: OrderRoute,
        payload: &Value,
        token: &str,
    ) -> Result<OrderReply, BackendError> {
        let url = format!("{}{}", self.base_url, route.path());
        debug!("POST {}", url);

        let response = self.client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(OrderReply { status, body })
    }
}
