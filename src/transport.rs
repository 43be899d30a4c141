/// Transport seam between the operation methods and the registry endpoint.
///
/// `HttpTransport` folds the reseller credentials into the query string,
/// issues a GET against the production or sandbox endpoint, and hands the
/// body back as an `ApiResponse`. Tests swap in their own `Transport` (or
/// point `HttpTransport` at a mock server) without touching the operations.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{EnomError, Result};
use crate::response::ApiResponse;

pub const PRODUCTION_URL: &str = "https://reseller.enom.com/interface.asp";
pub const SANDBOX_URL: &str = "https://resellertest.enom.com/interface.asp";

/// Sends a named remote operation with its parameter mapping and returns the
/// parsed response document.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, command: &str, params: &[(String, String)]) -> Result<ApiResponse>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
    uid: String,
    pw: String,
}

impl HttpTransport {
    pub fn new(uid: &str, pw: &str, sandbox: bool) -> Self {
        let endpoint = if sandbox { SANDBOX_URL } else { PRODUCTION_URL };
        Self::with_endpoint(uid, pw, endpoint)
    }

    /// Point at an arbitrary endpoint (mock servers, gateway proxies).
    pub fn with_endpoint(uid: &str, pw: &str, endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            uid: uid.to_string(),
            pw: pw.to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, command: &str, params: &[(String, String)]) -> Result<ApiResponse> {
        let mut query: Vec<(&str, &str)> = vec![
            ("Command", command),
            ("UID", &self.uid),
            ("PW", &self.pw),
            ("ResponseType", "XML"),
        ];
        for (k, v) in params {
            query.push((k, v));
        }

        debug!(command, params = params.len(), "sending registry command");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| EnomError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EnomError::Http(e.to_string()))?;

        if !status.is_success() {
            warn!(command, %status, "registry endpoint returned HTTP failure");
            return Err(EnomError::Http(format!("HTTP {}", status)));
        }

        Ok(ApiResponse::new(body))
    }
}
