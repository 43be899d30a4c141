/// The client every operation method hangs off.
///
/// Holds the transport and runs the one check shared by all operations: a
/// non-zero `ErrCount` in the envelope fails the call before any
/// operation-specific interpretation happens.

use crate::error::Result;
use crate::request::Request;
use crate::response::ApiResponse;
use crate::transport::{HttpTransport, Transport};

pub struct EnomClient {
    transport: Box<dyn Transport>,
}

impl EnomClient {
    /// Client against the production endpoint.
    pub fn new(uid: &str, pw: &str) -> Self {
        Self::with_transport(Box::new(HttpTransport::new(uid, pw, false)))
    }

    /// Client against the reseller test environment.
    pub fn sandbox(uid: &str, pw: &str) -> Self {
        Self::with_transport(Box::new(HttpTransport::new(uid, pw, true)))
    }

    /// Client against an arbitrary endpoint (mock servers, proxies).
    pub fn with_endpoint(uid: &str, pw: &str, endpoint: &str) -> Self {
        Self::with_transport(Box::new(HttpTransport::with_endpoint(uid, pw, endpoint)))
    }

    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a request and apply the shared envelope check.
    pub(crate) async fn call(&self, request: Request) -> Result<ApiResponse> {
        let response = self
            .transport
            .call(request.command(), request.params())
            .await?;
        response.check_errors()?;
        Ok(response)
    }
}
