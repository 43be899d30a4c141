//! Client library for the eNom reseller XML API.
//!
//! Every operation follows the same shape: build query parameters from typed
//! inputs, send the named command over HTTP, and decode the XML response into
//! a typed record. The envelope error check runs uniformly before any
//! operation-specific interpretation.
//!
//! Reference: https://api.enom.com/docs
//!
//! ```no_run
//! use enom_api::{Domain, EnomClient};
//!
//! # async fn demo() -> enom_api::Result<()> {
//! let client = EnomClient::sandbox("resellid", "resellpw");
//! let domain = Domain::parse("resellerdocs.net")?;
//! let info = client.get_extend_info(&domain).await?;
//! println!("expires {}", info.expiration);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod operations;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;
mod xml;

pub use client::EnomClient;
pub use error::{EnomError, ErrorDetail, RemoteErrors, Result};
pub use operations::domains::PurchaseOrder;
pub use request::{Request, MAX_NAMESERVERS};
pub use response::ApiResponse;
pub use transport::{HttpTransport, Transport, PRODUCTION_URL, SANDBOX_URL};
pub use types::{
    AttributeOption, Contact, ContactPrefix, Domain, ExtendInfo, ExtendedAttribute, HostRecord,
    HostRecordType, OrderResult, OrderStatus, WhoisContacts,
};
