/// Domain registration.
///
/// `purchase` registers a domain under the reseller account. Real-time TLDs
/// complete synchronously with RRP code 200; others queue an order (1300)
/// that the registry fulfils later.

use crate::client::EnomClient;
use crate::error::{EnomError, Result};
use crate::request::Request;
use crate::response::ApiResponse;
use crate::types::{Contact, ContactPrefix, Domain, OrderResult, OrderStatus};

/// RRP result codes the order operations understand.
const RRP_COMPLETED: u32 = 200;
const RRP_QUEUED: u32 = 1300;

/// Inputs for a registration order.
#[derive(Debug, Clone)]
pub struct PurchaseOrder {
    pub domain: Domain,
    pub registrant: Contact,
    /// Empty list falls back to registrar-hosted DNS.
    pub nameservers: Vec<String>,
    pub years: u32,
    /// Enable auto-renew on the new registration.
    pub auto_renew: bool,
    /// Per-TLD registry attributes, passed through as extra parameters.
    pub extended_attributes: Vec<(String, String)>,
}

impl PurchaseOrder {
    pub fn new(domain: Domain, registrant: Contact) -> Self {
        Self {
            domain,
            registrant,
            nameservers: Vec::new(),
            years: 1,
            auto_renew: false,
            extended_attributes: Vec::new(),
        }
    }
}

/// Interpret the RRP outcome of a purchase/extend response.
///
/// 200 completed synchronously; 1300 means the order was queued. On a TLD
/// the registry flags as real-time, a queued outcome is a fault instead.
pub(crate) fn interpret_order(response: &ApiResponse, domain: &Domain) -> Result<OrderResult> {
    let code = response
        .rrp_code()
        .ok_or_else(|| EnomError::Parse("response missing <RRPCode>".to_string()))?;
    let text = response.rrp_text();

    let status = match code {
        RRP_COMPLETED => OrderStatus::Registered,
        RRP_QUEUED => {
            if response.boolean("IsRealTimeTLD").unwrap_or(false) {
                return Err(EnomError::Api { code, text });
            }
            OrderStatus::Queued
        }
        _ => return Err(EnomError::Api { code, text }),
    };

    let order_id = response
        .uint("OrderID")
        .ok_or_else(|| EnomError::Parse("response missing <OrderID>".to_string()))?;

    Ok(OrderResult {
        domain: domain.name(),
        order_id,
        status,
        text,
    })
}

impl EnomClient {
    pub async fn purchase(&self, order: &PurchaseOrder) -> Result<OrderResult> {
        order.registrant.validate()?;
        if !(1..=10).contains(&order.years) {
            return Err(EnomError::Validation(format!(
                "registration years must be between 1 and 10, got {}",
                order.years
            )));
        }

        let mut request = Request::new("Purchase")
            .domain(&order.domain)
            .int("NumYears", i64::from(order.years))
            .flag("RenewName", order.auto_renew)
            .contact(&order.registrant, ContactPrefix::Registrant)
            .nameservers(&order.nameservers)?;
        for (key, value) in &order.extended_attributes {
            request = request.param(key, value);
        }

        let response = self.call(request).await?;
        interpret_order(&response, &order.domain)
    }
}
