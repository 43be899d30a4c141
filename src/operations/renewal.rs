/// Renewal operations: extending a registration, reading renewal info, and
/// managing the auto-renew flag.

use crate::client::EnomClient;
use crate::error::{EnomError, Result};
use crate::operations::domains::interpret_order;
use crate::request::Request;
use crate::types::{Domain, ExtendInfo, OrderResult};

impl EnomClient {
    /// Extend a registration by `years`. Returns the order placed; the same
    /// 200/1300 interpretation as `purchase` applies.
    pub async fn extend(&self, domain: &Domain, years: u32) -> Result<OrderResult> {
        if !(1..=10).contains(&years) {
            return Err(EnomError::Validation(format!(
                "extension years must be between 1 and 10, got {}",
                years
            )));
        }
        let request = Request::new("Extend")
            .domain(domain)
            .int("NumYears", i64::from(years));
        let response = self.call(request).await?;
        interpret_order(&response, domain)
    }

    /// Current expiration and the extension window the registry allows.
    pub async fn get_extend_info(&self, domain: &Domain) -> Result<ExtendInfo> {
        let response = self.call(Request::new("GetExtendInfo").domain(domain)).await?;
        Ok(ExtendInfo {
            expiration: response.date("Expiration", "TimeZone")?,
            min_extension: response
                .uint("MinAllowed")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(1),
            max_extension: response
                .uint("MaxExtension")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(10),
            registrar_hold: response.boolean("RegistrarHold").unwrap_or(false),
            auto_renew: response.boolean("AutoRenew").unwrap_or(false),
        })
    }

    /// Set the auto-renew flag. Only 0 and 1 are accepted; anything else is
    /// rejected locally before any HTTP traffic.
    pub async fn set_renew(&self, domain: &Domain, flag: u8) -> Result<()> {
        let request = Request::new("SetRenew").domain(domain).renew_flag(flag)?;
        self.call(request).await?;
        Ok(())
    }

    /// Read the auto-renew flag.
    pub async fn get_renew(&self, domain: &Domain) -> Result<bool> {
        let response = self.call(Request::new("GetRenew").domain(domain)).await?;
        response
            .boolean("RenewFlag")
            .ok_or_else(|| EnomError::Parse("response missing <RenewFlag>".to_string()))
    }
}
