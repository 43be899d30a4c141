/// Request builder.
///
/// A request is an operation (command) name plus an ordered list of
/// form-field parameters. Typed appenders keep the encoding rules in one
/// place: booleans go out as `1`/`0`, contacts expand to their prefixed
/// field set, nameserver lists apply the registrar-DNS fallback.

use crate::error::{EnomError, Result};
use crate::types::{Contact, ContactPrefix, Domain};

/// The registry caps nameserver lists at twelve entries.
pub const MAX_NAMESERVERS: usize = 12;

#[derive(Debug, Clone)]
pub struct Request {
    command: String,
    params: Vec<(String, String)>,
}

impl Request {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            params: Vec::new(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn int(self, key: impl Into<String>, value: i64) -> Self {
        self.param(key, value.to_string())
    }

    /// Booleans encode as the registry's `1`/`0`.
    pub fn flag(self, key: impl Into<String>, value: bool) -> Self {
        self.param(key, if value { "1" } else { "0" })
    }

    /// Append `SLD`/`TLD` for a domain.
    pub fn domain(self, domain: &Domain) -> Self {
        self.param("SLD", domain.sld()).param("TLD", domain.tld())
    }

    /// Expand a contact into its prefixed field set.
    pub fn contact(mut self, contact: &Contact, prefix: ContactPrefix) -> Self {
        self.params.extend(contact.to_params(prefix));
        self
    }

    /// Encode a nameserver list. Empty falls back to registrar-hosted DNS
    /// (`UseDNS=default`); otherwise `NS1..NSn`, at most twelve.
    pub fn nameservers(mut self, nameservers: &[String]) -> Result<Self> {
        if nameservers.len() > MAX_NAMESERVERS {
            return Err(EnomError::Validation(format!(
                "at most {} nameservers allowed, got {}",
                MAX_NAMESERVERS,
                nameservers.len()
            )));
        }
        if nameservers.is_empty() {
            self.params.push(("UseDNS".to_string(), "default".to_string()));
        } else {
            for (i, ns) in nameservers.iter().enumerate() {
                self.params.push((format!("NS{}", i + 1), ns.clone()));
            }
        }
        Ok(self)
    }

    /// The auto-renew flag only takes 0 or 1.
    pub fn renew_flag(self, flag: u8) -> Result<Self> {
        if flag > 1 {
            return Err(EnomError::Validation(format!(
                "renew flag must be 0 or 1, got {}",
                flag
            )));
        }
        Ok(self.int("RenewFlag", i64::from(flag)))
    }
}
