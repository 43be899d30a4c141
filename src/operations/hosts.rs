/// Host record management.
///
/// `set_hosts` replaces the full record set: the registry treats the numbered
/// `HostName{n}`/`RecordType{n}`/`Address{n}` parameters as the new truth for
/// the zone.

use std::str::FromStr;

use crate::client::EnomClient;
use crate::error::{EnomError, Result};
use crate::request::Request;
use crate::types::{Domain, HostRecord, HostRecordType};
use crate::xml;

impl EnomClient {
    pub async fn get_hosts(&self, domain: &Domain) -> Result<Vec<HostRecord>> {
        let response = self.call(Request::new("GetHosts").domain(domain)).await?;

        let mut hosts = Vec::new();
        for block in xml::elements(response.body(), "host") {
            let type_text = xml::tag_text(block, "type")
                .ok_or_else(|| EnomError::Parse("host entry missing <type>".to_string()))?;
            let record_type = HostRecordType::from_str(&type_text).map_err(|_| {
                EnomError::Parse(format!("unsupported record type in response: {}", type_text))
            })?;
            hosts.push(HostRecord {
                name: xml::tag_text(block, "name").unwrap_or_default(),
                record_type,
                address: xml::tag_text(block, "address")
                    .ok_or_else(|| EnomError::Parse("host entry missing <address>".to_string()))?,
                mx_pref: xml::tag_text(block, "mxpref").and_then(|p| p.parse().ok()),
            });
        }
        Ok(hosts)
    }

    pub async fn set_hosts(&self, domain: &Domain, records: &[HostRecord]) -> Result<()> {
        let mut request = Request::new("SetHosts").domain(domain);
        for (i, record) in records.iter().enumerate() {
            let n = i + 1;
            request = request
                .param(format!("HostName{}", n), record.name.clone())
                .param(format!("RecordType{}", n), record.record_type.as_str())
                .param(format!("Address{}", n), record.address.clone());
            if record.record_type == HostRecordType::Mx {
                request = request.int(format!("MXPref{}", n), i64::from(record.mx_pref.unwrap_or(10)));
            }
        }
        self.call(request).await?;
        Ok(())
    }
}
