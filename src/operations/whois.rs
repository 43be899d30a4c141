/// WHOIS contact retrieval.
///
/// The response carries one `<contacts>` block per role, discriminated by a
/// `ContactType` attribute, plus an `<rrp-info>` block with the registry
/// dates and nameserver list.

use crate::client::EnomClient;
use crate::error::Result;
use crate::request::Request;
use crate::response::parse_registry_date;
use crate::types::{Contact, Domain, WhoisContacts};
use crate::xml;

impl EnomClient {
    pub async fn get_whois_contact(&self, domain: &Domain) -> Result<WhoisContacts> {
        let response = self
            .call(Request::new("GetWhoisContact").domain(domain))
            .await?;
        let body = response.body();

        let mut whois = WhoisContacts::default();
        for block in xml::elements(body, "contacts") {
            let Some(kind) = xml::attr(block, "ContactType") else {
                continue;
            };
            let contact = Some(Contact::from_element(block));
            match kind.to_lowercase().as_str() {
                "registrant" => whois.registrant = contact,
                "administrative" | "admin" => whois.administrative = contact,
                "technical" | "tech" => whois.technical = contact,
                "billing" | "auxbilling" => whois.billing = contact,
                // Unknown discriminators are ignored, not an error.
                _ => {}
            }
        }

        if let Some(info) = xml::element(body, "rrp-info") {
            let offset = response.text("TimeZone").unwrap_or_else(|| "+0000".to_string());
            let date = |tag: &str| {
                xml::tag_text(info, tag).and_then(|d| parse_registry_date(&d, &offset).ok())
            };
            whois.created = date("created-date");
            whois.expires = date("registration-expiration-date");
            whois.updated = date("updated-date");
            whois.nameservers = xml::elements(info, "nameserver")
                .into_iter()
                .map(|e| xml::inner(e).trim().to_string())
                .filter(|ns| !ns.is_empty())
                .collect();
        }

        Ok(whois)
    }
}
