/// Extended registry attributes.
///
/// Some ccTLDs require extra registrant data at purchase time. The registry
/// describes them per TLD as nested `Attributes/Attribute/Options` blocks;
/// the values themselves go back out as plain purchase parameters.

use crate::client::EnomClient;
use crate::error::{EnomError, Result};
use crate::request::Request;
use crate::types::{AttributeOption, ExtendedAttribute};
use crate::xml;

fn parse_option(block: &str) -> Option<AttributeOption> {
    Some(AttributeOption {
        id: xml::tag_text(block, "ID")?.parse().ok()?,
        value: xml::tag_text(block, "Value")?,
        title: xml::tag_text(block, "Title").filter(|t| !t.is_empty()),
        description: xml::tag_text(block, "Description").filter(|d| !d.is_empty()),
    })
}

fn parse_attribute(block: &str) -> Option<ExtendedAttribute> {
    // Options nest ID/Value/Description tags of their own, so the attribute's
    // fields are scanned with the <Options> block cut out.
    let (own, options) = match xml::element(block, "Options") {
        Some(opts) => {
            let parsed = xml::elements(opts, "Option")
                .into_iter()
                .filter_map(parse_option)
                .collect();
            (block.replacen(opts, "", 1), parsed)
        }
        None => (block.to_string(), Vec::new()),
    };

    Some(ExtendedAttribute {
        id: xml::tag_text(&own, "ID")?.parse().ok()?,
        name: xml::tag_text(&own, "Name")?,
        value: xml::tag_text(&own, "Value").filter(|v| !v.is_empty()),
        required: xml::tag_text(&own, "Required").map(|r| r == "1").unwrap_or(false),
        application: xml::tag_text(&own, "Application")
            .and_then(|a| a.parse().ok())
            .unwrap_or(0),
        description: xml::tag_text(&own, "Description").filter(|d| !d.is_empty()),
        options,
    })
}

impl EnomClient {
    /// Attribute descriptors for a TLD (leading dot tolerated).
    pub async fn get_ext_attributes(&self, tld: &str) -> Result<Vec<ExtendedAttribute>> {
        let tld = tld.trim().trim_start_matches('.');
        if tld.is_empty() {
            return Err(EnomError::Validation("TLD must not be empty".to_string()));
        }
        let response = self
            .call(Request::new("GetExtAttributes").param("TLD", tld))
            .await?;

        // Options blocks nest an ID/Value pair of their own, so attributes
        // must be parsed per <Attribute> element, not across the whole body.
        Ok(xml::elements(response.body(), "Attribute")
            .into_iter()
            .filter_map(parse_attribute)
            .collect())
    }
}
