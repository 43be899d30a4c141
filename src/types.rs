/// Value objects shared by the operation methods.
///
/// Requests are built from these and responses are decoded back into them;
/// result records (`ExtendInfo`, `WhoisContacts`, ...) are created per call
/// and have no lifecycle of their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EnomError, Result};
use crate::xml;

/// Form-field prefix for the four contact roles the registry knows about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactPrefix {
    Registrant,
    Admin,
    Tech,
    #[serde(rename = "auxbilling")]
    AuxBilling,
}

impl ContactPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registrant => "Registrant",
            Self::Admin => "Admin",
            Self::Tech => "Tech",
            Self::AuxBilling => "AuxBilling",
        }
    }
}

impl std::fmt::Display for ContactPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registrant/contact record.
///
/// Maps two ways to the wire format: prefixed form-field names on requests
/// (`RegistrantFirstName`, `AdminEmailAddress`, ...) and unprefixed tags
/// inside WHOIS `<contacts>` blocks on responses. Once handed to an
/// operation the record is only read, never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub organization: Option<String>,
    pub job_title: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state_province: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub phone_ext: Option<String>,
    pub fax: Option<String>,
    pub email: String,
}

impl Contact {
    /// Every required sub-field must be present before submission.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address1", &self.address1),
            ("city", &self.city),
            ("postal code", &self.postal_code),
            ("country", &self.country),
            ("phone", &self.phone),
            ("email", &self.email),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(EnomError::Validation(format!(
                    "contact is missing required field: {}",
                    label
                )));
            }
        }
        Ok(())
    }

    /// Encode as prefixed wire parameters. Optional fields are omitted when
    /// unset rather than sent empty.
    pub fn to_params(&self, prefix: ContactPrefix) -> Vec<(String, String)> {
        let p = prefix.as_str();
        let mut params = vec![
            (format!("{}FirstName", p), self.first_name.clone()),
            (format!("{}LastName", p), self.last_name.clone()),
            (format!("{}Address1", p), self.address1.clone()),
            (format!("{}City", p), self.city.clone()),
            (format!("{}PostalCode", p), self.postal_code.clone()),
            (format!("{}Country", p), self.country.clone()),
            (format!("{}Phone", p), self.phone.clone()),
            (format!("{}EmailAddress", p), self.email.clone()),
        ];
        let optional = [
            ("OrganizationName", &self.organization),
            ("JobTitle", &self.job_title),
            ("Address2", &self.address2),
            ("StateProvince", &self.state_province),
            ("PhoneExt", &self.phone_ext),
            ("Fax", &self.fax),
        ];
        for (field, value) in optional {
            if let Some(v) = value {
                if !v.is_empty() {
                    params.push((format!("{}{}", p, field), v.clone()));
                }
            }
        }
        params
    }

    /// Decode from prefixed wire parameters (the inverse of `to_params`).
    pub fn from_params(params: &[(String, String)], prefix: ContactPrefix) -> Self {
        let p = prefix.as_str();
        let get = |field: &str| {
            let key = format!("{}{}", p, field);
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };
        let opt = |field: &str| Some(get(field)).filter(|v| !v.is_empty());
        Self {
            first_name: get("FirstName"),
            last_name: get("LastName"),
            organization: opt("OrganizationName"),
            job_title: opt("JobTitle"),
            address1: get("Address1"),
            address2: opt("Address2"),
            city: get("City"),
            state_province: opt("StateProvince"),
            postal_code: get("PostalCode"),
            country: get("Country"),
            phone: get("Phone"),
            phone_ext: opt("PhoneExt"),
            fax: opt("Fax"),
            email: get("EmailAddress"),
        }
    }

    /// Decode from the unprefixed tags inside a WHOIS `<contacts>` block.
    pub fn from_element(element: &str) -> Self {
        let get = |tag: &str| xml::tag_text(element, tag).unwrap_or_default();
        let opt = |tag: &str| xml::tag_text(element, tag).filter(|v| !v.is_empty());
        Self {
            first_name: get("FirstName"),
            last_name: get("LastName"),
            organization: opt("OrganizationName"),
            job_title: opt("JobTitle"),
            address1: get("Address1"),
            address2: opt("Address2"),
            city: get("City"),
            state_province: opt("StateProvince"),
            postal_code: get("PostalCode"),
            country: get("Country"),
            phone: get("Phone"),
            phone_ext: opt("PhoneExt"),
            fax: opt("Fax"),
            email: get("EmailAddress"),
        }
    }
}

/// A domain name split at its first dot into the second-level and top-level
/// components the wire format wants (`SLD` / `TLD`). Multi-label suffixes
/// like `co.uk` ride in the tld component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Domain {
    sld: String,
    tld: String,
}

impl Domain {
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim().trim_end_matches('.');
        let (sld, tld) = name.split_once('.').ok_or_else(|| {
            EnomError::Validation(format!("invalid domain {:?}: missing dot", name))
        })?;
        if sld.is_empty() || tld.is_empty() {
            return Err(EnomError::Validation(format!(
                "invalid domain {:?}: expected name.suffix",
                name
            )));
        }
        Ok(Self {
            sld: sld.to_lowercase(),
            tld: tld.to_lowercase(),
        })
    }

    pub fn sld(&self) -> &str {
        &self.sld
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    pub fn name(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }
}

impl std::str::FromStr for Domain {
    type Err = EnomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

/// Host record types the registry accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HostRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Url,
    Frame,
}

impl HostRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Url => "URL",
            Self::Frame => "FRAME",
        }
    }
}

impl std::str::FromStr for HostRecordType {
    type Err = EnomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "TXT" => Ok(Self::Txt),
            "URL" => Ok(Self::Url),
            "FRAME" => Ok(Self::Frame),
            other => Err(EnomError::Validation(format!(
                "unsupported host record type: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for HostRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One host record on a domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostRecord {
    pub name: String,
    pub record_type: HostRecordType,
    pub address: String,
    /// MX preference; only meaningful for MX records.
    pub mx_pref: Option<u16>,
}

/// Outcome of a purchase or extend order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Completed synchronously (real-time TLD).
    Registered,
    /// Order accepted and queued for later fulfilment.
    Queued,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResult {
    pub domain: String,
    pub order_id: u64,
    pub status: OrderStatus,
    pub text: String,
}

/// Renewal info for a domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtendInfo {
    /// Current expiration, normalised to UTC.
    pub expiration: DateTime<Utc>,
    pub min_extension: u32,
    pub max_extension: u32,
    pub registrar_hold: bool,
    pub auto_renew: bool,
}

/// WHOIS contacts partitioned by the `ContactType` discriminator, plus the
/// registry dates and nameserver list that ride along in the same response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhoisContacts {
    pub registrant: Option<Contact>,
    pub administrative: Option<Contact>,
    pub technical: Option<Contact>,
    pub billing: Option<Contact>,
    pub created: Option<DateTime<Utc>>,
    pub expires: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub nameservers: Vec<String>,
}

/// One selectable value for an extended attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeOption {
    pub id: u32,
    pub value: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A per-TLD registry attribute descriptor (ccTLD extra fields).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtendedAttribute {
    pub id: u32,
    pub name: String,
    pub value: Option<String>,
    pub required: bool,
    pub application: u32,
    pub description: Option<String>,
    pub options: Vec<AttributeOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> Contact {
        Contact {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            organization: Some("Analytical Engines Ltd".into()),
            job_title: None,
            address1: "12 St James Square".into(),
            address2: Some("Suite 3".into()),
            city: "London".into(),
            state_province: None,
            postal_code: "SW1Y 4JH".into(),
            country: "GB".into(),
            phone: "+44.2070000000".into(),
            phone_ext: None,
            fax: Some("+44.2070000001".into()),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn contact_params_round_trip_every_prefix() {
        let contact = sample_contact();
        for prefix in [
            ContactPrefix::Registrant,
            ContactPrefix::Admin,
            ContactPrefix::Tech,
            ContactPrefix::AuxBilling,
        ] {
            let params = contact.to_params(prefix);
            assert_eq!(Contact::from_params(&params, prefix), contact);
        }
    }

    #[test]
    fn contact_params_are_prefixed() {
        let params = sample_contact().to_params(ContactPrefix::Registrant);
        assert!(params.iter().all(|(k, _)| k.starts_with("Registrant")));
        assert!(params
            .iter()
            .any(|(k, v)| k == "RegistrantFirstName" && v == "Ada"));
        // Unset optionals are omitted entirely.
        assert!(!params.iter().any(|(k, _)| k == "RegistrantJobTitle"));
    }

    #[test]
    fn contact_validation_names_missing_field() {
        let mut contact = sample_contact();
        contact.email = String::new();
        let err = contact.validate().unwrap_err();
        assert!(err.to_string().contains("email"));
        assert!(sample_contact().validate().is_ok());
    }

    #[test]
    fn domain_splits_at_first_dot() {
        let d = Domain::parse("Example.CO.UK").unwrap();
        assert_eq!(d.sld(), "example");
        assert_eq!(d.tld(), "co.uk");
        assert_eq!(d.name(), "example.co.uk");
    }

    #[test]
    fn domain_rejects_malformed_names() {
        assert!(Domain::parse("nodot").is_err());
        assert!(Domain::parse(".com").is_err());
        assert!(Domain::parse("example.").is_err());
        assert!(Domain::parse("").is_err());
    }

    #[test]
    fn host_record_type_parsing() {
        assert_eq!("mx".parse::<HostRecordType>().unwrap(), HostRecordType::Mx);
        assert_eq!(HostRecordType::Aaaa.as_str(), "AAAA");
        assert!("SPF".parse::<HostRecordType>().is_err());
    }
}
