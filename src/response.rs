/// Response interpreter.
///
/// Wraps the raw XML body with typed field accessors and the envelope checks
/// every operation shares: the `ErrCount`/`Err{n}` error list and the
/// `RRPCode` result code. One call yields one terminal outcome; there is no
/// retry or partial-result logic here.

use chrono::{DateTime, Utc};

use crate::error::{EnomError, ErrorDetail, RemoteErrors, Result};
use crate::xml;

/// The registry's date format: `01/02/2024 3:04:05 PM` plus a `+0000` style
/// UTC offset carried in a separate field.
const DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p %z";

/// Combine a date string and a UTC offset string into a single UTC timestamp.
pub fn parse_registry_date(date: &str, offset: &str) -> Result<DateTime<Utc>> {
    let combined = format!("{} {}", date.trim(), offset.trim());
    DateTime::parse_from_str(&combined, DATE_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EnomError::Parse(format!("bad date {:?} {:?}: {}", date, offset, e)))
}

/// A parsed response document.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    body: String,
}

impl ApiResponse {
    pub fn new(body: String) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Text content of a top-level tag.
    pub fn text(&self, tag: &str) -> Option<String> {
        xml::tag_text(&self.body, tag)
    }

    /// Like `text`, but a missing field is a parse error.
    pub fn require(&self, tag: &str) -> Result<String> {
        self.text(tag)
            .ok_or_else(|| EnomError::Parse(format!("response missing <{}>", tag)))
    }

    pub fn uint(&self, tag: &str) -> Option<u64> {
        self.text(tag)?.parse().ok()
    }

    pub fn float(&self, tag: &str) -> Option<f64> {
        self.text(tag)?.parse().ok()
    }

    /// Registry booleans arrive as `True`/`true`/`1` (and their negatives).
    pub fn boolean(&self, tag: &str) -> Option<bool> {
        match self.text(tag)?.to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        }
    }

    /// Combine a date field with a UTC offset field into one UTC timestamp.
    pub fn date(&self, date_tag: &str, offset_tag: &str) -> Result<DateTime<Utc>> {
        let date = self.require(date_tag)?;
        let offset = self.require(offset_tag)?;
        parse_registry_date(&date, &offset)
    }

    pub fn err_count(&self) -> u64 {
        self.uint("ErrCount").unwrap_or(0)
    }

    /// Collect the `Err1..ErrN` list with its source/section companions.
    /// The registry numbers the tags contiguously, so the scan stops at the
    /// first gap; `ErrCount` alone is not trusted as a loop bound.
    pub fn errors(&self) -> Vec<ErrorDetail> {
        let count = self.err_count();
        let mut errors = Vec::new();
        for n in 1..=count {
            let Some(text) = self.text(&format!("Err{}", n)) else {
                break;
            };
            errors.push(ErrorDetail {
                text,
                source: self.text(&format!("ErrSource{}", n)),
                section: self.text(&format!("ErrSection{}", n)),
            });
        }
        errors
    }

    pub fn rrp_code(&self) -> Option<u32> {
        self.text("RRPCode")?.parse().ok()
    }

    pub fn rrp_text(&self) -> String {
        self.text("RRPText").unwrap_or_default()
    }

    pub fn done(&self) -> bool {
        self.boolean("Done").unwrap_or(false)
    }

    /// Uniform envelope check: non-zero `ErrCount` means the call failed.
    pub fn check_errors(&self) -> Result<()> {
        if self.err_count() > 0 {
            return Err(EnomError::Remote(RemoteErrors(self.errors())));
        }
        Ok(())
    }
}
