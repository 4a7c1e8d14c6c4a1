//! Composite scene identifiers.
//!
//! The host persists one opaque string per scene and hands it back for
//! metadata and image fetches, possibly across process restarts, so the
//! wire format must stay stable:
//!
//! ```text
//! {family}#{variant}#{base64url(detail_url)}[#{YYYY-MM-DD}]
//! ```
//!
//! The URL segment is base64url without padding. That alphabet never
//! contains `#`, so splitting on the delimiter is unambiguous no matter
//! what characters the raw detail URL held.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const DELIMITER: char = '#';
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which adapter family and subsite variant a call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteSelector {
    pub family: u16,
    pub variant: u16,
}

impl SiteSelector {
    pub const fn new(family: u16, variant: u16) -> Self {
        Self { family, variant }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.family, DELIMITER, self.variant)
    }
}

/// Encodes an arbitrary string into a delimiter-free opaque token.
pub fn encode_id(raw: &str) -> String {
    URL_SAFE_NO_PAD.encode(raw)
}

/// Reverses [`encode_id`]. `None` for tokens that were not produced by
/// it (bad alphabet, bad UTF-8).
pub fn decode_id(token: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
    String::from_utf8(bytes).ok()
}

/// Parsed form of a composite scene ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneId {
    pub site: SiteSelector,
    pub detail_url: String,
    pub date: Option<NaiveDate>,
}

impl SceneId {
    pub fn new(site: SiteSelector, detail_url: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            site,
            detail_url: detail_url.into(),
            date,
        }
    }

    /// Renders the stable composite string handed to the host.
    pub fn serialize(&self) -> String {
        let mut id = format!("{}{}{}", self.site, DELIMITER, encode_id(&self.detail_url));
        if let Some(date) = self.date {
            id.push(DELIMITER);
            id.push_str(&date.format(DATE_FORMAT).to_string());
        }
        id
    }

    /// Parses a composite string back into its fields.
    ///
    /// Returns `None` for anything that is not a 3- or 4-field composite
    /// with a valid selector and URL token. A malformed date segment is
    /// swallowed (the URL still resolves, the date is just absent).
    pub fn parse(raw: &str) -> Option<Self> {
        let fields: Vec<&str> = raw.split(DELIMITER).collect();
        if fields.len() < 3 || fields.len() > 4 {
            return None;
        }

        let family = fields[0].parse().ok()?;
        let variant = fields[1].parse().ok()?;
        let detail_url = decode_id(fields[2])?;
        let date = fields
            .get(3)
            .and_then(|segment| NaiveDate::parse_from_str(segment, DATE_FORMAT).ok());

        Some(Self {
            site: SiteSelector::new(family, variant),
            detail_url,
            date,
        })
    }
}
