//! Result models handed back to the host.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One matched scene from a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Display title, `"{scene title} from {subsite}"`.
    pub name: String,
    /// Absolute thumbnail URL.
    pub image_url: String,
    /// Serialized composite ID; the durable handle for follow-up calls.
    pub scene_id: String,
    /// Higher is better. Not unique; the host sorts.
    pub relevance: i32,
    /// Echo of the search date, when one was supplied.
    pub premiere_date: Option<NaiveDate>,
}

/// Normalized metadata scraped from a scene's detail page.
///
/// Fields the page did not yield stay empty rather than failing the
/// fetch. Genre and performer lists keep the page's encounter order and
/// are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub title: String,
    pub overview: String,
    pub studio: String,
    /// The scene's detail-page URL.
    pub external_id: String,
    pub premiere_date: Option<NaiveDate>,
    pub genres: Vec<String>,
    pub performers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRole {
    Primary,
    Secondary,
}

/// One image associated with a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteImage {
    pub url: String,
    pub role: ImageRole,
}
