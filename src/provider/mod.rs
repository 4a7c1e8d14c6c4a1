//! The site-adapter contract and its implementations.

pub mod dogfart;
pub mod models;
pub mod scene_id;
pub mod sites;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use models::{RemoteImage, ResolvedItem, SearchCandidate};
use scene_id::SiteSelector;

/// A site adapter: resolves free-text titles to scene candidates and
/// scrapes metadata and images for a resolved composite ID.
///
/// All three operations soft-fail on missing input: an empty title, an
/// unregistered selector or an absent/unparseable `scene_id` produce an
/// empty or default result, never an error. Only transport failures and
/// cancellation propagate.
#[async_trait]
pub trait SiteProvider: Send + Sync {
    /// Stable per-process provider name; the namespace key under which
    /// hosts store composite IDs.
    fn name(&self) -> &'static str;

    /// Searches the site for scenes matching `title`, returning scored,
    /// unsorted candidates. A supplied `date` is embedded in each
    /// candidate's composite ID and echoed as its premiere date.
    async fn search(
        &self,
        site: SiteSelector,
        title: &str,
        date: Option<NaiveDate>,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchCandidate>>;

    /// Fetches and normalizes the detail-page metadata for a composite
    /// ID previously produced by [`search`](Self::search).
    async fn fetch_metadata(
        &self,
        site: SiteSelector,
        scene_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ResolvedItem>;

    /// Collects the primary image and any secondary images for a
    /// composite ID. Each secondary image costs one extra page fetch.
    async fn fetch_images(
        &self,
        site: SiteSelector,
        scene_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteImage>>;
}
