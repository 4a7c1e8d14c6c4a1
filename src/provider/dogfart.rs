//! Adapter for the Dogfart Network site family.
//!
//! Search results come from the network-wide search endpoint and are
//! scored against the subsite the caller addressed: a hit on that
//! subsite scores from a 100 base, a cross-listed hit from a partner
//! subsite from a 60 base, minus the title's edit distance in both
//! cases. Metadata and images are scraped from the scene's detail page
//! addressed by a composite ID.

use async_trait::async_trait;
use chrono::NaiveDate;
use scraper::Html;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::{html, matching, text};

use super::models::{ImageRole, RemoteImage, ResolvedItem, SearchCandidate};
use super::scene_id::{SceneId, SiteSelector};
use super::sites::{self, DOGFART_STUDIO};
use super::SiteProvider;

// Extraction rules, one set per operation.
const SEARCH_CARD: &str = r#"a[class*="thumbnail"]"#;
const SEARCH_TITLE: &str = "div > h3.scene-title";
const SEARCH_POSTER: &str = "img";
const SEARCH_SUBSITE: &str = "div > p.help-block";

const DETAIL_TITLE: &str = "div.icon-container > a";
const DETAIL_OVERVIEW: &str = r#"div[class*="description"]"#;
const DETAIL_GENRES: &str = "div.categories p a";
const DETAIL_PERFORMERS: &str = "h4.more-scenes a";

const IMAGE_POSTER: &str = "div.icon-container img";
const IMAGE_PREVIEW_ANCHORS: &str = r#"div[class*="preview-image-container"] a"#;
const IMAGE_FULL_SIZE: &str = r#"div[class*="remove-bs-padding"] img"#;

const READ_MORE_SUFFIX: &str = "...read more";

pub struct DogfartNetwork {
    fetcher: Box<dyn PageFetcher>,
}

impl DogfartNetwork {
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::new()))
    }

    /// Create the adapter with a custom fetcher (for testing).
    pub fn with_fetcher(fetcher: Box<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }
}

impl Default for DogfartNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SiteProvider for DogfartNetwork {
    fn name(&self) -> &'static str {
        "metascout"
    }

    async fn search(
        &self,
        site: SiteSelector,
        title: &str,
        date: Option<NaiveDate>,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchCandidate>> {
        let mut candidates = Vec::new();

        let Some(config) = sites::find(site) else {
            return Ok(candidates);
        };
        if title.is_empty() {
            return Ok(candidates);
        }

        // The query title rides raw; escaping is the transport's job.
        let url = format!("{}{}", config.search_url, title);
        let body = self.fetcher.fetch(&url, cancel).await?;

        let document = Html::parse_document(&body);
        for card in html::select_all(&document, SEARCH_CARD) {
            let href = card.value().attr("href").unwrap_or_default();
            let href = href.split('?').next().unwrap_or_default();
            let detail_url = format!("{}{}", config.base_url, href);

            let scene_title = html::select_text(card, SEARCH_TITLE);
            let poster = format!("https:{}", html::select_attr(card, SEARCH_POSTER, "src"));
            let subsite =
                text::remove_ignore_case(&html::select_text(card, SEARCH_SUBSITE), ".com");

            let on_canonical = subsite.eq_ignore_ascii_case(config.name);

            candidates.push(SearchCandidate {
                name: format!("{} from {}", scene_title, subsite),
                image_url: poster,
                scene_id: SceneId::new(site, detail_url, date).serialize(),
                relevance: matching::relevance(title, &scene_title, on_canonical),
                premiere_date: date,
            });
        }

        log::info!(
            "dogfart: {} candidate(s) for '{}' on {}",
            candidates.len(),
            title,
            config.name
        );
        Ok(candidates)
    }

    async fn fetch_metadata(
        &self,
        _site: SiteSelector,
        scene_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ResolvedItem> {
        let Some(id) = scene_id.and_then(SceneId::parse) else {
            return Ok(ResolvedItem::default());
        };

        let body = self.fetcher.fetch(&id.detail_url, cancel).await?;

        let document = Html::parse_document(&body);
        let mut item = ResolvedItem {
            studio: DOGFART_STUDIO.to_string(),
            external_id: id.detail_url.clone(),
            premiere_date: id.date,
            ..ResolvedItem::default()
        };

        item.title = html::doc_attr(&document, DETAIL_TITLE, "title");
        item.overview =
            text::remove_ignore_case(&html::doc_text(&document, DETAIL_OVERVIEW), READ_MORE_SUFFIX)
                .trim()
                .to_string();

        for genre in html::select_all(&document, DETAIL_GENRES) {
            item.genres.push(html::element_text(genre));
        }
        for performer in html::select_all(&document, DETAIL_PERFORMERS) {
            item.performers.push(html::element_text(performer));
        }

        log::debug!("dogfart: resolved '{}' from {}", item.title, id.detail_url);
        Ok(item)
    }

    async fn fetch_images(
        &self,
        site: SiteSelector,
        scene_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteImage>> {
        let mut images = Vec::new();

        let Some(id) = scene_id.and_then(SceneId::parse) else {
            return Ok(images);
        };
        let Some(config) = sites::find(site) else {
            return Ok(images);
        };

        let body = self.fetcher.fetch(&id.detail_url, cancel).await?;

        // The HTML tree is not Send; pull everything out of it before
        // the follow-up fetches.
        let preview_urls: Vec<String> = {
            let document = Html::parse_document(&body);

            let poster = html::doc_attr(&document, IMAGE_POSTER, "src");
            if !poster.is_empty() {
                images.push(RemoteImage {
                    url: format!("https:{}", poster),
                    role: ImageRole::Primary,
                });
            }

            html::select_all(&document, IMAGE_PREVIEW_ANCHORS)
                .into_iter()
                .filter_map(|anchor| anchor.value().attr("href"))
                .map(|href| format!("{}{}", config.base_url, href))
                .collect()
        };

        // One extra fetch per preview anchor, in document order.
        for preview_url in preview_urls {
            let page = self.fetcher.fetch(&preview_url, cancel).await?;
            let full_size = {
                let document = Html::parse_document(&page);
                html::doc_attr(&document, IMAGE_FULL_SIZE, "src")
            };
            if !full_size.is_empty() {
                images.push(RemoteImage {
                    url: full_size,
                    role: ImageRole::Secondary,
                });
            }
        }

        log::debug!("dogfart: {} image(s) for {}", images.len(), id.detail_url);
        Ok(images)
    }
}
