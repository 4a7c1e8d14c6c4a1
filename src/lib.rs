//! Site metadata provider adapters.
//!
//! Given a free-text title, an adapter locates matching scenes on its
//! catalog site and hands back scored candidates carrying opaque
//! composite IDs. Given one of those IDs, it scrapes the scene's detail
//! page into normalized metadata and an image set.
//!
//! # Example
//!
//! ```no_run
//! use metascout::{DogfartNetwork, SiteProvider, SiteSelector};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> metascout::Result<()> {
//!     let provider = DogfartNetwork::new();
//!     let site = SiteSelector::new(24, 0);
//!     let cancel = CancellationToken::new();
//!
//!     let mut candidates = provider
//!         .search(site, "Amateur Night", None, &cancel)
//!         .await?;
//!     candidates.sort_by(|a, b| b.relevance.cmp(&a.relevance));
//!
//!     if let Some(best) = candidates.first() {
//!         let item = provider
//!             .fetch_metadata(site, Some(best.scene_id.as_str()), &cancel)
//!             .await?;
//!         println!("{}: {}", item.title, item.overview);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
pub mod fetch;
pub mod html;
pub mod matching;
pub mod provider;
mod text;

pub use error::{ProviderError, Result};
pub use fetch::{HttpFetcher, PageFetcher};
pub use provider::dogfart::DogfartNetwork;
pub use provider::models::{ImageRole, RemoteImage, ResolvedItem, SearchCandidate};
pub use provider::scene_id::{decode_id, encode_id, SceneId, SiteSelector};
pub use provider::sites::{SiteConfig, DOGFART_FAMILY, DOGFART_STUDIO};
pub use provider::SiteProvider;
