//! Static site registry for the Dogfart Network family.
//!
//! The host addresses subsites by a `{family}#{variant}` selector pair;
//! this table maps the pair to the subsite's canonical name (the scoring
//! anchor for search results), its base URL (detail links are
//! site-relative) and its search endpoint.

use super::scene_id::SiteSelector;

/// Adapter family number for the Dogfart Network.
pub const DOGFART_FAMILY: u16 = 24;

/// Studio label stamped on every resolved item from this family.
pub const DOGFART_STUDIO: &str = "Dogfart Network";

pub struct SiteConfig {
    pub selector: SiteSelector,
    /// Canonical subsite label as it appears in search-result cards
    /// (without the `.com` suffix).
    pub name: &'static str,
    pub base_url: &'static str,
    pub search_url: &'static str,
}

static SITES: &[SiteConfig] = &[
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 0),
        name: "BlacksOnBlondes",
        base_url: "https://blacksonblondes.com",
        search_url: "https://blacksonblondes.com/tour/search/?st=advanced&qall=",
    },
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 1),
        name: "CuckoldSessions",
        base_url: "https://cuckoldsessions.com",
        search_url: "https://cuckoldsessions.com/tour/search/?st=advanced&qall=",
    },
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 2),
        name: "CumBang",
        base_url: "https://cumbang.com",
        search_url: "https://cumbang.com/tour/search/?st=advanced&qall=",
    },
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 3),
        name: "GloryHole",
        base_url: "https://gloryhole.com",
        search_url: "https://gloryhole.com/tour/search/?st=advanced&qall=",
    },
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 4),
        name: "InterracialBlowbang",
        base_url: "https://interracialblowbang.com",
        search_url: "https://interracialblowbang.com/tour/search/?st=advanced&qall=",
    },
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 5),
        name: "InterracialPickups",
        base_url: "https://interracialpickups.com",
        search_url: "https://interracialpickups.com/tour/search/?st=advanced&qall=",
    },
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 6),
        name: "WatchingMyDaughterGoBlack",
        base_url: "https://watchingmydaughtergoblack.com",
        search_url: "https://watchingmydaughtergoblack.com/tour/search/?st=advanced&qall=",
    },
    SiteConfig {
        selector: SiteSelector::new(DOGFART_FAMILY, 7),
        name: "ZebraGirls",
        base_url: "https://zebragirls.com",
        search_url: "https://zebragirls.com/tour/search/?st=advanced&qall=",
    },
];

/// Looks up the configuration for a selector pair, `None` when the
/// selector addresses no registered subsite.
pub fn find(selector: SiteSelector) -> Option<&'static SiteConfig> {
    SITES.iter().find(|site| site.selector == selector)
}
