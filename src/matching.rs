//! Title similarity and the two-tier relevance score used to rank
//! search candidates.

/// Score base for candidates found on the adapter's canonical subsite.
pub const CANONICAL_BASE: i32 = 100;

/// Score base for candidates cross-listed from a partner subsite.
///
/// The 40-point gap means a canonical hit outranks a partner-site hit
/// unless the partner title is a dramatically closer match.
pub const CROSS_LISTED_BASE: i32 = 60;

/// Case-insensitive Levenshtein distance between two titles.
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Relevance of a candidate title against the search query.
///
/// Higher is better; values can go negative for wildly dissimilar
/// titles. The caller sorts, this crate never does.
pub fn relevance(query: &str, candidate_title: &str, on_canonical_site: bool) -> i32 {
    let base = if on_canonical_site {
        CANONICAL_BASE
    } else {
        CROSS_LISTED_BASE
    };

    base - distance(query, candidate_title) as i32
}
