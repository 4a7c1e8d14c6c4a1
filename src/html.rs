//! Soft-fail query helpers over a parsed HTML tree.
//!
//! Extraction misses are a fact of life when scraping: a selector that
//! matches nothing yields an empty vec or empty string, never an error.
//! An unparseable selector gets the same treatment (plus a log line),
//! since a broken extraction rule should demote a field, not abort the
//! whole fetch.

use scraper::{ElementRef, Html, Selector};

/// All elements under `document` matching `selector`.
pub fn select_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => document.select(&sel).collect(),
        Err(err) => {
            log::warn!("invalid selector '{}': {}", selector, err);
            Vec::new()
        }
    }
}

/// Trimmed text content of the first element under `node` matching
/// `selector`, or an empty string.
pub fn select_text(node: ElementRef<'_>, selector: &str) -> String {
    first_under(node, selector)
        .map(element_text)
        .unwrap_or_default()
}

/// Value of `attr` on the first element under `node` matching
/// `selector` that carries the attribute, or an empty string.
///
/// Skipping matches without the attribute mirrors an `@attr` axis
/// query: a decorative element ahead of the one holding the value must
/// not blank the field.
pub fn select_attr(node: ElementRef<'_>, selector: &str, attr: &str) -> String {
    match Selector::parse(selector) {
        Ok(sel) => node
            .select(&sel)
            .find_map(|el| el.value().attr(attr))
            .map(str::to_string)
            .unwrap_or_default(),
        Err(err) => {
            log::warn!("invalid selector '{}': {}", selector, err);
            String::new()
        }
    }
}

/// Document-rooted [`select_text`].
pub fn doc_text(document: &Html, selector: &str) -> String {
    select_all(document, selector)
        .first()
        .map(|el| element_text(*el))
        .unwrap_or_default()
}

/// Document-rooted [`select_attr`].
pub fn doc_attr(document: &Html, selector: &str, attr: &str) -> String {
    select_all(document, selector)
        .into_iter()
        .find_map(|el| el.value().attr(attr))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Concatenated, whitespace-trimmed text of an element.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn first_under<'a>(node: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => node.select(&sel).next(),
        Err(err) => {
            log::warn!("invalid selector '{}': {}", selector, err);
            None
        }
    }
}
