//! Anchor harvesting from homepage HTML.

use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

use crate::domain::models::Candidate;

/// Extract every `<a href>` as an absolute URL paired with its visible text.
/// Fragment-only links are skipped and fragments are stripped from the rest.
/// Uses a cached selector for performance.
pub fn extract_anchor_candidates(html: &str, base_url: &Url) -> Vec<Candidate> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("a[href]").unwrap());

    Html::parse_document(html)
        .select(selector)
        .filter_map(|a| {
            let raw = a.value().attr("href")?.trim();
            if raw.is_empty() || raw.starts_with('#') {
                return None;
            }
            let mut resolved = base_url.join(raw).ok()?;
            resolved.set_fragment(None);

            let text = a
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");

            Some(Candidate {
                url: resolved.to_string(),
                text,
            })
        })
        .collect()
}
