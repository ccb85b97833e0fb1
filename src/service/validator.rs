//! Content-based validation of a candidate page.
//!
//! The single source of truth for how trustworthy a discovered URL is:
//! invoked both while tie-breaking shortlisted candidates and for the final
//! persisted result.

use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::domain::models::{PageLabel, Validation};
use crate::hints;
use crate::service::http::{FetchOutcome, PageFetcher};

/// Fetch a candidate and grade its content. Unreachable pages score zero.
pub async fn validate_jobs_page(fetcher: &PageFetcher, url: &str) -> Validation {
    let html = match fetcher.fetch_text(url).await {
        FetchOutcome::Fetched(text) => text,
        FetchOutcome::Unavailable => {
            log::debug!("[VALIDATE] Unreachable: {}", url);
            return Validation::unreachable();
        }
    };
    let validation = grade_content(&html);
    log::debug!(
        "[VALIDATE] {} -> {} ({})",
        url,
        validation.confidence,
        validation.label
    );
    validation
}

/// Grade already-fetched HTML: 30 base credit, +25 for a job-hinting title,
/// +25 for strong application phrases, +20 for a vacancies listing phrase,
/// -35 for negative phrases, clamped to 0..=100.
pub fn grade_content(html: &str) -> Validation {
    let document = Html::parse_document(html);
    let title = extract_title(&document).to_lowercase();
    let body = extract_body_text(&document).to_lowercase();

    let mut confidence: i64 = 30;

    if hints::TITLE_HINTS.iter().any(|h| title.contains(h)) {
        confidence += 25;
    }
    if hints::STRONG_BODY_PHRASES.iter().any(|h| body.contains(h)) {
        confidence += 25;
    }
    if hints::VACANCY_PHRASES.iter().any(|h| body.contains(h)) {
        confidence += 20;
    }
    if hints::BAD_TEXT_HINTS.iter().any(|h| body.contains(h)) {
        confidence -= 35;
    }

    let confidence = confidence.clamp(0, 100);
    Validation {
        confidence,
        label: PageLabel::from_confidence(confidence),
    }
}

fn extract_title(document: &Html) -> String {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("title").unwrap());
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_body_text(document: &Html) -> String {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("body").unwrap());
    match document.select(selector).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        // Fragment responses without a body element still get graded.
        None => document.root_element().text().collect::<Vec<_>>().join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, body: &str) -> String {
        format!("<html><head><title>{title}</title></head><body>{body}</body></html>")
    }

    #[test]
    fn bare_page_gets_base_credit_only() {
        let v = grade_content(&page("Welcome", "We make widgets."));
        assert_eq!(v.confidence, 30);
        assert_eq!(v.label, PageLabel::UnlikelyJobs);
    }

    #[test]
    fn full_jobs_page_scores_to_the_cap() {
        let v = grade_content(&page(
            "Careers at Example",
            "<h1>Current vacancies</h1><p>Apply now. Salary: competitive.</p>",
        ));
        assert_eq!(v.confidence, 100);
        assert_eq!(v.label, PageLabel::JobsPage);
    }

    #[test]
    fn title_and_listing_phrases_reach_maybe() {
        // 30 + 25 (title) = 55
        let v = grade_content(&page("Jobs", "Nothing open right now."));
        assert_eq!(v.confidence, 55);
        assert_eq!(v.label, PageLabel::MaybeJobs);
    }

    #[test]
    fn negative_phrases_pull_confidence_down_and_clamp() {
        // 30 - 35 clamps to 0.
        let v = grade_content(&page("About", "Become a member and donate today."));
        assert_eq!(v.confidence, 0);
        assert_eq!(v.label, PageLabel::UnlikelyJobs);

        // 30 + 25 + 25 - 35 = 45, exactly on the maybe boundary.
        let v = grade_content(&page(
            "Careers",
            "Apply now. Sign up to our newsletter.",
        ));
        assert_eq!(v.confidence, 45);
        assert_eq!(v.label, PageLabel::MaybeJobs);
    }

    #[test]
    fn grades_fragments_without_a_body_element() {
        let v = grade_content("Current vacancies: apply now");
        assert!(v.confidence >= 30);
    }

    #[tokio::test]
    async fn unreachable_page_scores_zero() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/jobs")
            .with_status(500)
            .create_async()
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let v = validate_jobs_page(&fetcher, &format!("{}/jobs", server.url())).await;
        assert_eq!(v.confidence, 0);
        assert_eq!(v.label, PageLabel::Unreachable);
    }
}
