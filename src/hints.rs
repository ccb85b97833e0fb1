//! Shared hint tables used by every discovery tier.
//!
//! All substring matching against these tables is case-insensitive (callers
//! lowercase first). The sitemap tier filters with `looks_jobish`, which
//! applies both the positive and negative URL hints; the homepage tier
//! accepts an anchor on a positive *text* hint alone, independent of the
//! negative sets. That asymmetry is intentional and pinned by tests:
//! sitemaps yield far more candidates and get the stricter filter.

/// URL substrings suggesting a job-related page.
pub const GOOD_URL_HINTS: &[&str] = &[
    "career",
    "careers",
    "job",
    "jobs",
    "vacanc",
    "recruit",
    "work-with-us",
    "work-for-us",
    "working-for-us",
    "join-our-team",
    "join-us",
    "opportunit",
    "vacancy",
];

/// URL substrings that veto a candidate (membership drives, news, policy pages).
pub const BAD_URL_HINTS: &[&str] = &[
    "membership",
    "member",
    "join-our-community",
    "donate",
    "shop",
    "volunteer",
    "training",
    "event",
    "news",
    "blog",
    "press",
    "privacy",
    "cookie",
    "terms",
];

/// Anchor-text phrases that flag a homepage link as job-related.
pub const GOOD_TEXT_HINTS: &[&str] = &[
    "vacancies",
    "jobs",
    "careers",
    "work with us",
    "join our team",
    "recruitment",
    "current opportunities",
    "latest vacancies",
    "apply now",
    "closing date",
    "salary",
];

/// Body-text phrases that count against a validated page.
pub const BAD_TEXT_HINTS: &[&str] = &[
    "membership",
    "become a member",
    "join the network",
    "sign up",
    "subscription",
    "donate",
    "volunteer",
    "fundraise",
    "newsletter",
];

/// Conventional path suffixes probed as a last resort, in priority order.
pub const COMMON_PATHS: &[&str] = &[
    "/careers",
    "/jobs",
    "/vacancies",
    "/recruitment",
    "/work-with-us",
    "/work-for-us",
    "/working-for-us",
    "/join-our-team",
    "/join-us",
    "/about/work-with-us",
    "/about-us/join-our-team",
];

/// Substrings the candidate scorer rewards in URLs and anchor text.
pub const SCORING_HINTS: &[&str] = &[
    "vacanc",
    "career",
    "jobs",
    "recruit",
    "work-with-us",
    "work for us",
    "join our team",
];

/// Title substrings the validator rewards.
pub const TITLE_HINTS: &[&str] = &["vacanc", "career", "jobs", "recruit"];

/// Body phrases that strongly indicate live vacancies.
pub const STRONG_BODY_PHRASES: &[&str] = &[
    "apply now",
    "closing date",
    "salary",
    "job description",
    "specification",
];

/// Body phrases naming a vacancies listing.
pub const VACANCY_PHRASES: &[&str] = &[
    "current vacancies",
    "vacancies",
    "our vacancies",
    "latest vacancies",
];

/// True if the URL matches a positive hint and none of the negative ones.
pub fn looks_jobish(url: &str) -> bool {
    let lower = url.to_lowercase();
    if BAD_URL_HINTS.iter().any(|bad| lower.contains(bad)) {
        return false;
    }
    GOOD_URL_HINTS.iter().any(|good| lower.contains(good))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobish_url_matches() {
        assert!(looks_jobish("https://example.org/careers"));
        assert!(looks_jobish("https://example.org/Current-Vacancies"));
        assert!(looks_jobish("https://example.org/work-with-us"));
    }

    #[test]
    fn negative_hint_vetoes_positive() {
        // "volunteer" outweighs the "opportunit" match.
        assert!(!looks_jobish("https://example.org/volunteer-opportunities"));
        assert!(!looks_jobish("https://example.org/membership/jobs"));
    }

    #[test]
    fn unrelated_url_does_not_match() {
        assert!(!looks_jobish("https://example.org/about"));
        assert!(!looks_jobish(""));
    }
}
