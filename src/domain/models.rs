//! Domain types shared across the discovery pipeline.

use std::fmt;

/// Categorical verdict for a discovered (or undiscoverable) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// Validated with confidence >= 70.
    JobsPage,
    /// Validated with confidence >= 45.
    MaybeJobs,
    /// Validated with confidence below 45.
    UnlikelyJobs,
    /// The candidate could not be fetched.
    Unreachable,
    /// The organization row had no usable URL.
    NoUrl,
    /// All three discovery tiers came up empty.
    NotFound,
}

impl PageLabel {
    /// Maps a clamped 0..=100 confidence onto a verdict.
    pub fn from_confidence(confidence: i64) -> Self {
        if confidence >= 70 {
            PageLabel::JobsPage
        } else if confidence >= 45 {
            PageLabel::MaybeJobs
        } else {
            PageLabel::UnlikelyJobs
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageLabel::JobsPage => "jobs_page",
            PageLabel::MaybeJobs => "maybe_jobs",
            PageLabel::UnlikelyJobs => "unlikely_jobs",
            PageLabel::Unreachable => "unreachable",
            PageLabel::NoUrl => "no_url",
            PageLabel::NotFound => "not_found",
        }
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of content-validating one candidate URL.
#[derive(Debug, Clone, Copy)]
pub struct Validation {
    pub confidence: i64,
    pub label: PageLabel,
}

impl Validation {
    pub fn unreachable() -> Self {
        Self {
            confidence: 0,
            label: PageLabel::Unreachable,
        }
    }
}

/// A harvested link, paired with its visible anchor text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub url: String,
    pub text: String,
}

/// What the orchestrator hands back for one organization.
#[derive(Debug, Clone)]
pub struct DiscoveryResult {
    /// Discovered careers page, or empty when none was found.
    pub vacancies: String,
    pub confidence: i64,
    pub label: PageLabel,
    /// Which sitemap was consulted, kept as provenance even when the
    /// winning candidate came from a later tier.
    pub sitemap: String,
}

impl DiscoveryResult {
    pub fn no_url() -> Self {
        Self {
            vacancies: String::new(),
            confidence: 0,
            label: PageLabel::NoUrl,
            sitemap: String::new(),
        }
    }

    pub fn not_found(sitemap: String) -> Self {
        Self {
            vacancies: String::new(),
            confidence: 0,
            label: PageLabel::NotFound,
            sitemap,
        }
    }
}

/// Totals for one batch invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub checked: usize,
    pub updated: usize,
    pub next_start_row: usize,
}
