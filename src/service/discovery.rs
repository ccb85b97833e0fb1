//! Three-tier careers page discovery for one organization.
//!
//! Tiers run in a fixed order and short-circuit on the first hit:
//! sitemap-listed URLs, then homepage links, then conventional paths.
//! Every tier swallows its own transport and parsing failures; one
//! organization can never abort the batch.

use std::cmp::Reverse;
use std::collections::HashSet;
use url::Url;

use crate::domain::models::{Candidate, DiscoveryResult, PageLabel};
use crate::error::Result;
use crate::extractor::links::extract_anchor_candidates;
use crate::extractor::sitemap::{extract_sitemap_urls, sitemap_directives, FALLBACK_SITEMAP_PATHS};
use crate::hints;
use crate::service::http::{FetchOutcome, PageFetcher};
use crate::service::scoring::score_candidate;
use crate::service::site::{is_same_site, norm_root};
use crate::service::validator::validate_jobs_page;

/// How many top-scored candidates each tier fetches for validation.
const SITEMAP_SHORTLIST: usize = 6;
const HOMEPAGE_SHORTLIST: usize = 8;

pub struct JobsPageDiscovery {
    fetcher: PageFetcher,
}

impl JobsPageDiscovery {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new()?,
        })
    }

    /// Run the full pipeline for one organization URL.
    pub async fn discover(&self, org_url: &str) -> DiscoveryResult {
        let root = norm_root(org_url);
        if root.is_empty() {
            log::debug!("[DISCOVERY] No usable URL in {:?}", org_url);
            return DiscoveryResult::no_url();
        }
        log::info!("[DISCOVERY] Searching {}", root);

        let (jobs_url, sitemap_used) = self.resolve_via_sitemap(&root).await;
        if !jobs_url.is_empty() {
            let validation = validate_jobs_page(&self.fetcher, &jobs_url).await;
            return DiscoveryResult {
                vacancies: jobs_url,
                confidence: validation.confidence,
                label: validation.label,
                sitemap: sitemap_used,
            };
        }

        // A sitemap that was found but held no job-hint URLs stays in the
        // result as provenance, whichever tier wins from here.
        let jobs_url = self.resolve_via_homepage(&root).await;
        if !jobs_url.is_empty() {
            let validation = validate_jobs_page(&self.fetcher, &jobs_url).await;
            return DiscoveryResult {
                vacancies: jobs_url,
                confidence: validation.confidence,
                label: validation.label,
                sitemap: sitemap_used,
            };
        }

        let jobs_url = self.resolve_via_common_paths(&root).await;
        if !jobs_url.is_empty() {
            let validation = validate_jobs_page(&self.fetcher, &jobs_url).await;
            return DiscoveryResult {
                vacancies: jobs_url,
                confidence: validation.confidence,
                label: validation.label,
                sitemap: sitemap_used,
            };
        }

        log::info!("[DISCOVERY] Nothing found for {}", root);
        DiscoveryResult::not_found(sitemap_used)
    }

    /// Tier 1: robots.txt-declared sitemaps (or the well-known fallbacks),
    /// filtered to same-site job-hint URLs. Returns the best candidate and
    /// the first sitemap that yielded any URLs.
    pub async fn resolve_via_sitemap(&self, root: &str) -> (String, String) {
        let mut sitemaps = Vec::new();
        if let FetchOutcome::Fetched(robots) =
            self.fetcher.fetch_text(&format!("{root}/robots.txt")).await
        {
            sitemaps = sitemap_directives(&robots);
        }
        if sitemaps.is_empty() {
            sitemaps = FALLBACK_SITEMAP_PATHS
                .iter()
                .map(|path| format!("{root}{path}"))
                .collect();
        }

        let mut sitemap_used = String::new();
        let mut listed_urls = Vec::new();
        for sitemap_url in &sitemaps {
            let FetchOutcome::Fetched(text) = self.fetcher.fetch_text(sitemap_url).await else {
                continue;
            };
            let urls = extract_sitemap_urls(&text);
            if urls.is_empty() {
                continue;
            }
            log::debug!("[SITEMAP] {} listed {} URLs", sitemap_url, urls.len());
            if sitemap_used.is_empty() {
                sitemap_used = sitemap_url.clone();
            }
            listed_urls.extend(urls);
        }

        let mut seen = HashSet::new();
        let mut candidates: Vec<String> = listed_urls
            .into_iter()
            .filter(|u| is_same_site(root, u) && hints::looks_jobish(u))
            .filter(|u| seen.insert(u.clone()))
            .collect();
        if candidates.is_empty() {
            return (String::new(), sitemap_used);
        }

        // Stable sort keeps first-seen order among equal scores.
        candidates.sort_by_key(|u| Reverse(score_candidate(u, "")));
        candidates.truncate(SITEMAP_SHORTLIST);

        let mut best_url = String::new();
        let mut best_combined = i64::MIN;
        for url in candidates {
            let validation = validate_jobs_page(&self.fetcher, &url).await;
            let combined = score_candidate(&url, "") + validation.confidence;
            // Strict comparison: the earliest-encountered maximum wins.
            if combined > best_combined {
                best_combined = combined;
                best_url = url;
            }
        }
        (best_url, sitemap_used)
    }

    /// Tier 2: same-site homepage anchors kept on a positive text hint or a
    /// job-hinting URL. Unlike the sitemap tier, a positive anchor text is
    /// accepted without consulting the negative URL hints.
    pub async fn resolve_via_homepage(&self, root: &str) -> String {
        let FetchOutcome::Fetched(html) = self.fetcher.fetch_text(root).await else {
            return String::new();
        };
        let Ok(base) = Url::parse(root) else {
            return String::new();
        };

        let mut seen = HashSet::new();
        let mut candidates: Vec<Candidate> = Vec::new();
        for candidate in extract_anchor_candidates(&html, &base) {
            if !is_same_site(root, &candidate.url) {
                continue;
            }
            let text_lower = candidate.text.to_lowercase();
            let wanted = hints::GOOD_TEXT_HINTS.iter().any(|h| text_lower.contains(h))
                || hints::looks_jobish(&candidate.url);
            if wanted && seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }
        if candidates.is_empty() {
            return String::new();
        }
        log::debug!("[HOMEPAGE] {} candidate links on {}", candidates.len(), root);

        candidates.sort_by_key(|c| Reverse(score_candidate(&c.url, &c.text)));
        candidates.truncate(HOMEPAGE_SHORTLIST);

        let mut best_url = String::new();
        let mut best_combined = i64::MIN;
        for candidate in candidates {
            let validation = validate_jobs_page(&self.fetcher, &candidate.url).await;
            let combined = score_candidate(&candidate.url, &candidate.text) + validation.confidence;
            if combined > best_combined {
                best_combined = combined;
                best_url = candidate.url;
            }
        }
        best_url
    }

    /// Tier 3: probe conventional suffixes in priority order and return the
    /// first reachable one the validator does not dismiss outright.
    pub async fn resolve_via_common_paths(&self, root: &str) -> String {
        for path in hints::COMMON_PATHS {
            let candidate = format!("{root}{path}");
            let Some(resolved) = self.fetcher.probe_head(&candidate).await else {
                continue;
            };
            let validation = validate_jobs_page(&self.fetcher, &resolved).await;
            if validation.label != PageLabel::UnlikelyJobs {
                log::debug!("[PROBE] Accepted {}", resolved);
                return resolved;
            }
            log::trace!("[PROBE] Rejected {} ({})", resolved, validation.label);
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const JOBS_BODY: &str =
        "<html><head><title>Careers</title></head>\
         <body><h1>Current vacancies</h1><p>Apply now. Salary listed.</p></body></html>";

    fn sitemap_xml(urls: &[String]) -> String {
        let locs: String = urls
            .iter()
            .map(|u| format!("<url><loc>{u}</loc></url>"))
            .collect();
        format!("<?xml version=\"1.0\"?><urlset>{locs}</urlset>")
    }

    #[tokio::test]
    async fn empty_url_is_no_url() {
        let discovery = JobsPageDiscovery::new().unwrap();
        let result = discovery.discover("").await;
        assert_eq!(result.label, PageLabel::NoUrl);
        assert!(result.vacancies.is_empty());
        assert!(result.sitemap.is_empty());
    }

    #[tokio::test]
    async fn sitemap_tier_finds_job_hint_url() {
        let mut server = Server::new_async().await;
        let base = server.url();
        let careers = format!("{base}/careers/current-vacancies");

        let _robots = server
            .mock("GET", "/robots.txt")
            .with_status(200)
            .with_body(format!("User-agent: *\nSitemap: {base}/sitemap.xml\n"))
            .create_async()
            .await;
        let _sitemap = server
            .mock("GET", "/sitemap.xml")
            .with_status(200)
            .with_body(sitemap_xml(&[
                format!("{base}/about"),
                careers.clone(),
                "https://elsewhere.org/careers".to_string(),
            ]))
            .create_async()
            .await;
        let _page = server
            .mock("GET", "/careers/current-vacancies")
            .with_status(200)
            .with_body(JOBS_BODY)
            .create_async()
            .await;

        let discovery = JobsPageDiscovery::new().unwrap();
        let result = discovery.discover(&base).await;

        assert_eq!(result.vacancies, careers);
        assert_eq!(result.label, PageLabel::JobsPage);
        assert!(result.confidence >= 70);
        assert_eq!(result.sitemap, format!("{base}/sitemap.xml"));
    }

    #[tokio::test]
    async fn homepage_tier_carries_sitemap_provenance() {
        let mut server = Server::new_async().await;
        let base = server.url();

        // Sitemap exists but lists nothing job-related.
        let _sitemap = server
            .mock("GET", "/sitemap.xml")
            .with_status(200)
            .with_body(sitemap_xml(&[format!("{base}/about")]))
            .create_async()
            .await;
        let _homepage = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(format!(
                "<html><body><a href=\"{base}/work-with-us\">Work with us</a></body></html>"
            ))
            .create_async()
            .await;
        let _page = server
            .mock("GET", "/work-with-us")
            .with_status(200)
            .with_body(JOBS_BODY)
            .create_async()
            .await;

        let discovery = JobsPageDiscovery::new().unwrap();
        let result = discovery.discover(&base).await;

        assert_eq!(result.vacancies, format!("{base}/work-with-us"));
        assert_eq!(result.sitemap, format!("{base}/sitemap.xml"));
        assert_eq!(result.label, PageLabel::JobsPage);
    }

    #[tokio::test]
    async fn homepage_accepts_text_hint_despite_negative_url_hint() {
        // Pins the sitemap/homepage filter asymmetry: this URL fails
        // looks_jobish ("volunteer"), but the anchor text admits it.
        let mut server = Server::new_async().await;
        let base = server.url();

        let _homepage = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(format!(
                "<html><body><a href=\"{base}/volunteer-and-work\">Work with us</a></body></html>"
            ))
            .create_async()
            .await;
        let _page = server
            .mock("GET", "/volunteer-and-work")
            .with_status(200)
            .with_body(JOBS_BODY)
            .create_async()
            .await;

        let discovery = JobsPageDiscovery::new().unwrap();
        let url = discovery.resolve_via_homepage(&base).await;
        assert_eq!(url, format!("{base}/volunteer-and-work"));
    }

    #[tokio::test]
    async fn common_paths_skip_rejected_pages_in_order() {
        let mut server = Server::new_async().await;
        let base = server.url();

        // /careers resolves but reads like a membership page.
        let _careers_head = server
            .mock("HEAD", "/careers")
            .with_status(200)
            .create_async()
            .await;
        let _careers_get = server
            .mock("GET", "/careers")
            .with_status(200)
            .with_body("<html><body>Become a member today</body></html>")
            .create_async()
            .await;
        // /jobs is the real listing.
        let _jobs_head = server
            .mock("HEAD", "/jobs")
            .with_status(200)
            .create_async()
            .await;
        let _jobs_get = server
            .mock("GET", "/jobs")
            .with_status(200)
            .with_body(JOBS_BODY)
            .create_async()
            .await;

        let discovery = JobsPageDiscovery::new().unwrap();
        let url = discovery.resolve_via_common_paths(&base).await;
        assert_eq!(url, format!("{base}/jobs"));
    }

    #[tokio::test]
    async fn dead_site_ends_as_not_found() {
        let mut server = Server::new_async().await;
        let base = server.url();
        // No mocks at all: every request fails.
        let discovery = JobsPageDiscovery::new().unwrap();
        let result = discovery.discover(&base).await;
        assert_eq!(result.label, PageLabel::NotFound);
        assert!(result.vacancies.is_empty());
        assert!(result.sitemap.is_empty());
    }
}
