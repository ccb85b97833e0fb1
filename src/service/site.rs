//! URL normalization and same-site membership.

use url::Url;

/// Canonicalize a raw organization URL into its `scheme://host` root.
///
/// Missing schemes default to https and a leading `www.` is stripped.
/// Never fails: malformed input yields an empty string. A non-default port
/// is kept so the root stays reachable.
pub fn norm_root(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let Ok(parsed) = Url::parse(&with_scheme) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };
    let host = host.strip_prefix("www.").unwrap_or(host);

    match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    }
}

/// True when the candidate's host equals the root's host or is one of its
/// subdomains, ignoring a leading `www.`. Parse failure is a quiet false.
pub fn is_same_site(root: &str, candidate: &str) -> bool {
    let (Ok(root_url), Ok(candidate_url)) = (Url::parse(root), Url::parse(candidate)) else {
        return false;
    };
    let (Some(root_host), Some(candidate_host)) = (root_url.host_str(), candidate_url.host_str())
    else {
        return false;
    };
    let root_host = root_host.strip_prefix("www.").unwrap_or(root_host);
    let candidate_host = candidate_host.strip_prefix("www.").unwrap_or(candidate_host);

    candidate_host == root_host || candidate_host.ends_with(&format!(".{root_host}"))
}
