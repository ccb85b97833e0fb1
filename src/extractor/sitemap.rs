//! Sitemap and robots.txt parsing.
//!
//! Sitemaps are treated as flat URL lists: `<loc>` entries are pulled out
//! with an event reader and nested sitemap indexes are not expanded. A
//! fetched sitemap without any `<loc>` tag is read as a plain-text list of
//! whitespace-separated URLs.

use quick_xml::events::Event;
use url::Url;

/// Well-known sitemap locations tried when robots.txt declares none.
pub const FALLBACK_SITEMAP_PATHS: &[&str] = &["/sitemap.xml", "/sitemap_index.xml"];

/// Extract every URL listed in a sitemap body, XML or plain text.
pub fn extract_sitemap_urls(text: &str) -> Vec<String> {
    if text.contains("<loc>") {
        extract_loc_urls(text)
    } else {
        extract_plain_urls(text)
    }
}

/// Collect `Sitemap:` directives from a robots.txt body, case-insensitively.
pub fn sitemap_directives(robots: &str) -> Vec<String> {
    robots
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            // get() keeps the prefix check on a char boundary; robots
            // files can carry multibyte comment lines.
            match line.get(..8) {
                Some(prefix) if prefix.eq_ignore_ascii_case("sitemap:") => {
                    let value = line[8..].trim();
                    (!value.is_empty()).then(|| value.to_string())
                }
                _ => None,
            }
        })
        .collect()
}

fn extract_loc_urls(text: &str) -> Vec<String> {
    let mut reader = quick_xml::Reader::from_str(text);
    let mut urls = Vec::new();
    let mut buf = Vec::new();
    let mut in_loc_tag = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"loc" => {
                in_loc_tag = true;
            }
            Ok(Event::Text(e)) if in_loc_tag => {
                match e.decode() {
                    Ok(txt) => {
                        let txt = txt.trim();
                        if !txt.is_empty() {
                            urls.push(txt.to_string());
                        }
                    }
                    Err(e) => {
                        log::warn!(
                            "[SITEMAP] Undecodable <loc> text at {}: {}",
                            reader.buffer_position(),
                            e
                        );
                    }
                }
                in_loc_tag = false;
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"loc" => {
                in_loc_tag = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                // Malformed XML past this point; keep what we have.
                log::debug!("[SITEMAP] Parse stopped: {}", e);
                break;
            }
            _ => {}
        }
        buf.clear();
    }
    urls
}

fn extract_plain_urls(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|token| Url::parse(token).ok())
        .map(|url| url.to_string())
        .collect()
}
