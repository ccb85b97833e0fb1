//! Pre-fetch candidate ranking.

use crate::hints;

/// Heuristic relevance score for a candidate URL and its anchor text.
///
/// Pure and deterministic so rankings are stable: +12 per scoring hint in
/// the URL and +10 per hint in the text (independently), +6 for an
/// opportunity mention, -40 for every negative hint present in either, and
/// a bonus for shallow paths. The range is unbounded in both directions;
/// this is a ranking key, not a confidence.
pub fn score_candidate(url: &str, anchor_text: &str) -> i64 {
    let url_lower = url.to_lowercase();
    let text_lower = anchor_text.to_lowercase();
    let mut score: i64 = 0;

    for good in hints::SCORING_HINTS {
        if url_lower.contains(good) {
            score += 12;
        }
        if text_lower.contains(good) {
            score += 10;
        }
    }

    if url_lower.contains("opportun") || text_lower.contains("opportun") {
        score += 6;
    }

    for bad in hints::BAD_URL_HINTS {
        if url_lower.contains(bad) || text_lower.contains(bad) {
            score -= 40;
        }
    }

    // Shorter paths are more likely to be the canonical listing.
    score += (10 - url_lower.matches('/').count() as i64).max(0);

    score
}
