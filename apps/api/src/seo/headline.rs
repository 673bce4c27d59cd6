//! Headline Integration — deterministically rewrites a headline so it
//! contains a required keyword, preferring natural insertion points.
//!
//! Strategies run in priority order: punctuation break points, then
//! structural patterns, then length-based placement. Every path returns a
//! non-empty headline containing the keyword, and integration is
//! idempotent because a headline that already contains the keyword is
//! returned untouched.

use regex_lite::Regex;

/// Inserts `keyword` into `headline`.
///
/// An empty keyword and a headline that already contains the keyword
/// (case-insensitively) both return the headline unchanged.
pub fn integrate_keyword(headline: &str, keyword: &str) -> String {
    if keyword.is_empty() || contains_ci(headline, keyword) {
        return headline.to_string();
    }

    if let Some(result) = insert_at_break_point(headline, keyword) {
        return result;
    }
    if let Some(result) = insert_by_pattern(headline, keyword) {
        return result;
    }
    insert_by_length(headline, keyword)
}

/// Case-insensitive substring containment.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Punctuation insertion points, in priority order.
///
/// `:`, `-` and `|` keep the marker with the trailing half and bracket the
/// keyword after the leading half; `?` and `!` take the keyword right
/// before the mark. A marker at position 0 is not a break point.
fn insert_at_break_point(headline: &str, keyword: &str) -> Option<String> {
    for marker in [':', '-', '|'] {
        if let Some(at) = headline.find(marker) {
            if at > 0 {
                let before = headline[..at].trim();
                let after = headline[at..].trim();
                return Some(format!("{before} ({keyword}) {after}"));
            }
        }
    }

    for mark in ['?', '!'] {
        if let Some(at) = headline.find(mark) {
            if at > 0 {
                return Some(format!("{} ({}){}", &headline[..at], keyword, &headline[at..]));
            }
        }
    }

    None
}

/// Structural headline patterns, tried in order. The first match decides
/// the insertion point.
fn insert_by_pattern(headline: &str, keyword: &str) -> Option<String> {
    // Listicles: "5 Tips ..." takes the keyword after the number group.
    let listicle = Regex::new(r"^(\d+\s+\w+)\s+(.+)").unwrap();
    if let Some(caps) = listicle.captures(headline) {
        return Some(format!("{} {} {}", &caps[1], keyword, &caps[2]));
    }

    let how_to = Regex::new(r"(?i)^(how to)\s+(.+)").unwrap();
    if let Some(caps) = how_to.captures(headline) {
        return Some(format!("{} {} {}", &caps[1], keyword, &caps[2]));
    }

    // Superlative openers keep their trailing space in the first group.
    let superlative = Regex::new(r"(?i)^((?:best|top|ultimate|complete|perfect)\s+)(.+)").unwrap();
    if let Some(caps) = superlative.captures(headline) {
        return Some(format!("{}{} {}", &caps[1], keyword, &caps[2]));
    }

    let possessive = Regex::new(r"(?i)^((?:your|my|our)\s+)(.+)").unwrap();
    if let Some(caps) = possessive.captures(headline) {
        return Some(format!("{}{} {}", &caps[1], keyword, &caps[2]));
    }

    None
}

/// No structural cue matched, so placement falls back to headline length:
/// six or more words bracket the keyword at the midpoint, three to five
/// append it, and anything shorter takes the shortest of three framings.
fn insert_by_length(headline: &str, keyword: &str) -> String {
    let words: Vec<&str> = headline.split_whitespace().collect();

    if words.len() >= 6 {
        let mid = words.len() / 2;
        return format!(
            "{} ({}) {}",
            words[..mid].join(" "),
            keyword,
            words[mid..].join(" ")
        );
    }

    if words.len() >= 3 {
        return format!("{headline} ({keyword})");
    }

    // Shortest framing wins; earlier candidates win ties.
    let mut shortest = format!("{keyword}: {headline}");
    for candidate in [
        format!("{headline} - {keyword}"),
        format!("{headline} ({keyword})"),
    ] {
        if candidate.chars().count() < shortest.chars().count() {
            shortest = candidate;
        }
    }
    shortest
}

/// Connector words kept lowercase in title case unless they lead the text.
const TITLE_CASE_SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "if", "in", "of", "on", "or", "the", "to",
    "up", "yet", "via",
];

/// Converts text to title case: every word capitalized except small
/// connector words, with the first word always capitalized. Whitespace
/// runs collapse to single spaces.
pub fn to_title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && TITLE_CASE_SMALL_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first alphanumeric character, leaving any leading
/// punctuation (quotes, parentheses) in place.
fn capitalize(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut capitalized = false;
    for c in word.chars() {
        if !capitalized && c.is_alphanumeric() {
            result.extend(c.to_uppercase());
            capitalized = true;
        } else {
            result.push(c);
        }
    }
    result
}

// ────────────────────────────── tests ──────────────────────────────
