//! Article Metrics — deterministic SEO scoring of a generated article body.
//!
//! Everything here is a pure function of its inputs. Metrics are never
//! stored authoritatively; callers recompute them whenever content changes.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Average adult reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Derived metrics for one article body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetrics {
    pub word_count: usize,
    pub reading_time_minutes: usize,
    pub keyword_density_percent: f64,
    pub seo_score: u32,
}

/// Computes the full metrics snapshot for an article body.
///
/// The SEO score is a sum of four independent bands (word count, keyword
/// density, heading structure, bold emphasis), each worth 5, 15 or 25
/// points, so the total always lands in 20..=100.
pub fn compute_metrics(
    content: &str,
    primary_keyword: &str,
    selected_keywords: &[String],
) -> ArticleMetrics {
    let word_count = content.split_whitespace().count();
    let reading_time_minutes = word_count.div_ceil(WORDS_PER_MINUTE);

    let keyword_density_percent =
        keyword_density(content, primary_keyword, selected_keywords, word_count);

    let seo_score = length_band(word_count)
        + density_band(keyword_density_percent)
        + structure_band(content)
        + emphasis_band(content);

    ArticleMetrics {
        word_count,
        reading_time_minutes,
        keyword_density_percent,
        seo_score,
    }
}

/// Percentage of words in `content` that are keyword tokens, rounded to two
/// decimal places. Multi-word keywords count each of their tokens
/// separately; empty content is 0 rather than a division by zero.
fn keyword_density(
    content: &str,
    primary_keyword: &str,
    selected_keywords: &[String],
    word_count: usize,
) -> f64 {
    if word_count == 0 {
        return 0.0;
    }

    let haystack = content.to_lowercase();

    let mut keyword_hits = 0usize;
    let phrases =
        std::iter::once(primary_keyword).chain(selected_keywords.iter().map(String::as_str));
    for phrase in phrases {
        for token in phrase.to_lowercase().split_whitespace() {
            keyword_hits += count_whole_word(&haystack, token);
        }
    }

    round2(keyword_hits as f64 / word_count as f64 * 100.0)
}

/// Counts non-overlapping whole-word occurrences of `word` in `haystack`.
/// "Whole word" means both neighbors fall outside `[A-Za-z0-9_]`, so
/// hyphens and punctuation are boundaries. Callers pass pre-lowercased
/// strings; empty needles never match.
fn count_whole_word(haystack: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    haystack
        .match_indices(word)
        .filter(|(start, matched)| {
            let before = haystack[..*start].chars().next_back();
            let after = haystack[start + matched.len()..].chars().next();
            before.map_or(true, |c| !is_word_char(c)) && after.map_or(true, |c| !is_word_char(c))
        })
        .count()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Word-count band. Articles near 800 words score best.
fn length_band(word_count: usize) -> u32 {
    if (750..=850).contains(&word_count) {
        25
    } else if (600..=1000).contains(&word_count) {
        15
    } else {
        5
    }
}

/// Keyword-density band. 0.5%..1.5% is the target window; outside 0.3%..2%
/// counts as stuffing or absence.
fn density_band(density_percent: f64) -> u32 {
    if (0.5..=1.5).contains(&density_percent) {
        25
    } else if (0.3..=2.0).contains(&density_percent) {
        15
    } else {
        5
    }
}

/// Heading-structure band. Exactly one H1 plus several H2 sections scores
/// best. Article bodies normally arrive with the leading H1 already moved
/// into the title, which parks generated content on the 5-point arm; the
/// band still rewards content that keeps a full heading skeleton.
fn structure_band(content: &str) -> u32 {
    let h1_count = content.lines().filter(|l| l.starts_with("# ")).count();
    let h2_count = content.lines().filter(|l| l.starts_with("## ")).count();

    if h1_count == 1 && h2_count >= 3 {
        25
    } else if h1_count == 1 && h2_count >= 2 {
        15
    } else {
        5
    }
}

/// Bold-emphasis band, counting `**...**` spans. 3 to 8 spans is the
/// target; a wall of bold scores no better than a single span.
fn emphasis_band(content: &str) -> u32 {
    let bold = Regex::new(r"\*\*[^*]+\*\*").unwrap();
    let count = bold.find_iter(content).count();

    if (3..=8).contains(&count) {
        25
    } else if count >= 1 {
        15
    } else {
        5
    }
}

// ────────────────────────────── tests ──────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// Body with an exact word count: `keyword` appears `hits` times, one H1
    /// line, four H2 lines and five bold spans, padded with unique filler.
    fn make_scored_body(total_words: usize, keyword: &str, hits: usize) -> String {
        let mut lines = vec![
            "# Overview of the topic at hand".to_string(),
            "## Understanding the Fundamentals".to_string(),
            "## Advanced Strategies".to_string(),
            "## Implementation Notes".to_string(),
            "## Conclusion".to_string(),
            "**alpha** **beta** **gamma** **delta** **epsilon**".to_string(),
            vec![keyword; hits].join(" "),
        ];

        let used: usize = lines
            .iter()
            .map(|l| l.split_whitespace().count())
            .sum();
        assert!(used <= total_words, "fixture exceeds requested word count");

        let filler: Vec<String> = (0..total_words - used).map(|i| format!("pad{i}")).collect();
        lines.push(filler.join(" "));

        lines.join("\n")
    }

    #[test]
    fn word_count_splits_on_whitespace_runs() {
        let m = compute_metrics("one  two\tthree\n\nfour", "one", &[]);
        assert_eq!(m.word_count, 4);
    }

    #[test]
    fn reading_time_rounds_up() {
        for (words, minutes) in [(1, 1), (199, 1), (200, 1), (201, 2), (400, 2), (401, 3)] {
            let content = vec!["word"; words].join(" ");
            let m = compute_metrics(&content, "absent", &[]);
            assert_eq!(m.word_count, words);
            assert_eq!(m.reading_time_minutes, minutes, "{words} words");
        }
    }

    #[test]
    fn empty_content_is_safe() {
        let m = compute_metrics("", "laptops", &keywords(&["budget laptops"]));
        assert_eq!(m.word_count, 0);
        assert_eq!(m.reading_time_minutes, 0);
        assert_eq!(m.keyword_density_percent, 0.0);
        assert_eq!(m.seo_score, 20);
    }

    #[test]
    fn density_counts_whole_words_only() {
        // "rust" must not match inside "trust" or "rusty".
        let content = "rust is here but trust and rusty are not rust";
        let m = compute_metrics(content, "rust", &[]);
        assert_eq!(m.word_count, 10);
        assert_eq!(m.keyword_density_percent, 20.0);
    }

    #[test]
    fn density_is_case_insensitive() {
        let m = compute_metrics("Rust RUST rust other", "rust", &[]);
        assert_eq!(m.keyword_density_percent, 75.0);
    }

    #[test]
    fn density_five_hits_in_one_hundred_words() {
        let filler: Vec<String> = (0..95).map(|i| format!("w{i}")).collect();
        let content = format!("foo foo foo foo foo {}", filler.join(" "));
        let m = compute_metrics(&content, "foo", &[]);
        assert_eq!(m.word_count, 100);
        assert_eq!(m.keyword_density_percent, 5.0);
    }

    #[test]
    fn multi_word_keywords_count_each_token() {
        let content = "content marketing drives growth and marketing wins";
        let m = compute_metrics(content, "content marketing", &[]);
        // "content" once + "marketing" twice over 7 words.
        assert_eq!(m.keyword_density_percent, 42.86);
    }

    #[test]
    fn selected_keywords_add_to_the_hit_count() {
        let content = "growth tips for growth teams";
        let m = compute_metrics(content, "growth", &keywords(&["tips"]));
        // growth x2 + tips x1 over 5 words.
        assert_eq!(m.keyword_density_percent, 60.0);
    }

    #[test]
    fn hyphens_are_word_boundaries() {
        assert_eq!(count_whole_word("state-of-the-art state", "state"), 2);
        assert_eq!(count_whole_word("snake_case state", "state"), 1);
        assert_eq!(count_whole_word("understated", "state"), 0);
    }

    #[test]
    fn length_band_edges() {
        assert_eq!(length_band(599), 5);
        assert_eq!(length_band(600), 15);
        assert_eq!(length_band(749), 15);
        assert_eq!(length_band(750), 25);
        assert_eq!(length_band(850), 25);
        assert_eq!(length_band(851), 15);
        assert_eq!(length_band(1000), 15);
        assert_eq!(length_band(1001), 5);
    }

    #[test]
    fn density_band_edges() {
        assert_eq!(density_band(0.0), 5);
        assert_eq!(density_band(0.29), 5);
        assert_eq!(density_band(0.3), 15);
        assert_eq!(density_band(0.49), 15);
        assert_eq!(density_band(0.5), 25);
        assert_eq!(density_band(1.5), 25);
        assert_eq!(density_band(1.51), 15);
        assert_eq!(density_band(2.0), 15);
        assert_eq!(density_band(2.01), 5);
    }

    #[test]
    fn structure_band_requires_exactly_one_h1() {
        assert_eq!(structure_band("# T\n## A\n## B\n## C"), 25);
        assert_eq!(structure_band("# T\n## A\n## B"), 15);
        assert_eq!(structure_band("## A\n## B\n## C\n## D"), 5);
        assert_eq!(structure_band("# T\n# T2\n## A\n## B\n## C"), 5);
        assert_eq!(structure_band("#NoSpace\n## A\n## B\n## C"), 5);
    }

    #[test]
    fn emphasis_band_counts_bold_spans() {
        assert_eq!(emphasis_band("no bold here"), 5);
        assert_eq!(emphasis_band("**one**"), 15);
        assert_eq!(emphasis_band("**a** **b** **c**"), 25);
        let eight: String = (0..8).map(|i| format!("**b{i}** ")).collect();
        assert_eq!(emphasis_band(&eight), 25);
        let nine: String = (0..9).map(|i| format!("**b{i}** ")).collect();
        assert_eq!(emphasis_band(&nine), 15);
    }

    #[test]
    fn perfect_body_scores_one_hundred() {
        // 800 words with 8 keyword hits is exactly 1.0% density.
        let content = make_scored_body(800, "growth", 8);
        let m = compute_metrics(&content, "growth", &[]);
        assert_eq!(m.word_count, 800);
        assert_eq!(m.reading_time_minutes, 4);
        assert_eq!(m.keyword_density_percent, 1.0);
        assert_eq!(m.seo_score, 100);
    }

    #[test]
    fn score_always_lands_in_band_range() {
        let mid = make_scored_body(650, "growth", 2);
        for content in ["", "short", mid.as_str()] {
            let m = compute_metrics(content, "growth", &[]);
            assert!((20..=100).contains(&m.seo_score), "score {}", m.seo_score);
        }
    }

    #[test]
    fn density_rounds_to_two_decimals() {
        // 1 hit over 3 words: 33.333..% rounds to 33.33.
        let m = compute_metrics("foo bar baz", "foo", &[]);
        assert_eq!(m.keyword_density_percent, 33.33);
    }

    #[test]
    fn metrics_serialize_with_wire_names() {
        let m = ArticleMetrics {
            word_count: 812,
            reading_time_minutes: 5,
            keyword_density_percent: 1.23,
            seo_score: 80,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["wordCount"], 812);
        assert_eq!(json["readingTimeMinutes"], 5);
        assert_eq!(json["keywordDensityPercent"], 1.23);
        assert_eq!(json["seoScore"], 80);
    }
}
