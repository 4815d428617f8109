//! Category-specific response scorers.
//!
//! Each scorer mirrors how a human grader for its category would work on a
//! 0-10 rubric, renders the verdict as evaluation text, and converts it to
//! the canonical [0, 1] scale exactly once at this boundary.

use super::extract::score_from_text;
use super::{ResponseScorer, ScoreOutcome};
use llm_eval_domain::test_case::{TestCase, TestCategory};
use std::collections::HashSet;

const STRUCTURE_INDICATORS: [&str; 7] = [
    "step",
    "first",
    "second",
    "therefore",
    "because",
    "since",
    "conclusion",
];

const LOGICAL_WORDS: [&str; 8] = ["if", "then", "and", "or", "not", "all", "some", "therefore"];

/// Fraction of `reference`'s words that also appear in `other`.
fn word_overlap(reference: &str, other: &str) -> f64 {
    let reference_words: HashSet<&str> = reference.split_whitespace().collect();
    if reference_words.is_empty() {
        return 0.0;
    }
    let other_words: HashSet<&str> = other.split_whitespace().collect();
    reference_words.intersection(&other_words).count() as f64 / reference_words.len() as f64
}

fn outcome_from(score: f64, feedback: &str) -> ScoreOutcome {
    let evaluation_text = format!("Score: {:.1}\nFeedback: {}", score.min(10.0), feedback);
    ScoreOutcome {
        score: score_from_text(&evaluation_text),
        feedback: evaluation_text,
    }
}

/// Scores summarization tasks by compression ratio and vocabulary overlap.
pub struct SummarizationScorer;

impl ResponseScorer for SummarizationScorer {
    fn score(&self, case: &TestCase, output: &str) -> ScoreOutcome {
        let compression_ratio = output.len() as f64 / case.input_text.len().max(1) as f64;

        let (mut score, mut feedback) = if compression_ratio < 0.2 {
            (8.5, "Excellent compression ratio. The summary effectively condenses the original text while maintaining key information.".to_string())
        } else if compression_ratio < 0.4 {
            (7.5, "Good summarization with appropriate length reduction. Most key points are captured.".to_string())
        } else {
            (6.0, "Summary could be more concise. Consider reducing length while preserving essential information.".to_string())
        };

        let overlap = word_overlap(
            &case.input_text.to_lowercase(),
            &output.to_lowercase(),
        );
        if overlap > 0.3 {
            score += 1.0;
            feedback.push_str(" Good preservation of key terminology.");
        }

        outcome_from(score, &feedback)
    }

    fn category(&self) -> TestCategory {
        TestCategory::Summarization
    }
}

/// Scores Q&A tasks by word overlap with the expected answer, with a
/// length/structure heuristic when no reference answer exists.
pub struct QaScorer;

impl ResponseScorer for QaScorer {
    fn score(&self, case: &TestCase, output: &str) -> ScoreOutcome {
        let response = output.to_lowercase();
        let expected = case
            .expected_output
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        let (score, feedback) = if !expected.is_empty() {
            let overlap = word_overlap(&expected, &response);
            if overlap > 0.7 {
                (9.0, "Excellent accuracy. The answer closely matches expected content with high keyword overlap.")
            } else if overlap > 0.5 {
                (7.5, "Good accuracy. Most key information is present with reasonable alignment to expected answer.")
            } else {
                (6.0, "Moderate accuracy. Some expected information is missing or incorrectly stated.")
            }
        } else if response.len() > 50 && !response.contains('?') {
            (7.0, "Reasonable response length and structure. Answer appears complete and relevant.")
        } else {
            (5.0, "Response may be too brief or unclear. Consider providing more detailed information.")
        };

        outcome_from(score, feedback)
    }

    fn category(&self) -> TestCategory {
        TestCategory::Qa
    }
}

/// Scores reasoning tasks by structural and logical-connective markers.
pub struct ReasoningScorer;

impl ResponseScorer for ReasoningScorer {
    fn score(&self, _case: &TestCase, output: &str) -> ScoreOutcome {
        let response = output.to_lowercase();

        let structure_count = STRUCTURE_INDICATORS
            .iter()
            .filter(|indicator| response.contains(**indicator))
            .count();
        let logical_count = LOGICAL_WORDS
            .iter()
            .filter(|word| response.contains(**word))
            .count();

        let mut score = 5.0;
        let mut feedback;

        if structure_count >= 3 {
            score += 2.0;
            feedback = "Well-structured reasoning with clear step-by-step analysis.".to_string();
        } else if structure_count >= 1 {
            score += 1.0;
            feedback = "Some structure present in the reasoning process.".to_string();
        } else {
            feedback = "Reasoning could benefit from more structured approach.".to_string();
        }

        if logical_count >= 5 {
            score += 2.0;
            feedback.push_str(" Strong use of logical connectives and formal reasoning.");
        } else if logical_count >= 2 {
            score += 1.0;
            feedback.push_str(" Adequate use of logical language.");
        }

        if response.len() > 200 {
            score += 1.0;
            feedback.push_str(" Comprehensive explanation provided.");
        }

        outcome_from(score, &feedback)
    }

    fn category(&self) -> TestCategory {
        TestCategory::Reasoning
    }
}
