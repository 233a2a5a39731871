//! Stress keyword scan over free text
//!
//! Counts whitespace-separated tokens that exactly match a fixed stress
//! vocabulary after lowercasing. Punctuation is not stripped, so "tired," does
//! not match.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::StressLevel;

/// Vocabulary that marks a token as stress-related
pub const STRESS_KEYWORDS: [&str; 10] = [
    "tired",
    "stressed",
    "overwhelmed",
    "exhausted",
    "burnout",
    "anxious",
    "worried",
    "pressure",
    "deadline",
    "rush",
];

/// Keyword ratio above which text is classified as high stress
pub const HIGH_STRESS_RATIO: f64 = 0.1;
/// Keyword ratio above which text is classified as moderate stress
pub const MODERATE_STRESS_RATIO: f64 = 0.05;

/// Result of scanning a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStressAnalysis {
    pub word_count: usize,
    pub keyword_hits: usize,
    /// keyword_hits / max(1, word_count)
    pub stress_ratio: f64,
    pub stress_level: StressLevel,
    pub headline: String,
    pub recommendations: Vec<String>,
}

/// Scan text for stress keywords
pub fn analyze_text(text: &str) -> TextStressAnalysis {
    let lowered = text.to_lowercase();
    let word_count = lowered.split_whitespace().count();
    let keyword_hits = lowered
        .split_whitespace()
        .filter(|word| STRESS_KEYWORDS.contains(word))
        .count();
    let stress_ratio = keyword_hits as f64 / word_count.max(1) as f64;
    let stress_level = classify_ratio(stress_ratio);

    debug!(word_count, keyword_hits, stress_ratio, "scanned text");

    let (headline, recommendations) = advice(stress_level);

    TextStressAnalysis {
        word_count,
        keyword_hits,
        stress_ratio,
        stress_level,
        headline: headline.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

/// Map a keyword ratio to a stress level. Thresholds are exclusive.
pub fn classify_ratio(ratio: f64) -> StressLevel {
    if ratio > HIGH_STRESS_RATIO {
        StressLevel::High
    } else if ratio > MODERATE_STRESS_RATIO {
        StressLevel::Moderate
    } else {
        StressLevel::Low
    }
}

fn advice(level: StressLevel) -> (&'static str, [&'static str; 3]) {
    match level {
        StressLevel::High => (
            "High stress detected in text",
            [
                "Schedule a break",
                "Consider talking to supervisor",
                "Practice relaxation techniques",
            ],
        ),
        StressLevel::Moderate => (
            "Moderate stress detected",
            ["Take short breaks", "Stay hydrated", "Practice deep breathing"],
        ),
        StressLevel::Low | StressLevel::Unknown => (
            "Text shows normal stress levels",
            [
                "Regular breaks",
                "Good work-life balance",
                "Open communication",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_keywords_in_nine_words() {
        let analysis = analyze_text("I am so tired and stressed about the deadline");

        assert_eq!(analysis.word_count, 9);
        assert_eq!(analysis.keyword_hits, 3);
        assert!((analysis.stress_ratio - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(analysis.stress_level, StressLevel::High);
        assert_eq!(analysis.recommendations[0], "Schedule a break");
    }

    #[test]
    fn test_case_insensitive_whole_words() {
        let analysis = analyze_text("TIRED Tired tiredness retired");
        assert_eq!(analysis.keyword_hits, 2);
    }

    #[test]
    fn test_punctuation_blocks_match() {
        let analysis = analyze_text("so tired, really");
        assert_eq!(analysis.keyword_hits, 0);
        assert_eq!(analysis.stress_level, StressLevel::Low);
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze_text("   ");
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.stress_ratio, 0.0);
        assert_eq!(analysis.stress_level, StressLevel::Low);
    }

    #[test]
    fn test_ratio_thresholds_are_exclusive() {
        assert_eq!(classify_ratio(0.1), StressLevel::Moderate);
        assert_eq!(classify_ratio(0.05), StressLevel::Low);
        assert_eq!(classify_ratio(0.0501), StressLevel::Moderate);
        assert_eq!(classify_ratio(0.11), StressLevel::High);
    }

    #[test]
    fn test_moderate_band() {
        // 1 hit in 14 words
        let text = "the shift went fine overall but the afternoon deadline felt a bit close today";
        let analysis = analyze_text(text);
        assert_eq!(analysis.word_count, 14);
        assert_eq!(analysis.keyword_hits, 1);
        assert_eq!(analysis.stress_level, StressLevel::Moderate);
    }
}
