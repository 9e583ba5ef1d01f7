// ============================================================
// Layer 3 - Sentiment Label
// ============================================================
// The labels file holds one word per review: "positive" or
// "negative". The model consumes them as integers, 1 and 0.
//
// Anything that is not exactly "positive" (after trimming) is
// treated as negative. Callers that care about malformed lines
// can check `is_recognised` and report them.

use serde::{Deserialize, Serialize};

/// The label token that marks a positive review
pub const POSITIVE_LABEL: &str = "positive";

/// The label token that marks a negative review
pub const NEGATIVE_LABEL: &str = "negative";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Parse one line of the labels file.
    pub fn from_line(line: &str) -> Self {
        if line.trim() == POSITIVE_LABEL {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    /// True when the line is one of the two known label words
    pub fn is_recognised(line: &str) -> bool {
        matches!(line.trim(), POSITIVE_LABEL | NEGATIVE_LABEL)
    }

    /// Integer form used in the label vector: 1 = positive, 0 = negative
    pub fn as_label(self) -> u8 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Negative => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_maps_to_one() {
        assert_eq!(Sentiment::from_line("positive").as_label(), 1);
    }

    #[test]
    fn test_anything_else_is_negative() {
        assert_eq!(Sentiment::from_line("negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_line("Positive"), Sentiment::Negative);
        assert_eq!(Sentiment::from_line(""), Sentiment::Negative);
    }

    #[test]
    fn test_trailing_carriage_return_tolerated() {
        assert_eq!(Sentiment::from_line("positive\r"), Sentiment::Positive);
        assert!(Sentiment::is_recognised("negative\r"));
        assert!(!Sentiment::is_recognised("neutral"));
    }
}
