// ============================================================
// Layer 4 - Text Preprocessor
// ============================================================
// Turns the raw corpus text into word lists, one per review.
//
// The corpus file is one review per line. Cleaning is deliberately
// simple and not configurable:
//   1. Drop every ASCII punctuation character (the fixed set below)
//   2. Split on '\n' to recover the review boundaries
//   3. Split each review on whitespace to get its words
//
// Case is preserved: "Good" and "good" are different tokens.
//
// A review made only of punctuation or whitespace ends up as an
// empty word list. It is kept here so review i still lines up with
// label i; the encoder drops it later together with its label.
//
// A single trailing newline at the end of the file is ignored, so
// a conventionally terminated file does not grow a phantom review.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

/// Characters removed before tokenisation.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Split newline-delimited text into records, ignoring one trailing
/// line terminator. Shared by the review and label parsers so both
/// files are counted the same way.
pub fn split_records(text: &str) -> std::str::Split<'_, char> {
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    text.split('\n')
}

// ─── NormalizedCorpus ─────────────────────────────────────────────────────────
/// Output of the preprocessor: the words of every review, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCorpus {
    pub reviews: Vec<Vec<String>>,
}

impl NormalizedCorpus {
    /// Flat stream of every token in the corpus, used for frequency counting.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.reviews
            .iter()
            .flat_map(|words| words.iter().map(String::as_str))
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Number of reviews with no words left after cleaning
    pub fn empty_count(&self) -> usize {
        self.reviews.iter().filter(|r| r.is_empty()).count()
    }
}

// ─── Preprocessor ─────────────────────────────────────────────────────────────
pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Remove every punctuation character, leaving newlines and
    /// other whitespace untouched.
    pub fn strip_punctuation(&self, text: &str) -> String {
        text.chars().filter(|c| !PUNCTUATION.contains(*c)).collect()
    }

    /// Clean a whole corpus and split it into per-review word lists.
    pub fn normalize(&self, text: &str) -> NormalizedCorpus {
        let reviews = split_records(text)
            .map(|review| self.words(review))
            .collect();

        NormalizedCorpus { reviews }
    }

    /// Clean a single review. Any newlines inside it are treated
    /// as ordinary whitespace.
    pub fn words(&self, review: &str) -> Vec<String> {
        self.strip_punctuation(review)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_strips_punctuation_and_splits_reviews() {
        let p      = Preprocessor::new();
        let corpus = p.normalize("good movie\nbad film.");
        assert_eq!(corpus.reviews, vec![words(&["good", "movie"]), words(&["bad", "film"])]);
    }

    #[test]
    fn test_punctuation_inside_words_joins_them() {
        // "don't" loses its apostrophe rather than splitting in two
        let p = Preprocessor::new();
        assert_eq!(p.words("don't stop!"), words(&["dont", "stop"]));
    }

    #[test]
    fn test_case_is_preserved() {
        let p = Preprocessor::new();
        assert_eq!(p.words("Great great"), words(&["Great", "great"]));
    }

    #[test]
    fn test_punctuation_only_review_is_empty_but_kept() {
        let p      = Preprocessor::new();
        let corpus = p.normalize("fine\n!!! ...\nok");
        assert_eq!(corpus.review_count(), 3);
        assert!(corpus.reviews[1].is_empty());
        assert_eq!(corpus.empty_count(), 1);
    }

    #[test]
    fn test_flat_tokens_follow_review_order() {
        let p      = Preprocessor::new();
        let corpus = p.normalize("a b\nc\n\nd a");
        let flat: Vec<&str> = corpus.tokens().collect();
        assert_eq!(flat, vec!["a", "b", "c", "d", "a"]);
    }

    #[test]
    fn test_empty_string() {
        let p      = Preprocessor::new();
        let corpus = p.normalize("");
        assert_eq!(corpus.tokens().count(), 0);
        // One empty record, exactly like an empty labels file
        assert_eq!(corpus.review_count(), 1);
    }

    #[test]
    fn test_single_trailing_newline_ignored() {
        assert_eq!(split_records("a\nb\n").count(), 2);
        assert_eq!(split_records("a\r\nb\r\n").count(), 2);
        // Only one terminator is dropped; a blank last line is still a record
        assert_eq!(split_records("a\nb\n\n").count(), 3);
    }

    #[test]
    fn test_carriage_returns_become_whitespace() {
        let p      = Preprocessor::new();
        let corpus = p.normalize("one two\r\nthree\r\n");
        assert_eq!(corpus.reviews, vec![words(&["one", "two"]), words(&["three"])]);
    }
}
