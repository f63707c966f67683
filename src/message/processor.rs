//! Text processing module
//!
//! Turns a raw submission into the trimmed text plus its ordered ASL
//! matches. Pure: the caller decides whether to store the result.

use std::fmt;

use super::types::AslMatch;
use crate::vocab::Vocabulary;

/// Validation failure: the submitted text was empty or whitespace-only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyMessage;

impl fmt::Display for EmptyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("No text received")
    }
}

impl std::error::Error for EmptyMessage {}

/// Result of a successful processing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedText {
    /// Original-case text with surrounding whitespace removed
    pub text: String,
    /// Matches in the order their words appeared in the text
    pub asl: Vec<AslMatch>,
}

/// Process a raw message: trim, reject empty input, then lowercase,
/// split on whitespace and collect every word the vocabulary knows.
///
/// Words without a clip are dropped; a text with no known words still
/// processes successfully with an empty match list.
pub fn process_text(raw: &str, vocab: &Vocabulary) -> Result<ProcessedText, EmptyMessage> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(EmptyMessage);
    }

    let asl = text
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| {
            vocab.lookup(word).map(|video| AslMatch {
                word: word.to_string(),
                video: video.to_string(),
            })
        })
        .collect();

    Ok(ProcessedText {
        text: text.to_string(),
        asl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::builtin("/static")
    }

    #[test]
    fn test_full_sentence_matches_in_order() {
        let processed = process_text("hello how are you", &vocab()).unwrap();
        assert_eq!(processed.text, "hello how are you");

        let words: Vec<&str> = processed.asl.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["hello", "how", "are", "you"]);

        let videos: Vec<&str> = processed.asl.iter().map(|m| m.video.as_str()).collect();
        assert_eq!(
            videos,
            vec![
                "/static/hello.mp4",
                "/static/how.mp4",
                "/static/are.mp4",
                "/static/you.mp4"
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert_eq!(process_text("", &vocab()), Err(EmptyMessage));
        assert_eq!(process_text("   ", &vocab()), Err(EmptyMessage));
        assert_eq!(process_text("\t\n", &vocab()), Err(EmptyMessage));
    }

    #[test]
    fn test_unknown_words_yield_no_matches() {
        let processed = process_text("xyz unknownword", &vocab()).unwrap();
        assert_eq!(processed.text, "xyz unknownword");
        assert!(processed.asl.is_empty());
    }

    #[test]
    fn test_mixed_case_still_matches() {
        let processed = process_text("Hello THANK", &vocab()).unwrap();
        let words: Vec<&str> = processed.asl.iter().map(|m| m.word.as_str()).collect();
        // Matches carry the lowercased token, not the original casing
        assert_eq!(words, vec!["hello", "thank"]);
    }

    #[test]
    fn test_text_is_trimmed_but_casing_kept() {
        let processed = process_text("  Hello you  ", &vocab()).unwrap();
        assert_eq!(processed.text, "Hello you");
        assert_eq!(processed.asl.len(), 2);
    }

    #[test]
    fn test_unknown_words_interleaved() {
        let processed = process_text("well hello there you", &vocab()).unwrap();
        let words: Vec<&str> = processed.asl.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["hello", "you"]);
    }

    #[test]
    fn test_empty_message_display() {
        assert_eq!(EmptyMessage.to_string(), "No text received");
    }
}
