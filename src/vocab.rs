//! ASL vocabulary module
//!
//! Maps individual words to their sign-language demonstration clips.
//! The mapping is built once at startup and never changes afterwards.

use std::collections::HashMap;

/// Clips shipped with the service, keyed by the word they demonstrate.
const BUILTIN_CLIPS: &[(&str, &str)] = &[
    ("hello", "hello.mp4"),
    ("how", "how.mp4"),
    ("are", "are.mp4"),
    ("you", "you.mp4"),
    ("thank", "thank.mp4"),
];

/// Immutable word → video-path mapping
pub struct Vocabulary {
    entries: HashMap<String, String>,
}

impl Vocabulary {
    /// Build the built-in vocabulary, resolving clip paths under the
    /// given static route prefix (e.g. `/static` → `/static/hello.mp4`).
    pub fn builtin(static_route: &str) -> Self {
        let prefix = static_route.trim_end_matches('/');
        Self::from_entries(
            BUILTIN_CLIPS
                .iter()
                .map(|(word, clip)| ((*word).to_string(), format!("{prefix}/{clip}"))),
        )
    }

    /// Build a vocabulary from explicit word → path entries.
    ///
    /// Words are lowercased on insertion so lookups stay case-insensitive
    /// regardless of how the entries were written.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, path)| (word.to_lowercase(), path))
                .collect(),
        }
    }

    /// Look up the clip path for a word.
    ///
    /// Input is case-normalized first; absence means the word simply has
    /// no clip, it is not an error.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        let normalized = word.to_lowercase();
        self.entries.get(&normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_words_resolve() {
        let vocab = Vocabulary::builtin("/static");
        assert_eq!(vocab.lookup("hello"), Some("/static/hello.mp4"));
        assert_eq!(vocab.lookup("how"), Some("/static/how.mp4"));
        assert_eq!(vocab.lookup("are"), Some("/static/are.mp4"));
        assert_eq!(vocab.lookup("you"), Some("/static/you.mp4"));
        assert_eq!(vocab.lookup("thank"), Some("/static/thank.mp4"));
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_unknown_word_is_absent() {
        let vocab = Vocabulary::builtin("/static");
        assert_eq!(vocab.lookup("goodbye"), None);
        assert_eq!(vocab.lookup(""), None);
    }

    #[test]
    fn test_lookup_is_case_normalized() {
        let vocab = Vocabulary::builtin("/static");
        assert_eq!(vocab.lookup("Hello"), Some("/static/hello.mp4"));
        assert_eq!(vocab.lookup("THANK"), Some("/static/thank.mp4"));
        assert_eq!(vocab.lookup("yOu"), Some("/static/you.mp4"));
    }

    #[test]
    fn test_prefix_trailing_slash() {
        let vocab = Vocabulary::builtin("/static/");
        assert_eq!(vocab.lookup("hello"), Some("/static/hello.mp4"));
    }

    #[test]
    fn test_custom_entries() {
        let vocab = Vocabulary::from_entries(vec![(
            "Please".to_string(),
            "/clips/please.webm".to_string(),
        )]);
        assert_eq!(vocab.lookup("please"), Some("/clips/please.webm"));
        assert!(!vocab.is_empty());
    }
}
