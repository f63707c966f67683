// Message data types
// Wire shapes for stored messages and their ASL matches

use serde::{Deserialize, Serialize};

/// A word found in the vocabulary, paired with its clip path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AslMatch {
    pub word: String,
    pub video: String,
}

/// One accepted text submission
///
/// `text` keeps the original casing (trimmed); `asl` holds the matches in
/// the order the words appeared. Records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub text: String,
    pub asl: Vec<AslMatch>,
}
