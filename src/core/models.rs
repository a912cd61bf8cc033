use serde::{
    Deserialize,
    Serialize,
};

/// One vocabulary pair as read from a word list file. Any columns beyond the
/// word and its translation are carried along untouched so that rewriting a
/// list never loses data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub translation: String,
    pub extra: Vec<(String, String)>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        WordRecord { word: word.into(), translation: translation.into(), extra: Vec::new() }
    }
}

/// Which collection the session draws cards from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    ToLearn,
    Learned,
    Favorites,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::ToLearn => "Words to Learn",
            ViewMode::Learned => "Learned",
            ViewMode::Favorites => "Favorites",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::ToLearn
    }
}

/// Which language is on the front of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    SpanishToEnglish,
    EnglishToSpanish,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::SpanishToEnglish
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalMode {
    Random,
    Linear,
}

impl Default for TraversalMode {
    fn default() -> Self {
        TraversalMode::Random
    }
}

/// Display side of the current card. Session state only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    pub fn flipped(self) -> Self {
        match self {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        }
    }
}

/// 1-based inclusive slice of the master catalog. When set, the active list
/// only keeps words whose key falls inside this slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyRange {
    pub start: usize,
    pub end: usize,
}
