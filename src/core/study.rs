//! The study-list state machine.
//!
//! Owns the mutable collections (to-learn pool, learned list, favorites),
//! the view/range/traversal configuration, and the cursor into the derived
//! active list. Every structural mutation is written to disk before the
//! in-memory collection is updated, so a failed write leaves the session
//! state unchanged.

use std::{
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};

use rand::Rng;
use tracing::{
    info,
    warn,
};

use super::{
    catalog::WordCatalog,
    errors::TarjetaError,
    models::{
        CardSide,
        Direction,
        StudyRange,
        TraversalMode,
        ViewMode,
        WordRecord,
    },
    row_store,
};

pub const DEFAULT_FLIP_DELAY_SECS: u32 = 3;

/// Where the three mutable word lists live on disk.
#[derive(Debug, Clone)]
pub struct StudyPaths {
    pub to_learn: PathBuf,
    pub learned: PathBuf,
    pub favorites: PathBuf,
}

impl StudyPaths {
    pub fn in_dir(dir: &Path) -> Self {
        StudyPaths {
            to_learn: dir.join("words_to_learn.csv"),
            learned: dir.join("words_learned.csv"),
            favorites: dir.join("favorite_words.csv"),
        }
    }
}

/// Informational outcome of a study operation. These are states the session
/// recovers from locally; they are surfaced so the display can explain what
/// happened, never raised as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudySignal {
    /// The selected view has no words under the current range.
    EmptyView,
    /// The new range leaves the current view empty.
    EmptyRange,
    /// Rebuilding the active list left nothing to show.
    EmptyList,
    /// There is no card to act on.
    NothingToStudy,
    /// The operation only applies to the to-learn view.
    WrongView,
    /// The to-learn view is drained. Terminal for this view.
    AllMastered,
    /// The current word is already in favorites.
    AlreadyFavorited,
    FavoriteAdded,
    FavoriteRemoved,
    /// Unfavoriting drained the favorites view.
    NoFavoritesLeft,
}

impl StudySignal {
    pub fn message(&self) -> &'static str {
        match self {
            StudySignal::EmptyView => "No words in this view",
            StudySignal::EmptyRange => "No words fall inside that range",
            StudySignal::EmptyList => "No words in this list",
            StudySignal::NothingToStudy => "No words available to study",
            StudySignal::WrongView => "Only available in the Words to Learn view",
            StudySignal::AllMastered => "You've mastered all words!",
            StudySignal::AlreadyFavorited => "Already in favorites",
            StudySignal::FavoriteAdded => "Added to favorites",
            StudySignal::FavoriteRemoved => "Removed from favorites",
            StudySignal::NoFavoritesLeft => "No favorites left",
        }
    }
}

pub struct StudyState {
    catalog: WordCatalog,
    paths: StudyPaths,

    to_learn: Vec<WordRecord>,
    learned: Vec<WordRecord>,
    favorites: Vec<WordRecord>,

    view: ViewMode,
    traversal: TraversalMode,
    direction: Direction,
    range: Option<StudyRange>,

    active: Vec<WordRecord>,
    cursor: usize,
    side: CardSide,
    flip_delay: Duration,
}

impl StudyState {
    /// Builds a session from the catalog and whatever lists exist on disk.
    /// A missing to-learn file means a fresh start: the pool defaults to a
    /// full copy of the catalog. Missing learned/favorites files are empty.
    pub fn load(catalog: WordCatalog, paths: StudyPaths) -> Self {
        let to_learn = load_or(&paths.to_learn, || catalog.records().to_vec());
        let learned = load_or(&paths.learned, Vec::new);
        let favorites = load_or(&paths.favorites, Vec::new);

        let mut state = StudyState {
            catalog,
            paths,
            to_learn,
            learned,
            favorites,
            view: ViewMode::default(),
            traversal: TraversalMode::default(),
            direction: Direction::default(),
            range: None,
            active: Vec::new(),
            cursor: 0,
            side: CardSide::Front,
            flip_delay: Duration::from_secs(DEFAULT_FLIP_DELAY_SECS as u64),
        };
        state.rebuild_active();
        state
    }

    /// Switches the base collection, rebuilds the active list under the
    /// current range, and starts over from the first card.
    pub fn select_view(&mut self, mode: ViewMode) -> Option<StudySignal> {
        self.view = mode;
        self.side = CardSide::Front;
        let empty = self.rebuild_active().is_some();
        self.cursor = 0;
        empty.then_some(StudySignal::EmptyView)
    }

    /// Restricts the active list to words appearing in the 1-based inclusive
    /// catalog slice `[start, end]`. The end is clamped to the catalog
    /// length before storing.
    pub fn set_range(&mut self, start: usize, end: usize) -> Result<Option<StudySignal>, TarjetaError> {
        if start < 1 || end < start {
            return Err(TarjetaError::InvalidRange);
        }

        let end = end.min(self.catalog.len()).max(1);
        self.range = Some(StudyRange { start, end });
        self.side = CardSide::Front;
        let empty = self.rebuild_active().is_some();
        self.cursor = 0;

        info!(start, end, "study range set");
        Ok(empty.then_some(StudySignal::EmptyRange))
    }

    pub fn clear_range(&mut self) -> Option<StudySignal> {
        self.range = None;
        self.side = CardSide::Front;
        let empty = self.rebuild_active().is_some();
        self.cursor = 0;
        empty.then_some(StudySignal::EmptyList)
    }

    pub fn set_traversal(&mut self, mode: TraversalMode) {
        self.traversal = mode;
    }

    /// Stores the direction and forces the front side so the next render
    /// starts from the newly chosen front language.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.side = CardSide::Front;
    }

    pub fn set_flip_delay(&mut self, seconds: u32) {
        self.flip_delay = Duration::from_secs(seconds.max(1) as u64);
    }

    /// Advances the cursor. Linear traversal walks the active list in cyclic
    /// order; random traversal draws a uniform index that differs from the
    /// current one whenever more than one card is available.
    pub fn next(&mut self) -> Option<StudySignal> {
        if self.active.is_empty() {
            return Some(StudySignal::NothingToStudy);
        }

        let len = self.active.len();
        self.cursor = match self.traversal {
            TraversalMode::Linear => (self.cursor + 1) % len,
            TraversalMode::Random => {
                if len == 1 {
                    self.cursor
                } else {
                    let mut rng = rand::rng();
                    loop {
                        let candidate = rng.random_range(0..len);
                        if candidate != self.cursor {
                            break candidate;
                        }
                    }
                }
            }
        };
        self.side = CardSide::Front;
        None
    }

    /// Toggles the displayed side of the current card. Touches nothing else.
    pub fn flip(&mut self) -> CardSide {
        self.side = self.side.flipped();
        self.side
    }

    /// Moves every record matching the current word key from the to-learn
    /// pool to the learned list, on disk and in memory. Only valid in the
    /// to-learn view.
    pub fn mark_mastered(&mut self) -> Result<Option<StudySignal>, TarjetaError> {
        if self.view != ViewMode::ToLearn {
            return Ok(Some(StudySignal::WrongView));
        }
        let Some(current) = self.active.get(self.cursor) else {
            return Ok(Some(StudySignal::NothingToStudy));
        };

        let key = current.word.clone();
        let (removed, remaining): (Vec<WordRecord>, Vec<WordRecord>) =
            self.to_learn.iter().cloned().partition(|record| record.word == key);

        // Disk first: a failed write must leave the session untouched.
        row_store::replace(&self.paths.to_learn, &remaining)?;
        row_store::append(&self.paths.learned, &removed)?;

        info!(word = %key, remaining = remaining.len(), "word mastered");
        self.to_learn = remaining;
        self.learned.extend(removed);
        self.side = CardSide::Front;

        if self.rebuild_active().is_some() {
            return Ok(Some(StudySignal::AllMastered));
        }
        Ok(None)
    }

    /// In the favorites view, removes the current word from favorites (or
    /// re-adds it when the list and the screen disagree). In any other view,
    /// adds the current word to favorites without touching the active list.
    pub fn toggle_favorite(&mut self) -> Result<Option<StudySignal>, TarjetaError> {
        let Some(current) = self.active.get(self.cursor).cloned() else {
            return Ok(Some(StudySignal::NothingToStudy));
        };

        let key = current.word.clone();
        let already_present = self.favorites.iter().any(|record| record.word == key);

        if self.view == ViewMode::Favorites {
            if already_present {
                let remaining: Vec<WordRecord> = self
                    .favorites
                    .iter()
                    .filter(|record| record.word != key)
                    .cloned()
                    .collect();
                row_store::replace(&self.paths.favorites, &remaining)?;

                info!(word = %key, "favorite removed");
                self.favorites = remaining;
                self.side = CardSide::Front;
                if self.rebuild_active().is_some() {
                    return Ok(Some(StudySignal::NoFavoritesLeft));
                }
                return Ok(Some(StudySignal::FavoriteRemoved));
            }

            // The card on screen is missing from the list; heal by re-adding.
            warn!(word = %key, "favorites view out of sync, re-adding");
            self.push_favorite(current)?;
            self.rebuild_active();
            return Ok(Some(StudySignal::FavoriteAdded));
        }

        if already_present {
            return Ok(Some(StudySignal::AlreadyFavorited));
        }
        self.push_favorite(current)?;
        Ok(Some(StudySignal::FavoriteAdded))
    }

    /// Starts the study list over: the to-learn pool becomes a fresh copy of
    /// the catalog and the learned list is truncated. Favorites are kept.
    /// Destructive; callers are expected to confirm with the user first.
    pub fn reset_study_list(&mut self) -> Result<(), TarjetaError> {
        let fresh = self.catalog.records().to_vec();
        row_store::replace(&self.paths.to_learn, &fresh)?;
        row_store::replace(&self.paths.learned, &[])?;

        info!(count = fresh.len(), "study list reset");
        self.to_learn = fresh;
        self.learned.clear();
        self.side = CardSide::Front;
        self.rebuild_active();
        self.cursor = 0;
        Ok(())
    }

    pub fn current(&self) -> Option<&WordRecord> {
        self.active.get(self.cursor)
    }

    /// The text to render for the current card, given the direction and the
    /// side that is showing.
    pub fn display_text(&self) -> Option<&str> {
        let record = self.current()?;
        let spanish_showing = self.spanish_showing();
        Some(if spanish_showing { &record.word } else { &record.translation })
    }

    pub fn language_label(&self) -> &'static str {
        if self.spanish_showing() {
            "Spanish"
        } else {
            "English"
        }
    }

    fn spanish_showing(&self) -> bool {
        matches!(
            (self.direction, self.side),
            (Direction::SpanishToEnglish, CardSide::Front)
                | (Direction::EnglishToSpanish, CardSide::Back)
        )
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn traversal(&self) -> TraversalMode {
        self.traversal
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn range(&self) -> Option<StudyRange> {
        self.range
    }

    pub fn flip_delay(&self) -> Duration {
        self.flip_delay
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    pub fn active(&self) -> &[WordRecord] {
        &self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn to_learn(&self) -> &[WordRecord] {
        &self.to_learn
    }

    pub fn learned(&self) -> &[WordRecord] {
        &self.learned
    }

    pub fn favorites(&self) -> &[WordRecord] {
        &self.favorites
    }

    /// Rederives the active list from the current base collection and range,
    /// preserving base order, then clamps the cursor back into bounds.
    /// Returns the empty signal when there is nothing left to show.
    fn rebuild_active(&mut self) -> Option<StudySignal> {
        let allowed = self.range.map(|range| self.catalog.keys_in_range(range));
        let base = match self.view {
            ViewMode::ToLearn => &self.to_learn,
            ViewMode::Learned => &self.learned,
            ViewMode::Favorites => &self.favorites,
        };

        self.active = match &allowed {
            None => base.clone(),
            Some(keys) => base.iter().filter(|record| keys.contains(&record.word)).cloned().collect(),
        };

        if self.active.is_empty() {
            self.cursor = 0;
            return Some(StudySignal::EmptyList);
        }
        self.cursor %= self.active.len();
        None
    }

    fn push_favorite(&mut self, record: WordRecord) -> Result<(), TarjetaError> {
        let mut updated = self.favorites.clone();
        updated.push(record);
        row_store::replace(&self.paths.favorites, &updated)?;

        info!(word = %updated.last().map(|r| r.word.as_str()).unwrap_or_default(), "favorite added");
        self.favorites = updated;
        Ok(())
    }
}

fn load_or(path: &Path, fallback: impl FnOnce() -> Vec<WordRecord>) -> Vec<WordRecord> {
    if !path.exists() {
        return fallback();
    }
    match row_store::load(path) {
        Ok(records) => records,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load word list, starting fresh");
            fallback()
        }
    }
}
