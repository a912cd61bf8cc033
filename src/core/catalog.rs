use std::{
    collections::HashSet,
    path::Path,
};

use tracing::info;

use super::{
    errors::TarjetaError,
    models::{
        StudyRange,
        WordRecord,
    },
    row_store,
};

/// The master vocabulary list. Loaded once at startup, never mutated.
#[derive(Debug)]
pub struct WordCatalog {
    records: Vec<WordRecord>,
}

impl WordCatalog {
    pub fn load(path: &Path) -> Result<Self, TarjetaError> {
        let records = row_store::load(path)
            .map_err(|e| TarjetaError::DataUnavailable(format!("{}: {}", path.display(), e)))?;
        if records.is_empty() {
            return Err(TarjetaError::DataUnavailable(format!(
                "{} contains no words",
                path.display()
            )));
        }

        info!(count = records.len(), path = %path.display(), "loaded master catalog");
        Ok(WordCatalog { records })
    }

    pub fn from_records(records: Vec<WordRecord>) -> Self {
        WordCatalog { records }
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Word keys covered by `range`. The end is clamped to the catalog
    /// length and the start to `[1, end]`, so a slice lying entirely past
    /// the catalog collapses onto the last word.
    pub fn keys_in_range(&self, range: StudyRange) -> HashSet<String> {
        let end = range.end.min(self.records.len());
        if end == 0 {
            return HashSet::new();
        }
        let start = range.start.clamp(1, end);

        self.records[start - 1..end].iter().map(|record| record.word.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(words: &[&str]) -> WordCatalog {
        WordCatalog::from_records(
            words.iter().map(|word| WordRecord::new(*word, format!("{}-en", word))).collect(),
        )
    }

    #[test]
    fn keys_in_range_takes_inclusive_one_based_slice() {
        let catalog = catalog(&["a", "b", "c", "d", "e"]);
        let keys = catalog.keys_in_range(StudyRange { start: 2, end: 4 });
        assert_eq!(keys.len(), 3);
        assert!(keys.contains("b") && keys.contains("c") && keys.contains("d"));
    }

    #[test]
    fn keys_in_range_clamps_end_to_catalog_length() {
        let catalog = catalog(&["a", "b", "c"]);
        let keys = catalog.keys_in_range(StudyRange { start: 2, end: 99 });
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn keys_in_range_collapses_onto_the_last_word_past_the_catalog() {
        let catalog = catalog(&["a", "b", "c"]);
        let keys = catalog.keys_in_range(StudyRange { start: 7, end: 9 });
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("c"));
    }
}
