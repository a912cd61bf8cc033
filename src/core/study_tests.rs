#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::core::{
        row_store,
        CardSide,
        Direction,
        StudyPaths,
        StudySignal,
        StudyState,
        TarjetaError,
        TraversalMode,
        ViewMode,
        WordCatalog,
        WordRecord,
    };

    fn catalog(words: &[&str]) -> WordCatalog {
        WordCatalog::from_records(
            words.iter().map(|word| WordRecord::new(*word, format!("{}-en", word))).collect(),
        )
    }

    fn session(words: &[&str]) -> (StudyState, TempDir) {
        let dir = TempDir::new().unwrap();
        let state = StudyState::load(catalog(words), StudyPaths::in_dir(dir.path()));
        (state, dir)
    }

    fn assert_cursor_in_bounds(state: &StudyState) {
        if !state.active().is_empty() {
            assert!(state.cursor() < state.active().len());
        }
    }

    #[test]
    fn to_learn_defaults_to_catalog_copy() {
        let (state, _dir) = session(&["uno", "dos", "tres"]);
        assert_eq!(state.to_learn().len(), 3);
        assert_eq!(state.active().len(), 3);
        assert!(state.learned().is_empty());
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn linear_next_visits_indices_in_cyclic_order() {
        let (mut state, _dir) = session(&["a", "b", "c", "d"]);
        state.set_traversal(TraversalMode::Linear);

        let mut visited = Vec::new();
        for _ in 0..8 {
            assert!(state.next().is_none());
            visited.push(state.cursor());
        }
        assert_eq!(visited, vec![1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn random_next_never_repeats_the_cursor_with_multiple_cards() {
        let (mut state, _dir) = session(&["a", "b", "c"]);
        state.set_traversal(TraversalMode::Random);

        for _ in 0..50 {
            let before = state.cursor();
            assert!(state.next().is_none());
            assert_ne!(state.cursor(), before);
            assert_cursor_in_bounds(&state);
        }
    }

    #[test]
    fn random_next_with_a_single_card_keeps_the_cursor() {
        let (mut state, _dir) = session(&["solo"]);
        state.set_traversal(TraversalMode::Random);

        assert!(state.next().is_none());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn next_on_empty_view_signals_nothing_to_study() {
        let (mut state, _dir) = session(&["a"]);
        state.select_view(ViewMode::Favorites);
        assert_eq!(state.next(), Some(StudySignal::NothingToStudy));
    }

    #[test]
    fn flip_toggles_side_without_moving_the_cursor() {
        let (mut state, _dir) = session(&["hola", "adios"]);
        let cursor = state.cursor();

        assert_eq!(state.flip(), CardSide::Back);
        assert_eq!(state.flip(), CardSide::Front);
        assert_eq!(state.cursor(), cursor);
        assert_eq!(state.active().len(), 2);
    }

    #[test]
    fn display_text_follows_direction_and_side() {
        let (mut state, _dir) = session(&["hola"]);

        assert_eq!(state.display_text(), Some("hola"));
        assert_eq!(state.language_label(), "Spanish");

        state.flip();
        assert_eq!(state.display_text(), Some("hola-en"));
        assert_eq!(state.language_label(), "English");

        state.set_direction(Direction::EnglishToSpanish);
        assert_eq!(state.side(), CardSide::Front);
        assert_eq!(state.display_text(), Some("hola-en"));
        assert_eq!(state.language_label(), "English");
    }

    #[test]
    fn mark_mastered_moves_the_word_to_learned() {
        let (mut state, dir) = session(&["uno", "dos", "tres"]);
        let before = state.to_learn().len();
        let word = state.current().unwrap().word.clone();

        assert_eq!(state.mark_mastered().unwrap(), None);

        assert_eq!(state.to_learn().len(), before - 1);
        assert!(state.to_learn().iter().all(|record| record.word != word));
        assert!(state.learned().iter().any(|record| record.word == word));
        assert_cursor_in_bounds(&state);

        // Both lists hit the disk as part of the operation.
        let paths = StudyPaths::in_dir(dir.path());
        assert_eq!(row_store::load(&paths.to_learn).unwrap().len(), before - 1);
        assert_eq!(row_store::load(&paths.learned).unwrap().len(), 1);
    }

    #[test]
    fn mastering_every_word_ends_in_all_mastered() {
        let (mut state, dir) = session(&["a", "b", "c", "d", "e"]);

        for _ in 0..4 {
            assert_eq!(state.mark_mastered().unwrap(), None);
        }
        assert_eq!(state.mark_mastered().unwrap(), Some(StudySignal::AllMastered));

        assert!(state.to_learn().is_empty());
        assert_eq!(state.learned().len(), 5);
        assert!(state.current().is_none());

        let paths = StudyPaths::in_dir(dir.path());
        assert_eq!(row_store::load(&paths.learned).unwrap().len(), 5);
        assert!(row_store::load(&paths.to_learn).unwrap().is_empty());
    }

    #[test]
    fn mark_mastered_outside_to_learn_is_a_no_op() {
        let (mut state, _dir) = session(&["a", "b"]);
        state.mark_mastered().unwrap();
        state.select_view(ViewMode::Learned);

        let learned_before = state.learned().len();
        assert_eq!(state.mark_mastered().unwrap(), Some(StudySignal::WrongView));
        assert_eq!(state.learned().len(), learned_before);
    }

    #[test]
    fn mark_mastered_removes_every_duplicate_of_the_key() {
        let dir = TempDir::new().unwrap();
        let catalog = WordCatalog::from_records(vec![
            WordRecord::new("banco", "bank"),
            WordRecord::new("banco", "bench"),
            WordRecord::new("mesa", "table"),
        ]);
        let mut state = StudyState::load(catalog, StudyPaths::in_dir(dir.path()));

        assert_eq!(state.mark_mastered().unwrap(), None);
        assert_eq!(state.to_learn().len(), 1);
        assert_eq!(state.learned().len(), 2);
    }

    #[test]
    fn favoriting_from_to_learn_leaves_the_active_list_alone() {
        let (mut state, _dir) = session(&["a", "b", "c"]);
        let active_before = state.active().len();

        assert_eq!(state.toggle_favorite().unwrap(), Some(StudySignal::FavoriteAdded));
        assert_eq!(state.favorites().len(), 1);
        assert_eq!(state.active().len(), active_before);
        assert_eq!(state.to_learn().len(), 3);
    }

    #[test]
    fn favoriting_twice_from_another_view_does_not_duplicate() {
        let (mut state, _dir) = session(&["a", "b"]);
        state.toggle_favorite().unwrap();
        assert_eq!(state.toggle_favorite().unwrap(), Some(StudySignal::AlreadyFavorited));
        assert_eq!(state.favorites().len(), 1);
    }

    #[test]
    fn favorite_toggle_is_its_own_inverse_in_the_favorites_view() {
        let (mut state, _dir) = session(&["a", "b", "c"]);
        state.toggle_favorite().unwrap();
        state.next();
        state.toggle_favorite().unwrap();
        let favorites_before: Vec<String> =
            state.favorites().iter().map(|record| record.word.clone()).collect();

        state.select_view(ViewMode::Favorites);
        assert_eq!(state.toggle_favorite().unwrap(), Some(StudySignal::FavoriteRemoved));
        let removed = favorites_before[0].clone();
        assert!(state.favorites().iter().all(|record| record.word != removed));

        // Re-adding from the favorites view restores the original content.
        state.select_view(ViewMode::ToLearn);
        while state.current().map(|record| record.word.clone()) != Some(removed.clone()) {
            state.set_traversal(TraversalMode::Linear);
            state.next();
        }
        state.toggle_favorite().unwrap();
        let favorites_after: Vec<String> =
            state.favorites().iter().map(|record| record.word.clone()).collect();
        let mut sorted_before = favorites_before.clone();
        let mut sorted_after = favorites_after.clone();
        sorted_before.sort();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);
    }

    #[test]
    fn unfavoriting_the_last_word_signals_no_favorites_left() {
        let (mut state, _dir) = session(&["a", "b"]);
        state.toggle_favorite().unwrap();
        state.select_view(ViewMode::Favorites);

        assert_eq!(state.toggle_favorite().unwrap(), Some(StudySignal::NoFavoritesLeft));
        assert!(state.favorites().is_empty());
        assert!(state.current().is_none());
    }

    #[test]
    fn selecting_an_empty_view_signals_and_keeps_the_session_alive() {
        let (mut state, _dir) = session(&["a"]);
        assert_eq!(state.select_view(ViewMode::Learned), Some(StudySignal::EmptyView));
        assert!(state.current().is_none());

        assert!(state.select_view(ViewMode::ToLearn).is_none());
        assert!(state.current().is_some());
    }

    #[test]
    fn set_range_restricts_the_active_list_to_the_catalog_slice() {
        let words = ["w1", "w2", "w3", "w4", "w5", "w6", "w7", "w8", "w9", "w10"];
        let (mut state, _dir) = session(&words);

        assert_eq!(state.set_range(2, 4).unwrap(), None);
        let keys: Vec<&str> = state.active().iter().map(|record| record.word.as_str()).collect();
        assert_eq!(keys, vec!["w2", "w3", "w4"]);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn range_filters_by_key_regardless_of_base_order() {
        let words = ["w1", "w2", "w3", "w4", "w5"];
        let dir = TempDir::new().unwrap();
        let paths = StudyPaths::in_dir(dir.path());

        // Persist a to-learn pool in reverse order, then load the session
        // from disk.
        let reversed: Vec<WordRecord> =
            words.iter().rev().map(|word| WordRecord::new(*word, format!("{}-en", word))).collect();
        row_store::replace(&paths.to_learn, &reversed).unwrap();
        let mut state = StudyState::load(catalog(&words), paths);

        state.set_range(2, 4).unwrap();
        let keys: Vec<&str> = state.active().iter().map(|record| record.word.as_str()).collect();
        assert_eq!(keys, vec!["w4", "w3", "w2"]);
    }

    #[test]
    fn clear_range_restores_the_full_base_collection() {
        let (mut state, _dir) = session(&["a", "b", "c", "d", "e"]);
        state.set_range(1, 3).unwrap();
        assert_eq!(state.active().len(), 3);

        assert!(state.clear_range().is_none());
        assert_eq!(state.active().len(), 5);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn set_range_rejects_bad_bounds() {
        let (mut state, _dir) = session(&["a", "b", "c"]);
        assert!(matches!(state.set_range(0, 2), Err(TarjetaError::InvalidRange)));
        assert!(matches!(state.set_range(3, 2), Err(TarjetaError::InvalidRange)));
        assert!(state.range().is_none());
    }

    #[test]
    fn set_range_signals_when_the_view_ends_up_empty() {
        let (mut state, _dir) = session(&["a", "b", "c"]);
        state.toggle_favorite().unwrap();
        state.select_view(ViewMode::Favorites);

        // The only favorite is "a" at catalog position 1.
        assert_eq!(state.set_range(2, 3).unwrap(), Some(StudySignal::EmptyRange));
        assert!(state.current().is_none());
    }

    #[test]
    fn range_entirely_past_the_catalog_clamps_to_the_last_word() {
        let words = ["w1", "w2", "w3", "w4", "w5", "w6", "w7", "w8", "w9", "w10"];
        let (mut state, _dir) = session(&words);

        assert_eq!(state.set_range(12, 15).unwrap(), None);
        let keys: Vec<&str> = state.active().iter().map(|record| record.word.as_str()).collect();
        assert_eq!(keys, vec!["w10"]);
    }

    #[test]
    fn clear_range_on_an_empty_base_signals_empty_list() {
        let (mut state, _dir) = session(&["a", "b"]);
        assert_eq!(state.select_view(ViewMode::Favorites), Some(StudySignal::EmptyView));
        assert_eq!(state.clear_range(), Some(StudySignal::EmptyList));
    }

    #[test]
    fn failed_writes_leave_collections_unchanged() {
        let dir = TempDir::new().unwrap();
        // A directory that does not exist makes every write fail.
        let paths = StudyPaths::in_dir(&dir.path().join("missing"));
        let mut state = StudyState::load(catalog(&["a", "b", "c"]), paths);

        let to_learn_before = state.to_learn().to_vec();
        assert!(state.mark_mastered().is_err());
        assert_eq!(state.to_learn(), to_learn_before.as_slice());
        assert!(state.learned().is_empty());

        assert!(state.toggle_favorite().is_err());
        assert!(state.favorites().is_empty());

        assert!(state.reset_study_list().is_err());
        assert_eq!(state.to_learn(), to_learn_before.as_slice());
    }

    #[test]
    fn rebuild_is_idempotent_for_unchanged_inputs() {
        let (mut state, _dir) = session(&["a", "b", "c", "d"]);
        state.set_range(1, 3).unwrap();

        let first: Vec<String> =
            state.active().iter().map(|record| record.word.clone()).collect();
        let cursor_first = state.cursor();

        state.set_range(1, 3).unwrap();
        let second: Vec<String> =
            state.active().iter().map(|record| record.word.clone()).collect();

        assert_eq!(first, second);
        assert_eq!(cursor_first, state.cursor());
    }

    #[test]
    fn reset_study_list_restores_the_pool_and_truncates_learned() {
        let (mut state, dir) = session(&["a", "b", "c"]);
        state.mark_mastered().unwrap();
        state.toggle_favorite().unwrap();
        assert_eq!(state.to_learn().len(), 2);
        assert_eq!(state.learned().len(), 1);

        state.reset_study_list().unwrap();

        assert_eq!(state.to_learn().len(), 3);
        assert!(state.learned().is_empty());
        assert_eq!(state.favorites().len(), 1);
        assert_eq!(state.cursor(), 0);

        let paths = StudyPaths::in_dir(dir.path());
        assert_eq!(row_store::load(&paths.to_learn).unwrap().len(), 3);
        assert!(row_store::load(&paths.learned).unwrap().is_empty());
    }

    #[test]
    fn cursor_stays_in_bounds_across_a_mixed_session() {
        let (mut state, _dir) = session(&["a", "b", "c", "d", "e", "f"]);
        state.set_traversal(TraversalMode::Linear);

        for step in 0..20 {
            match step % 4 {
                0 => {
                    state.next();
                }
                1 => {
                    state.mark_mastered().unwrap();
                }
                2 => {
                    state.toggle_favorite().unwrap();
                }
                _ => {
                    state.flip();
                }
            }
            assert_cursor_in_bounds(&state);
        }
    }
}
