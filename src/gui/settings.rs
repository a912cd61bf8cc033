use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    study::DEFAULT_FLIP_DELAY_SECS,
    Direction,
    TraversalMode,
};

pub const SETTINGS_FILE: &str = "settings.json";

/// User preferences that survive across sessions. View, range, and cursor
/// are session state and deliberately not stored here.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub direction: Direction,
    pub traversal: TraversalMode,
    pub flip_delay_secs: u32,
}

impl Default for SettingsData {
    fn default() -> Self {
        SettingsData {
            direction: Direction::default(),
            traversal: TraversalMode::default(),
            flip_delay_secs: DEFAULT_FLIP_DELAY_SECS,
        }
    }
}
