use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::TarjetaError;

const APP_NAME: &str = "tarjeta";

/// Master catalog file name; looked up in the working directory first so a
/// fresh checkout works without copying anything, then in the app data dir.
pub const CATALOG_FILE: &str = "spanish_popular_words-to_english.csv";

pub fn app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn data_file_path(filename: &str) -> PathBuf {
    app_data_dir().join(filename)
}

pub fn catalog_path() -> PathBuf {
    let local = PathBuf::from(CATALOG_FILE);
    if local.exists() {
        local
    } else {
        data_file_path(CATALOG_FILE)
    }
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TarjetaError> {
    let file_path = data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    debug!(path = %file_path.display(), "settings saved");
    Ok(())
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, TarjetaError> {
    let file_path = data_file_path(filename);
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!(path = %file_path.display(), "settings loaded");
    Ok(data)
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            warn!(filename, error = %e, "failed to load settings, using defaults");
            T::default()
        }
    }
}
