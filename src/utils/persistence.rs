//! Files under ~/.arcade/.

use log::warn;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = ".arcade";

/// Path of `filename` inside ~/.arcade/. The directory is created on demand.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(DATA_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir.join(filename))
}

/// Read `filename` from ~/.arcade/ as JSON, or `T::default()`.
pub fn load_json_or_default<T: Default + DeserializeOwned>(filename: &str) -> T {
    match data_path(filename) {
        Ok(path) => read_json_or_default(&path),
        Err(_) => T::default(),
    }
}

/// A missing file is the normal first-run case; a malformed one is logged.
fn read_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> T {
    let Ok(json) = fs::read_to_string(path) else {
        return T::default();
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!("Ignoring {}: {}", path.display(), e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("arcade-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_data_path_is_under_arcade_dir() {
        let path = data_path("config.json").unwrap();
        assert!(path.ends_with(".arcade/config.json"));
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = std::env::temp_dir().join("arcade-no-such-file.json");
        let config: Config = read_json_or_default(&path);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_gives_default() {
        let path = scratch_file("bad.json", "{ round_seconds: ");
        let config: Config = read_json_or_default(&path);
        fs::remove_file(&path).ok();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_valid_file_is_read() {
        let path = scratch_file("good.json", r#"{"sound": false}"#);
        let config: Config = read_json_or_default(&path);
        fs::remove_file(&path).ok();
        assert!(!config.sound);
        assert_eq!(config.win_threshold, Config::default().win_threshold);
    }
}
