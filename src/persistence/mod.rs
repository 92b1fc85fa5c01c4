use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::ReigoError;

const APP_NAME: &str = "reigo";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join(APP_NAME)
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> Result<(), ReigoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    log::info!("Data saved to: {}", path.display());
    Ok(())
}

/// Missing files load as `T::default()`; unreadable or malformed ones are errors.
pub fn load_json<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T, ReigoError> {
    if !path.exists() {
        log::debug!("{} not found, using defaults", path.display());
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    log::debug!("Data loaded from: {}", path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_round_trip_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sample.json");
        let sample = Sample { name: "rtk".to_string(), count: 3 };

        save_json(&sample, &path).unwrap();

        assert_eq!(load_json::<Sample>(&path).unwrap(), sample);
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Sample = load_json(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_json::<Sample>(&path), Err(ReigoError::Json(_))));
    }

    #[test]
    fn test_data_file_lives_in_app_dir() {
        let path = get_data_file_path("settings.json");
        assert_eq!(path, get_app_data_dir().join("settings.json"));
    }
}
