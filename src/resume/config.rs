use crate::resume::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "resume-dashboard";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join(APP_DIR).join("config.jsonc"))
}

pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .or_else(dirs::config_dir)
        .ok_or(ConfigError::DataDirNotFound)?;

    Ok(data_dir.join(APP_DIR))
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}

impl AppConfig {
    pub fn resumes_path(&self) -> Result<PathBuf> {
        match &self.resumes_path {
            Some(path) => Ok(path.clone()),
            None => Ok(get_data_dir()?.join("resumes.json")),
        }
    }

    pub fn local_store_path(&self) -> Result<PathBuf> {
        match &self.local_store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(get_data_dir()?.join("local-storage.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(APP_DIR));
        assert!(path.to_string_lossy().ends_with("config.jsonc"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.jsonc")).unwrap();
        assert_eq!(config, AppConfig::new());
    }

    #[test]
    fn test_load_config_with_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{
                // keep toasts short
                "toast_duration_ms": 1200,
                "resumes_path": "/tmp/resumes.json"
            }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.toast_duration_ms, 1200);
        assert_eq!(
            config.resumes_path().unwrap(),
            PathBuf::from("/tmp/resumes.json")
        );
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_default_store_paths() {
        let config = AppConfig::new();
        let resumes = config.resumes_path().unwrap();
        let local = config.local_store_path().unwrap();
        assert!(resumes.ends_with("resume-dashboard/resumes.json"));
        assert!(local.ends_with("resume-dashboard/local-storage.json"));
    }
}
