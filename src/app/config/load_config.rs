//! Configuration loading from the prompt-builder root directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError};

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "PROMPT_BUILDER_HOME";

const ROOT_DIR_NAME: &str = ".prompt-builder";
const CONFIG_FILE: &str = "config.toml";

/// Resolve the root directory: `$PROMPT_BUILDER_HOME`, else `$HOME/.prompt-builder`.
pub fn resolve_root() -> Result<PathBuf, AppError> {
    if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root));
    }

    let home = std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::config_error(format!("Neither {} nor HOME is set", HOME_ENV)))?;
    Ok(PathBuf::from(home).join(ROOT_DIR_NAME))
}

/// Load `config.toml` from `root`. A missing file yields the defaults.
pub fn load_config(root: &Path) -> Result<AppConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
[completion]
api_url = "https://example.com/v1"
model = "gemini-pro"
timeout_secs = 5

[storage]
dir = "data"
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.completion.api_url.as_str(), "https://example.com/v1");
        assert_eq!(config.completion.model, "gemini-pro");
        assert_eq!(config.completion.timeout_secs, 5);
        assert_eq!(config.storage.dir, "data");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.completion.model, "gemini-1.5-flash");
        assert_eq!(config.storage.dir, "store");
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(parse_config_content("[completion]\nretries = 3\n").is_err());
    }

    #[test]
    fn rejects_invalid_values() {
        let err = parse_config_content("[completion]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.completion.timeout_secs, 30);
    }

    #[test]
    fn reads_file_from_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[storage]\ndir = \"elsewhere\"\n").unwrap();
        assert_eq!(load_config(dir.path()).unwrap().storage.dir, "elsewhere");
    }

    #[test]
    #[serial]
    fn root_prefers_explicit_home_override() {
        let original = std::env::var_os(HOME_ENV);
        unsafe {
            std::env::set_var(HOME_ENV, "/tmp/pb-root");
        }

        assert_eq!(resolve_root().unwrap(), PathBuf::from("/tmp/pb-root"));

        unsafe {
            match original {
                Some(value) => std::env::set_var(HOME_ENV, value),
                None => std::env::remove_var(HOME_ENV),
            }
        }
    }
}
