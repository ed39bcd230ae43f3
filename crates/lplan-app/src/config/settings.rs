//! Settings loading and config directory setup

use std::path::{Path, PathBuf};

use lplan_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const LPLAN_DIR: &str = ".lplan";

/// Path of the config file for a working directory
pub fn config_path(base: &Path) -> PathBuf {
    base.join(LPLAN_DIR).join(CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .lplan/config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = config_path(base);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in .lplan/
///
/// An existing config file is left untouched.
pub fn init_config_dir(base: &Path) -> Result<PathBuf> {
    let lplan_dir = base.join(LPLAN_DIR);

    if lplan_dir.exists() && !lplan_dir.is_dir() {
        return Err(Error::config(format!(
            "{} exists and is not a directory",
            lplan_dir.display()
        )));
    }
    std::fs::create_dir_all(&lplan_dir).context("Failed to create .lplan dir")?;

    let config_path = lplan_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Lesson Planner Configuration

[endpoint]
url = "http://localhost:8000/gerar"   # Lesson plan generation endpoint

[behavior]
confirm_quit = true   # Ask before quitting while a plan is being generated
"#;
        std::fs::write(&config_path, default_content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_endpoint_override() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".lplan")).unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[endpoint]\nurl = \"http://planner.internal:9000/gerar\"\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.endpoint.url, "http://planner.internal:9000/gerar");
        assert!(settings.behavior.confirm_quit);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".lplan")).unwrap();
        std::fs::write(config_path(dir.path()), "[endpoint\nurl = ").unwrap();

        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        let path = init_config_dir(dir.path()).unwrap();

        assert!(path.exists());
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".lplan")).unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[behavior]\nconfirm_quit = false\n",
        )
        .unwrap();

        init_config_dir(dir.path()).unwrap();

        assert!(!load_settings(dir.path()).behavior.confirm_quit);
    }

    #[test]
    fn test_init_config_dir_rejects_file_in_place_of_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".lplan"), "not a directory").unwrap();

        let err = init_config_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_init_config_dir_under_a_file_is_io_error() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("plain_file");
        std::fs::write(&base, "").unwrap();

        let err = init_config_dir(&base).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
