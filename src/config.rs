use std::path::Path;

use crate::board::{Cell, COLS, ROWS};
use crate::error::ConfigError;
use crate::search::{DEFAULT_DEPTH, MAX_DEPTH};

/// Search settings for the AI engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched ahead, root move included
    pub depth: u8,
    /// Split the root columns across the rayon pool
    pub parallel_root: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            parallel_root: false,
        }
    }
}

/// Board and seating settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Mark played by the human in the GUI, `'X'` or `'O'`
    pub human_mark: char,
    pub ai_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: ROWS,
            cols: COLS,
            human_mark: 'X',
            ai_first: false,
        }
    }
}

impl GameConfig {
    /// The human's mark, `None` if `human_mark` is not a player symbol.
    pub fn human_cell(&self) -> Option<Cell> {
        Cell::from_symbol(self.human_mark).filter(|cell| !cell.is_empty())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.depth == 0 || self.engine.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.depth must be in 1..={MAX_DEPTH}"
            )));
        }
        if self.game.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be >= 1".into()));
        }
        if self.game.cols == 0 {
            return Err(ConfigError::Validation("game.cols must be >= 1".into()));
        }
        if self.game.human_cell().is_none() {
            return Err(ConfigError::Validation(
                "game.human_mark must be 'X' or 'O'".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.engine.depth, 6);
        assert!(!config.engine.parallel_root);
        assert_eq!((config.game.rows, config.game.cols), (6, 7));
        assert_eq!(config.game.human_cell(), Some(Cell::X));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[engine]
depth = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.depth, 4);
        assert!(!config.engine.parallel_root);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.engine.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.engine.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
        config.engine.depth = MAX_DEPTH;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_board() {
        let mut config = AppConfig::default();
        config.game.rows = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.game.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_mark() {
        let mut config = AppConfig::default();
        config.game.human_mark = 'Z';
        assert!(config.validate().is_err());
        config.game.human_mark = 'o';
        assert!(config.validate().is_ok());
        assert_eq!(config.game.human_cell(), Some(Cell::O));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("four_in_a_row.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[engine]
parallel_root = true

[game]
human_mark = "O"
ai_first = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.engine.parallel_root);
        assert_eq!(config.engine.depth, DEFAULT_DEPTH);
        assert_eq!(config.game.human_cell(), Some(Cell::O));
        assert!(config.game.ai_first);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[engine]\ndepth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[engine\ndepth = ").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
