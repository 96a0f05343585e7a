//! Engine configuration loader.

use std::path::Path;

use jontune_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Fields omitted from the file keep their defaults, so a config file
    /// only needs to name what it overrides.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }

    /// Load a config, degrading to defaults on failure.
    pub fn load_or_default(path: &Path) -> EngineConfig {
        Self::load(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "vowel_cost = 500\nbonus_countdown_secs = 30\n"
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.vowel_cost, 500);
        assert_eq!(config.bonus_countdown_secs, 30);
        assert_eq!(config.solve_bonus, EngineConfig::DEFAULT_SOLVE_BONUS);
        assert_eq!(config.letter_reveal_ms, 750);
    }

    #[test]
    fn missing_file_degrades_to_defaults() {
        let config = ConfigLoader::load_or_default(Path::new("/nope/config.toml"));
        assert_eq!(config, EngineConfig::new());
    }
}
