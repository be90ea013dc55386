//! Game configuration loader.

use std::path::Path;

use cavern_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const BUNDLED: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// The configuration shipped with the crate.
    pub fn bundled() -> LoadResult<GameConfig> {
        Self::parse(BUNDLED)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.difficulty < 0 {
            anyhow::bail!("difficulty must not be negative, got {}", config.difficulty);
        }
        for (name, chance) in [
            ("itch_strip_chance", config.itch_strip_chance),
            ("clumsy_drop_chance", config.clumsy_drop_chance),
        ] {
            if chance > 100 {
                anyhow::bail!("{name} must be at most 100, got {chance}");
            }
        }
        tracing::debug!(difficulty = config.difficulty, "loaded game config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cavern_core::PcgRng;

    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = ConfigLoader::bundled().unwrap();
        assert_eq!(config.difficulty, 0);
        assert_eq!(config.itch_strip_chance, GameConfig::DEFAULT_ITCH_STRIP_CHANCE);
        assert_eq!(PcgRng::from_config(&config), PcgRng::new(1_592_597_035));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("difficulty = 3\n").unwrap();
        assert_eq!(config.difficulty, 3);
        assert_eq!(config.rng_seed, GameConfig::DEFAULT_RNG_SEED);
    }

    #[test]
    fn negative_difficulty_is_rejected() {
        let err = ConfigLoader::parse("difficulty = -1\n").unwrap_err();
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = 2\nrng_seed = 99").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(
            config,
            GameConfig {
                difficulty: 2,
                rng_seed: 99,
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn chance_above_certainty_is_rejected() {
        let err = ConfigLoader::parse("clumsy_drop_chance = 250\n").unwrap_err();
        assert!(err.to_string().contains("clumsy_drop_chance"));
    }

    #[test]
    fn unreadable_path_names_the_file() {
        let err = ConfigLoader::load(Path::new("/nonexistent/cavern.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cavern.toml"));
    }
}
