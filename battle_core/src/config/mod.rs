//! Configuration loading from TOML files

mod constants;

pub use constants::BattleConstants;

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate battle constants from a TOML file
pub fn load_battle_constants(path: &Path) -> Result<BattleConstants, ConfigError> {
    let constants: BattleConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Parse and validate battle constants from a TOML string
pub fn parse_battle_constants(content: &str) -> Result<BattleConstants, ConfigError> {
    let constants: BattleConstants = parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_battle_constants_from_file() {
        let path = std::env::temp_dir().join(format!("battle_rules_{}.toml", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "paralysis_skip_chance = 0.5").unwrap();
        }

        let constants = load_battle_constants(&path).unwrap();
        assert!((constants.paralysis_skip_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(constants.move_display_limit, 7);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let result = load_battle_constants(Path::new("/nonexistent/rules.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_bad_toml() {
        let result = parse_battle_constants("paralysis_skip_chance = [");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_runs_on_parse() {
        let result = parse_battle_constants("poison_divisor = 0");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
