//! Decoder configuration
//!
//! Layered with figment. Priority (highest to lowest):
//! 1. Environment variables prefixed with `BYTE_PARSER_`
//! 2. Config file (toml / yaml / json, chosen by extension)
//! 3. Default values

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::bytes::ByteOrder;
use crate::decoder::Decoder;
use crate::error::{ParserError, Result};

/// Environment variable prefix, e.g. `BYTE_PARSER_BYTE_ORDER=little`
pub const ENV_PREFIX: &str = "BYTE_PARSER_";

/// Settings needed to build a `Decoder`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// "big" or "little"; anything else fails at load time
    pub byte_order: ByteOrder,
}

impl DecoderConfig {
    /// Load from defaults, an optional file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = merge_file(figment, path)?;
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ParserError::config(format!("Failed to load configuration: {}", e)))
    }

    pub fn decoder(&self) -> Decoder {
        Decoder::from_config(self)
    }
}

/// Load configuration from a specific file
pub fn load_config_from_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    merge_file(Figment::new(), path.as_ref())?
        .extract()
        .map_err(|e| ParserError::config(format!("Failed to load configuration from file: {}", e)))
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.is_file() {
        return Err(ParserError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ParserError::config("Config file must have an extension"))?;

    match extension {
        "toml" => Ok(figment.merge(Toml::file(path))),
        "yaml" | "yml" => Ok(figment.merge(Yaml::file(path))),
        "json" => Ok(figment.merge(Json::file(path))),
        _ => Err(ParserError::config(format!(
            "Unsupported config file format: {}",
            extension
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_each_format() {
        let temp_dir = TempDir::new().unwrap();
        let cases = [
            ("decoder.toml", "byte_order = \"little\"\n"),
            ("decoder.yaml", "byte_order: little\n"),
            ("decoder.json", r#"{"byte_order": "little"}"#),
        ];

        for (name, contents) in cases {
            let path = write(&temp_dir, name, contents);
            let config: DecoderConfig = load_config_from_file(&path).unwrap();
            assert_eq!(config.byte_order, ByteOrder::LittleEndian, "{}", name);
        }
    }

    #[test]
    fn test_missing_key_uses_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "empty.toml", "");
        let config: DecoderConfig = load_config_from_file(&path).unwrap();
        assert_eq!(config, DecoderConfig::default());
        assert_eq!(config.decoder().byte_order(), ByteOrder::BigEndian);
    }

    #[test]
    fn test_unrecognized_byte_order_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "typo.toml", "byte_order = \"bigg\"\n");
        let err = load_config_from_file::<DecoderConfig, _>(&path).unwrap_err();
        assert!(matches!(err, ParserError::Config(ref msg) if msg.contains("bigg")));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "decoder.ini", "byte_order=little");
        let err = load_config_from_file::<DecoderConfig, _>(&path).unwrap_err();
        assert_eq!(
            err,
            ParserError::Config("Unsupported config file format: ini".to_string())
        );
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(load_config_from_file::<DecoderConfig, _>(&path).is_err());
    }
}
