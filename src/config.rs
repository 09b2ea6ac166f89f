//! Configuration for the command-line tools.
//!
//! Settings are loaded from `./ws2-toolkit.toml` if present, else defaults
//! apply; the `WS2_TOOLKIT_LOG` environment variable overrides the log
//! filter regardless of what the file says.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tool-wide configuration shared by `ws2-asm` and `ws2-json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Disassembly and batch-processing behavior.
    pub disasm: DisasmConfig,

    /// Default output locations and JSON formatting.
    pub output: OutputConfig,

    /// Logging behavior.
    pub logging: LoggingConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            disasm: DisasmConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory `ws2-asm disasm` writes into when the caller does not pass
    /// one explicitly.
    pub default_disasm_dir: String,

    /// Indentation width used when `ws2-json extract` pretty-prints.
    pub json_indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_disasm_dir: "ws2_disasm".to_string(),
            json_indent: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasmConfig {
    /// Default obfuscation mode passed to the auto-detector when a command
    /// does not pin `--encryption`.
    pub default_mode: DefaultMode,

    /// Keep processing remaining files in a batch after one file fails.
    pub continue_on_error: bool,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            default_mode: DefaultMode::Auto,
            continue_on_error: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultMode {
    Auto,
    Encrypted,
    Decrypted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, overridden by `WS2_TOOLKIT_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Loads [`ToolConfig`] from the standard search path, falling back to
/// defaults when no file is found.
pub struct ConfigLoader;

impl ConfigLoader {
    const DEFAULT_PATH: &'static str = "ws2-toolkit.toml";

    /// Load from the standard location (`./ws2-toolkit.toml`), or defaults
    /// if absent.
    pub fn load() -> Result<ToolConfig, ConfigError> {
        let path = std::path::Path::new(Self::DEFAULT_PATH);
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(ToolConfig::default())
        }
    }

    pub fn load_from_file(path: &std::path::Path) -> Result<ToolConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string_lossy().to_string(),
            source,
        })
    }

    /// The effective `tracing` filter directive: the `WS2_TOOLKIT_LOG`
    /// environment variable if set, else the config file's `logging.filter`,
    /// else the default.
    pub fn effective_log_filter(config: &ToolConfig) -> String {
        std::env::var("WS2_TOOLKIT_LOG").unwrap_or_else(|_| config.logging.filter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_auto_and_continues_on_error() {
        let config = ToolConfig::default();
        assert_eq!(config.disasm.default_mode, DefaultMode::Auto);
        assert!(config.disasm.continue_on_error);
        assert_eq!(config.output.default_disasm_dir, "ws2_disasm");
        assert_eq!(config.output.json_indent, 2);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ToolConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: ToolConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.logging.filter, config.logging.filter);
    }

    #[test]
    fn env_override_takes_precedence() {
        std::env::set_var("WS2_TOOLKIT_LOG", "debug");
        let config = ToolConfig::default();
        assert_eq!(ConfigLoader::effective_log_filter(&config), "debug");
        std::env::remove_var("WS2_TOOLKIT_LOG");
    }
}
