//! Service configuration.
//!
//! Precedence, lowest to highest: built-in defaults, TOML config file,
//! the `PORT` environment variable, command-line flags.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use ion_core::constants::{DEFAULT_BIND, DEFAULT_PORT, DEFAULT_RNG_SEED};
use ion_core::error::IonError;
use ion_fire_control::ResourceRegistry;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// JSON lines for log aggregation.
    Json,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid PORT value {0:?}")]
    Port(String),

    #[error(transparent)]
    Catalog(#[from] IonError),
}

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "ion-server", about = "Ion cannon targeting and firing service")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind.
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides PORT).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter, e.g. `info` or `ion_fire_control=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Seed for the simulated cannon battery.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML cannon catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub rng_seed: u64,
    /// Cannon catalog file. `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            rng_seed: DEFAULT_RNG_SEED,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Full resolution: file from `cli.config`, then `port_env`, then flags.
    pub fn resolve(cli: &Cli, port_env: Option<String>) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_port_env(port_env)?;
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_port_env(&mut self, value: Option<String>) -> Result<(), ConfigError> {
        if let Some(raw) = value {
            self.port = raw.trim().parse().map_err(|_| ConfigError::Port(raw))?;
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(bind) = &cli.bind {
            self.bind = bind.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
        if let Some(seed) = cli.seed {
            self.rng_seed = seed;
        }
        if let Some(catalog) = &cli.catalog {
            self.catalog_path = Some(catalog.clone());
        }
    }

    /// Load the cannon catalog from `catalog_path`, or the built-in one.
    pub fn load_registry(&self) -> Result<ResourceRegistry, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(ResourceRegistry::default_catalog());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(ResourceRegistry::from_toml_str(&text)?)
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.load_registry().unwrap().len(), 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            port = 8080
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.rng_seed, 42);
    }

    #[test]
    fn test_precedence_env_then_cli() {
        let cli = Cli {
            port: Some(9000),
            seed: Some(7),
            ..Default::default()
        };
        let config = ServerConfig::resolve(&cli, Some("4000".into())).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rng_seed, 7);

        let config = ServerConfig::resolve(&Cli::default(), Some("4000".into())).unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_bad_port_env() {
        let err = ServerConfig::resolve(&Cli::default(), Some("not-a-port".into())).unwrap_err();
        assert!(matches!(err, ConfigError::Port(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/ion-server.toml")),
            ..Default::default()
        };
        let err = ServerConfig::resolve(&cli, None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    fn catalog_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ion-catalog-{}-{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_registry_from_catalog_path() {
        let path = catalog_file(
            "ok",
            r#"
            [[cannon]]
            id = "north"
            fire_time = 2.5
            generation = 4

            [[cannon]]
            id = "south"
            available = false
            fire_time = 1.0
            generation = 1
            "#,
        );
        let config = ServerConfig {
            catalog_path: Some(path.clone()),
            ..Default::default()
        };
        let registry = config.load_registry();
        std::fs::remove_file(&path).unwrap();

        let registry = registry.unwrap();
        assert_eq!(registry.len(), 2);
        let north = registry.get("north").unwrap();
        assert_eq!(north.generation, 4);
        assert_eq!(north.cooldown, std::time::Duration::from_millis(2_500));
        assert!(!registry.get("south").unwrap().initially_available);
        assert!(registry.get("cannon1").is_none());
    }

    #[test]
    fn test_load_registry_unreadable_catalog() {
        let config = ServerConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/cannons.toml")),
            ..Default::default()
        };
        let err = config.load_registry().unwrap_err();
        match err {
            ConfigError::Read { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/cannons.toml"))
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_registry_invalid_catalog() {
        let path = catalog_file(
            "bad",
            r#"
            [[cannon]]
            id = "north"
            fire_time = -1.0
            generation = 1
            "#,
        );
        let config = ServerConfig {
            catalog_path: Some(path.clone()),
            ..Default::default()
        };
        let result = config.load_registry();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "ion-server",
            "--port",
            "3100",
            "--log-format",
            "compact",
            "--catalog",
            "cannons.toml",
        ]);
        assert_eq!(cli.port, Some(3100));
        assert_eq!(cli.log_format, Some(LogFormat::Compact));
        assert_eq!(cli.catalog, Some(PathBuf::from("cannons.toml")));
    }
}
