use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// Without a URL the server keeps orders in memory
    #[serde(default)]
    pub postgres_url: Option<String>,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// No timeout when unset
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_catalog_url() -> String {
    "https://fakestoreapi.com/products".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_ms: None,
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
log_level: info
log_dir: ./logs
log_file: order_desk.log
use_json: false
rotation: daily
gateway:
  host: 0.0.0.0
  port: 8080
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert!(config.postgres_url.is_none());
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.catalog.url, "https://fakestoreapi.com/products");
        assert!(config.catalog.timeout_ms.is_none());
    }

    #[test]
    fn test_full_config() {
        let yaml = format!(
            concat!(
                "{}postgres_url: postgresql://orders:orders@db:5432/orders\n",
                "catalog:\n",
                "  url: http://catalog.local/products\n",
                "  timeout_ms: 1500\n",
            ),
            MINIMAL
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(
            config.postgres_url.as_deref(),
            Some("postgresql://orders:orders@db:5432/orders")
        );
        assert_eq!(config.catalog.url, "http://catalog.local/products");
        assert_eq!(config.catalog.timeout_ms, Some(1500));
    }

    #[test]
    fn test_missing_gateway_is_an_error() {
        assert!(AppConfig::from_yaml("log_level: info\n").is_err());
    }

    #[test]
    fn test_shipped_configs_parse() {
        for env in ["dev", "prod"] {
            let path = format!("{}/config/{}.yaml", env!("CARGO_MANIFEST_DIR"), env);
            let content = fs::read_to_string(&path).unwrap();
            AppConfig::from_yaml(&content).unwrap_or_else(|e| panic!("{}: {}", path, e));
        }
    }
}
