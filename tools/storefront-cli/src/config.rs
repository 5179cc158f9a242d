//! Config file loading.

use std::path::Path;

use anyhow::{Context, Result};

use storefront_core::StorefrontConfig;

/// File names searched for when `--config` is not given.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Load and validate a config file; `.json` files are JSON, anything else TOML.
pub fn load(path: &Path) -> Result<StorefrontConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if is_json(path) {
        StorefrontConfig::from_json_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        StorefrontConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

/// Serialize in the format matching `path`'s extension.
pub fn render(config: &StorefrontConfig, path: &Path) -> Result<String> {
    if is_json(path) {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("storefront-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_toml() {
        let path = write_temp("a.toml", "[shipping]\nfree_shipping_minimum = 50.0\n");
        let config = load(&path).unwrap();
        assert_eq!(config.shipping.free_shipping_minimum, 50.0);
        assert_eq!(config.recommendations.count, 12);
    }

    #[test]
    fn test_load_json_with_unlimited_recommendations() {
        let path = write_temp("b.json", r#"{"recommendations": {"limit": null}}"#);
        let config = load(&path).unwrap();
        assert_eq!(config.recommendations.limit, None);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let path = write_temp("c.toml", "[shipping]\nfree_shipping_minimum = 0.0\n");
        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("free_shipping_minimum"));
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("/nonexistent/storefront.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
