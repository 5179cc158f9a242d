//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use storefront_core::StorefrontConfig;

use crate::config::{self, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    pub config: StorefrontConfig,
    /// File the config came from, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found
    /// walking up from the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let mut ctx = Self::locate(config_path, output)?;
        if let Some(path) = &ctx.config_path {
            ctx.output.debug(&format!("Using config {}", path.display()));
            ctx.config = config::load(path)?;
        }
        Ok(ctx)
    }

    /// Find the config file without reading it; `config` stays at defaults.
    /// Used by the commands that inspect or replace a broken file.
    pub fn locate(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_config(&cwd),
        };

        Ok(Self {
            config: StorefrontConfig::default(),
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_does_not_parse() {
        let dir = std::env::temp_dir().join(format!("storefront-ctx-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("storefront.toml");
        std::fs::write(&path, "[shipping]\nfree_shipping_minimum = -1.0\n").unwrap();
        let path_str = path.to_str().unwrap();

        let ctx = Context::locate(Some(path_str), Output::new(false, false)).unwrap();
        assert_eq!(ctx.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(ctx.config.featured.count, 8);

        assert!(Context::load(Some(path_str), Output::new(false, false)).is_err());
    }
}
