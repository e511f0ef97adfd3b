// Copyright (c) 2025 Spendbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.spendbook", "Spendbook", "spendbook"));

/// Platform data directory for ledgers, backups, income and config.
pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.to_path_buf())
}

/// Injected configuration for the engine: where ledgers live, which
/// currencies are tracked, and the dev/current environment split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base storage directory. Empty means "use the platform data dir".
    pub base_dir: PathBuf,
    pub default_currency: String,
    pub supported_currencies: Vec<String>,
    pub default_description: String,
    /// When set, ledgers and backups go to the `dev` subtree with
    /// `dev_` file prefixes instead of `current`/`expense_`.
    pub developing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_dir: PathBuf::new(),
            default_currency: "R$".to_string(),
            supported_currencies: vec!["R$".to_string(), "USD".to_string(), "EUR".to_string()],
            default_description: "NO DESCRIPTION".to_string(),
            developing: false,
        }
    }
}

impl Config {
    /// Read `config.json` from the platform data dir if present,
    /// otherwise fall back to defaults. A missing `base_dir` resolves
    /// to the data dir itself.
    pub fn load() -> Result<Config> {
        let data_dir = default_data_dir()?;
        let path = data_dir.join("config.json");
        let mut cfg = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Parse config {}", path.display()))?
        } else {
            Config::default()
        };
        if cfg.base_dir.as_os_str().is_empty() {
            cfg.base_dir = data_dir;
        }
        Ok(cfg)
    }

    pub fn supports(&self, currency: &str) -> bool {
        self.supported_currencies.iter().any(|c| c == currency)
    }

    pub fn income_path(&self) -> PathBuf {
        self.base_dir.join("income.json")
    }
}
