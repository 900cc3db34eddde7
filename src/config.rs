//! Configuration file support for pickbox.
//!
//! Configuration is loaded from `~/.config/pickbox/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`PICKBOX_CONFIG` selects the file)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/pickbox/config.toml
//! placeholder = "Select..."
//!
//! [[fields]]
//! title = "Fruit"
//! options = [
//!     { label = "Apple", value = 1 },
//!     { label = "Pear", value = "pear" },
//! ]
//!
//! [[fields]]
//! title = "Toppings"
//! multiple = true
//! options = [{ label = "Cheese", value = 1 }, { label = "Olives", value = 2 }]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};
use crate::select::{OptionValue, SelectOption};

const DEFAULT_PLACEHOLDER: &str = "Select...";
const CONFIG_ENV: &str = "PICKBOX_CONFIG";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Text shown in an empty selector
    pub placeholder: Option<String>,

    /// Selectors to show, top to bottom
    pub fields: Vec<FieldConfig>,
}

/// One selector on screen.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldConfig {
    pub title: String,

    #[serde(default)]
    pub multiple: bool,

    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path (argument or `PICKBOX_CONFIG`) must exist and parse.
    /// The default path may be missing; if it is unreadable the defaults are
    /// used with a warning.
    pub fn load(explicit: Option<PathBuf>) -> std::result::Result<Self, ConfigError> {
        let explicit = explicit.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        if let Some(path) = explicit {
            return Self::load_from(&path);
        }

        let config_path = Self::config_path();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        match Self::load_from(&config_path) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Read and parse one file.
    pub fn load_from(path: &Path) -> std::result::Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pickbox")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// Positional options replace the configured fields with a single field.
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if args.placeholder.is_some() {
            self.placeholder = args.placeholder.clone();
        }
        if !args.options.is_empty() {
            self.fields = vec![FieldConfig {
                title: "Select".to_string(),
                multiple: args.multiple,
                options: args.options.clone(),
            }];
        }
        self
    }

    /// Reject fields the widget cannot tell apart.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let fields = self.fields();
        if fields.is_empty() {
            return Err(ConfigError::NoFields);
        }
        for field in &fields {
            let mut seen = HashSet::new();
            for option in &field.options {
                if option.label.trim().is_empty() {
                    return Err(ConfigError::EmptyLabel {
                        field: field.title.clone(),
                    });
                }
                if !seen.insert(option.label.as_str()) {
                    return Err(ConfigError::DuplicateLabel {
                        field: field.title.clone(),
                        label: option.label.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    /// Configured fields, or a single and a multiple demo field.
    pub fn fields(&self) -> Vec<FieldConfig> {
        if !self.fields.is_empty() {
            return self.fields.clone();
        }
        vec![
            FieldConfig {
                title: "Single".to_string(),
                multiple: false,
                options: default_options(),
            },
            FieldConfig {
                title: "Multiple".to_string(),
                multiple: true,
                options: default_options(),
            },
        ]
    }
}

/// Load, apply CLI overrides and validate.
pub fn resolve(args: &CliArgs) -> Result<Config> {
    let config = Config::load(args.config.clone())?.with_overrides(args);
    config.validate()?;
    Ok(config)
}

fn default_options() -> Vec<SelectOption> {
    ["First", "Second", "Third", "Fourth", "Fifth"]
        .iter()
        .zip(1..)
        .map(|(label, n)| SelectOption::new(*label, OptionValue::Integer(n)))
        .collect()
}
