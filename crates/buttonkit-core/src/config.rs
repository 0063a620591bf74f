//! Configuration types and parsing.
//!
//! This module defines the buttonkit configuration schema. The Config type is
//! intended to be a stable, serialization-friendly schema; derived values
//! (the computed palette, the generated stylesheet) live in other modules.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use toml::Table;

use crate::color::{is_dark_color, parse_hex_color, relative_luminance};
use crate::error::{Error, Result};

/// Embedded default configuration TOML, compiled into the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Path where config was found, if any.
    pub source: Option<PathBuf>,
    /// Whether defaults were used (no config file found).
    pub used_defaults: bool,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color palette tokens.
    pub palette: PaletteConfig,

    /// Stylesheet output options.
    pub stylesheet: StylesheetConfig,
}

impl Config {
    /// Load configuration from the embedded default TOML string.
    pub fn from_default_toml() -> Result<Self> {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, merging with embedded defaults.
    ///
    /// User-provided values override defaults; any missing keys fall back to
    /// the embedded default config.
    ///
    /// Returns an error if the file doesn't exist or can't be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::load_with_defaults(&content)
    }

    /// Load configuration from a TOML string, merging with embedded defaults.
    ///
    /// This parses both the default config and user config as TOML tables,
    /// deep-merges them (user values win), then deserializes the result.
    fn load_with_defaults(user_toml: &str) -> Result<Self> {
        // This should never fail since it's embedded and tested
        let mut base: Table = toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("embedded DEFAULT_CONFIG_TOML should always be valid");

        let user: Table = toml::from_str(user_toml)?;

        deep_merge_toml(&mut base, user);

        let config: Config = base.try_into()?;
        Ok(config)
    }

    /// Find and load configuration using the XDG lookup chain.
    ///
    /// If `explicit_path` is `Some`, that path is used directly and an error
    /// is returned if it doesn't exist or can't be parsed (no fallback).
    ///
    /// If `explicit_path` is `None`, searches in order:
    /// 1. `$XDG_CONFIG_HOME/buttonkit/config.toml`
    /// 2. `~/.config/buttonkit/config.toml`
    /// 3. `./config.toml` (current working directory)
    ///
    /// If no config file is found in the search chain, the embedded defaults
    /// are used.
    pub fn find_and_load(
        explicit_path: Option<&Path>,
    ) -> std::result::Result<ConfigLoadResult, Error> {
        // If an explicit path was provided, use it strictly (no fallback)
        if let Some(path) = explicit_path {
            let config = Self::load(path)?;
            return Ok(ConfigLoadResult {
                config,
                source: Some(path.to_path_buf()),
                used_defaults: false,
            });
        }

        // No explicit path - search the XDG chain.
        // Rule: if a config file exists but fails to load, that's an error (no
        // silent fallback). Only use defaults when no config files exist at all.
        let search_paths = Self::config_search_paths();
        let mut first_error: Option<(PathBuf, Error)> = None;

        for path in &search_paths {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        return Ok(ConfigLoadResult {
                            config,
                            source: Some(path.clone()),
                            used_defaults: false,
                        });
                    }
                    Err(e) => {
                        // Record the first error we encounter - we'll return it if no config loads
                        if first_error.is_none() {
                            first_error = Some((path.clone(), e));
                        }
                    }
                }
            }
        }

        // If we found at least one config file that failed to load, return that
        // error instead of silently falling back to defaults
        if let Some((path, error)) = first_error {
            tracing::error!(
                "Config file {:?} exists but failed to load: {}",
                path,
                error
            );
            return Err(error);
        }

        // No config files exist anywhere - use embedded default TOML
        tracing::info!("No config file found, using built-in default config");
        tracing::debug!(
            "Searched: {}",
            search_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML)?;

        Ok(ConfigLoadResult {
            config,
            source: None,
            used_defaults: true,
        })
    }

    /// Get the list of paths to search for config files.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. $XDG_CONFIG_HOME/buttonkit/config.toml
        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("buttonkit/config.toml"));
        }

        // 2. ~/.config/buttonkit/config.toml
        if let Ok(home) = env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/buttonkit/config.toml"));
        }

        // 3. ./config.toml (cwd)
        paths.push(PathBuf::from("config.toml"));

        paths
    }

    /// Validate the configuration, returning errors for invalid values.
    ///
    /// This performs strict validation - any invalid value causes an error.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for (key, value) in self.palette.tokens() {
            if parse_hex_color(value).is_none() {
                errors.push(format!(
                    "palette.{}: invalid value '{}', expected a hex color like '#6c5fc7'",
                    key, value
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigValidation(errors))
        }
    }

    /// Check for potential configuration issues and return warnings.
    ///
    /// Unlike `validate()`, these are non-fatal issues that usually indicate
    /// a typo, such as a `*_dark` token that is lighter than its base color.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let p = &self.palette;

        let families: &[(&str, &str, &str, &str)] = &[
            ("gray_90", &p.gray_90, "gray_100", &p.gray_100),
            ("trim_dark", &p.trim_dark, "trim_darkest", &p.trim_darkest),
            ("purple", &p.purple, "purple_dark", &p.purple_dark),
            ("purple_dark", &p.purple_dark, "purple_darkest", &p.purple_darkest),
            ("red", &p.red, "red_dark", &p.red_dark),
            ("red_dark", &p.red_dark, "red_darkest", &p.red_darkest),
        ];

        for (base_key, base, dark_key, dark) in families {
            // Unparseable tokens are validate()'s problem, not a warning
            let (Some(b), Some(d)) = (parse_hex_color(base), parse_hex_color(dark)) else {
                continue;
            };
            let base_lum = relative_luminance(b.0, b.1, b.2);
            let dark_lum = relative_luminance(d.0, d.1, d.2);
            if dark_lum > base_lum {
                warnings.push(format!(
                    "palette.{}: lighter than palette.{} (is the pair swapped?)",
                    dark_key, base_key
                ));
            }
        }

        // Light text tokens make default buttons unreadable on their white
        // background.
        if !is_dark_color(&p.gray_90) {
            warnings.push(
                "palette.gray_90: very light text color for a white button background".to_string(),
            );
        }

        warnings
    }

    /// Print a human-readable summary of the configuration.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Palette:".to_string());
        for (key, value) in self.palette.tokens() {
            lines.push(format!("  {}: {}", key, value));
        }

        lines.push("\nStylesheet:".to_string());
        lines.push(format!(
            "  palette_vars: {}",
            self.stylesheet.palette_vars
        ));
        lines.push(format!("  user_css: {}", self.stylesheet.user_css));

        lines.join("\n")
    }
}

/// Named color tokens consumed by the button ruleset.
///
/// Token names follow the upstream design palette: text grays (`gray_90`,
/// `gray_100`), border grays (`trim_*`), and the brand/danger families.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub gray_90: String,
    pub gray_100: String,
    pub trim_dark: String,
    pub trim_darkest: String,
    pub purple: String,
    pub purple_dark: String,
    pub purple_darkest: String,
    pub red: String,
    pub red_dark: String,
    pub red_darkest: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            gray_90: "#2f2936".to_string(),
            gray_100: "#161319".to_string(),
            trim_dark: "#dcdfe3".to_string(),
            trim_darkest: "#c4c9cc".to_string(),
            purple: "#6c5fc7".to_string(),
            purple_dark: "#5b4cc0".to_string(),
            purple_darkest: "#4a3b9f".to_string(),
            red: "#e03e2f".to_string(),
            red_dark: "#c12d20".to_string(),
            red_darkest: "#a3261b".to_string(),
        }
    }
}

impl PaletteConfig {
    /// All tokens as (key, value) pairs, in declaration order.
    pub fn tokens(&self) -> [(&'static str, &str); 10] {
        [
            ("gray_90", self.gray_90.as_str()),
            ("gray_100", self.gray_100.as_str()),
            ("trim_dark", self.trim_dark.as_str()),
            ("trim_darkest", self.trim_darkest.as_str()),
            ("purple", self.purple.as_str()),
            ("purple_dark", self.purple_dark.as_str()),
            ("purple_darkest", self.purple_darkest.as_str()),
            ("red", self.red.as_str()),
            ("red_dark", self.red_dark.as_str()),
            ("red_darkest", self.red_darkest.as_str()),
        ]
    }
}

/// Options controlling the generated stylesheet text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylesheetConfig {
    /// Emit the `:root` custom-property block. Disable when the consuming
    /// page defines the `--color-*` tokens itself.
    pub palette_vars: bool,

    /// Append a `style.css` found next to the loaded config file.
    pub user_css: bool,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            palette_vars: true,
            user_css: true,
        }
    }
}

/// Deep merge two TOML tables, with `overlay` values taking precedence.
///
/// For nested tables, recursively merges. For arrays and other values,
/// the overlay value completely replaces the base value.
fn deep_merge_toml(base: &mut Table, overlay: Table) {
    for (key, overlay_value) in overlay {
        match (base.get_mut(&key), overlay_value) {
            // Both are tables: recursively merge
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge_toml(base_table, overlay_table);
            }
            // Otherwise: overlay value wins (insert or replace)
            (_, overlay_value) => {
                base.insert(key, overlay_value);
            }
        }
    }
}
