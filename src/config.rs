//! Configuration module for classdoc.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CLASSDOC_` and use double
//! underscores to separate nested levels:
//! - `CLASSDOC_MODE=apiParamClass` sets `mode`
//! - `CLASSDOC_ANALYSIS__MIN_DECORATORS=[Min]` sets `analysis.min_decorators`

use crate::annotation::AnnotationKind;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Element mode: `apiSuccessClass` or `apiParamClass`
    #[serde(default)]
    pub mode: AnnotationKind,

    /// Base directory for relative source paths in element definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Source analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Decorator names that carry documentation constraints
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Decorators whose first argument is a lower bound
    #[serde(default = "default_min_decorators")]
    pub min_decorators: Vec<String>,

    /// Decorators whose first argument is an upper bound
    #[serde(default = "default_max_decorators")]
    pub max_decorators: Vec<String>,

    /// Decorators whose first argument lists the allowed values
    #[serde(default = "default_allowed_decorators")]
    pub allowed_decorators: Vec<String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_min_decorators() -> Vec<String> {
    vec!["Min".to_string(), "MinLength".to_string()]
}
fn default_max_decorators() -> Vec<String> {
    vec!["Max".to_string(), "MaxLength".to_string()]
}
fn default_allowed_decorators() -> Vec<String> {
    vec!["IsIn".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            mode: AnnotationKind::default(),
            project_root: None,
            debug: false,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_decorators: default_min_decorators(),
            max_decorators: default_max_decorators(),
            allowed_decorators: default_allowed_decorators(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(".classdoc/settings.toml"));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore
            // stays within field names
            .merge(Env::prefixed("CLASSDOC_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find the settings file by looking for a .classdoc directory
    /// from the current directory up to the filesystem root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(".classdoc"))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join("settings.toml"))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
