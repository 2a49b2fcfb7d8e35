// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placement geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Left margin of the sampling area
    pub start_margin: f32,
    /// Right margin of the sampling area
    pub end_margin: f32,
    /// Margin below the top inset
    pub top_margin: f32,
    /// Reserved strip at the bottom (trace text lives there)
    pub bottom_margin: f32,
    /// Radius of every node
    pub node_radius: f32,
    /// Extra spacing enforced between node centers on both axes
    pub node_spacing: f32,
    /// Random draws allowed per node before placement fails
    pub max_attempts: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_margin: 30.0,
            end_margin: 30.0,
            top_margin: 10.0,
            bottom_margin: 30.0,
            node_radius: 10.0,
            node_spacing: 30.0,
            max_attempts: 10_000,
        }
    }
}

/// What happens when a dragged node would leave the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPolicy {
    /// Ignore move events whose point is outside the drawable area
    #[default]
    Bounded,
    /// Follow the pointer anywhere, including off-screen
    Unbounded,
}

/// Drag behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Bounds policy for active drags
    pub policy: DragPolicy,
}

/// Application configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Placement geometry
    pub layout: LayoutConfig,
    /// Drag behaviour
    pub drag: DragConfig,
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Default configuration file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "pathtrace")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from disk or use defaults
///
/// An explicit path must exist; the default location is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return read(path);
    }

    match default_path() {
        Some(path) if path.exists() => read(&path),
        _ => Ok(Config::default()),
    }
}

fn read(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = Config::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
