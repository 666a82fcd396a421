use resizable_splitter::splitter::geometry::Orientation;
use resizable_splitter::splitter::render::PaneContext;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub splitter: SplitterSettings,
    pub first_pane: PaneConfig,
    pub second_pane: PaneConfig,
    pub theme: Theme,
}

/// Splitter behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SplitterSettings {
    pub orientation: Orientation,
    /// Initial share of the first pane, in percent
    pub first_pane_size: f64,
    /// Handle thickness in cells
    pub handle_size: u16,
    /// Minimum spacing between processed drag moves
    pub throttle_ms: u64,
}

/// Demo content for one pane
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    pub title: String,
    /// Passed through untouched to the pane renderer
    pub context: PaneContext,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub border: String,
    pub handle: String,
    pub handle_active: String,
    pub text: String,
    pub text_muted: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splitter: SplitterSettings::default(),
            first_pane: PaneConfig {
                title: "First".into(),
                context: context_with("colour", "#D7A9E3FF"),
            },
            second_pane: PaneConfig {
                title: "Second".into(),
                context: context_with("$implicit", "#A8D5BAFF"),
            },
            theme: Theme::default(),
        }
    }
}

impl Default for SplitterSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            first_pane_size: 50.0,
            handle_size: 1,
            throttle_ms: 40,
        }
    }
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            context: PaneContext::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // One Dark color scheme
            border: "#5c6370".to_string(),        // Gray
            handle: "#5c6370".to_string(),        // Gray
            handle_active: "#61afef".to_string(), // Blue
            text: "#abb2bf".to_string(),          // Light gray
            text_muted: "#5c6370".to_string(),    // Muted gray
        }
    }
}

fn context_with(key: &str, value: &str) -> PaneContext {
    let mut context = PaneContext::new();
    context.insert(key.to_string(), value.into());
    context
}

impl Config {
    /// Load from the first config file found, falling back to defaults.
    ///
    /// Search order:
    /// 1. `~/.config/resizable-splitter/config.toml`
    /// 2. platform config dir (`~/Library/Application Support/` on macOS)
    /// 3. `~/.resizable-splitter.toml`
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(err) => tracing::warn!("{err}"),
            }
        }

        Config::default()
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".config").join("resizable-splitter").join("config.toml"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("resizable-splitter").join("config.toml"));
        }
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".resizable-splitter.toml"));
        }
        paths
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (alpha ignored)
pub fn parse_color(hex: &str) -> Option<ratatui::style::Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 && digits.len() != 8 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(ratatui::style::Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    pub fn parse_color(&self, hex: &str) -> ratatui::style::Color {
        // Fallback to white if parsing fails
        parse_color(hex).unwrap_or(ratatui::style::Color::White)
    }
}
