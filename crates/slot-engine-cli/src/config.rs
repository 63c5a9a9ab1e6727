//! Optional TOML configuration for the booking grid.
//!
//! ```toml
//! [grid]
//! start = "08:00"
//! end = "16:30"
//! duration = 60
//! ```
//!
//! Command-line flags override file values; missing keys fall back to the
//! built-in defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use slot_engine::{SlotWindow, TimeOfDay};

/// Class length used when neither the file nor the command line sets one.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        let window = SlotWindow::default();
        GridConfig {
            start: window.start,
            end: window.end,
            duration: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl Config {
    /// Read `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

impl GridConfig {
    /// Apply command-line overrides on top of the configured values.
    pub fn with_overrides(
        mut self,
        start: Option<TimeOfDay>,
        end: Option<TimeOfDay>,
        duration: Option<u32>,
    ) -> Self {
        if let Some(start) = start {
            self.start = start;
        }
        if let Some(end) = end {
            self.end = end;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        self
    }

    pub fn window(&self) -> SlotWindow {
        SlotWindow::new(self.start, self.end)
    }
}
