// src/config.rs
use std::path::PathBuf;

use crate::chart::DEFAULT_SAMPLE_COUNT;
use crate::error::{ChartError, ChartResult};
use crate::render::ChartLayout;

/// Surface size, sampling resolution and export location
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub sample_count: usize,
    pub tick_count: usize,
    pub output_dir: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            padding: 50,
            sample_count: DEFAULT_SAMPLE_COUNT,
            tick_count: 5,
            output_dir: PathBuf::from("."),
        }
    }
}

impl ChartConfig {
    /// Defaults overridden by `CHART_*` variables, after loading `.env` if present.
    pub fn from_env() -> ChartResult<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let config = Self {
            width: env_parse_or("CHART_WIDTH", defaults.width)?,
            height: env_parse_or("CHART_HEIGHT", defaults.height)?,
            padding: env_parse_or("CHART_PADDING", defaults.padding)?,
            sample_count: env_parse_or("CHART_SAMPLES", defaults.sample_count)?,
            tick_count: env_parse_or("CHART_TICKS", defaults.tick_count)?,
            output_dir: std::env::var("CHART_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.sample_count < 2 {
            return Err(invalid("sample_count", "must be at least 2"));
        }
        if self.tick_count == 0 {
            return Err(invalid("tick_count", "must be at least 1"));
        }
        self.layout().map(|_| ())
    }

    pub fn layout(&self) -> ChartResult<ChartLayout> {
        ChartLayout::new(self.width as f64, self.height as f64, self.padding as f64)
    }
}

fn invalid(field: &str, reason: &str) -> ChartError {
    ChartError::InvalidConfiguration {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn env_parse_or<T>(key: &str, default: T) -> ChartResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| invalid(key, &format!("{:?}: {}", raw, e))),
        Err(_) => Ok(default),
    }
}
