//! Conversion settings.

use std::str::FromStr;

use crate::converter::ConverterKind;
use crate::error::{Error, Result};

/// Environment variable naming the converter, or `auto`.
pub const CONVERTER_ENV: &str = "GRAYSCALE_CONVERTER";
/// Environment variable with the partition worker count.
pub const WORKERS_ENV: &str = "GRAYSCALE_WORKERS";

const AUTO: &str = "auto";

/// Which converter to run and how many partition workers to give it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertConfig {
    /// Converter to use. `None` picks the fastest one the CPU supports.
    pub converter: Option<ConverterKind>,
    /// Partition worker count. `None` uses rayon's global pool.
    pub workers: Option<usize>,
}

impl ConvertConfig {
    pub fn with_converter(mut self, kind: ConverterKind) -> Self {
        self.converter = Some(kind);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Read [`CONVERTER_ENV`] and [`WORKERS_ENV`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing or blank keys keep the
    /// default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(CONVERTER_ENV)) {
            if !value.eq_ignore_ascii_case(AUTO) {
                let kind = ConverterKind::from_str(&value).map_err(|_| Error::InvalidConfig {
                    key: CONVERTER_ENV,
                    value: value.clone(),
                })?;
                config.converter = Some(kind);
            }
        }

        if let Some(value) = non_blank(lookup(WORKERS_ENV)) {
            match value.parse::<usize>() {
                Ok(workers) if workers > 0 => config.workers = Some(workers),
                _ => {
                    return Err(Error::InvalidConfig {
                        key: WORKERS_ENV,
                        value,
                    });
                }
            }
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
