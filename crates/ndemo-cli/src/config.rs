use anyhow::{Context, Result};
use clap::ArgMatches;
use ndemo_array::{literal, Literal};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::util::{arg, parse_literal, parse_shape};

/// Inputs and knobs for every demo.
///
/// Loaded from an optional JSON file; any field missing from the file keeps
/// its default, and command-line flags win over both.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DemoConfig {
    /// Digits printed after the decimal point for floating arrays.
    pub precision: usize,
    pub basics_data: Literal,
    /// Target shape for the reshape attempt in `basics`.
    pub reshape: Vec<usize>,
    pub indexing_threshold: i64,
    /// Rows are students, columns are subjects.
    pub scores: Literal,
    pub score_threshold: f64,
    pub split_sections: usize,
    pub speedup_size: usize,
    pub parallel: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            precision: 2,
            basics_data: literal![[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]],
            reshape: vec![4, 4],
            indexing_threshold: 6,
            scores: literal![
                [85, 90, 78, 92, 88],
                [76, 82, 85, 79, 91],
                [92, 88, 94, 90, 87],
                [68, 72, 70, 75, 73],
                [95, 93, 96, 94, 92],
            ],
            score_threshold: 85.0,
            split_sections: 2,
            speedup_size: 100_000_000,
            parallel: false,
        }
    }
}

impl DemoConfig {
    /// Reads the config file named by `--config` (if any) and applies the
    /// command-line overrides present in `matches`.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match arg::<PathBuf>(matches, "config") {
            Some(path) => {
                log::info!("[ndemo] Loading config: {:?}", path);
                load_config(path)?
            }
            None => DemoConfig::default(),
        };
        config.apply_overrides(matches)?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(precision) = arg::<usize>(matches, "precision") {
            self.precision = *precision;
        }
        if let Some(shape) = arg::<String>(matches, "reshape") {
            self.reshape = parse_shape(shape)?;
        }
        if let Some(data) = arg::<String>(matches, "basics_data") {
            self.basics_data = parse_literal(data)?;
        }
        if let Some(threshold) = arg::<i64>(matches, "indexing_threshold") {
            self.indexing_threshold = *threshold;
        }
        if let Some(data) = arg::<String>(matches, "scores") {
            self.scores = parse_literal(data)?;
        }
        if let Some(threshold) = arg::<f64>(matches, "score_threshold") {
            self.score_threshold = *threshold;
        }
        if let Some(sections) = arg::<usize>(matches, "split_sections") {
            self.split_sections = *sections;
        }
        if let Some(size) = arg::<usize>(matches, "speedup_size") {
            self.speedup_size = *size;
        }
        if matches!(matches.try_get_one::<bool>("parallel"), Ok(Some(&true))) {
            self.parallel = true;
        }
        Ok(())
    }
}

/// Loads a JSON config. Fields that are missing or fail to parse fall back to
/// their defaults with a warning; a file that is not JSON at all is an error.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let partial: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    let mut config = DemoConfig::default();

    macro_rules! load_or_default {
        ($field:ident) => {
            if let Some(val) = partial.get(stringify!($field)) {
                if let Ok(parsed) = serde_json::from_value(val.clone()) {
                    config.$field = parsed;
                } else {
                    log::warn!(
                        "Config Invalid value for '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            } else {
                log::warn!(
                    "Config Missing field '{}', using default: {:?}",
                    stringify!($field),
                    config.$field
                );
            }
        };
    }

    load_or_default!(precision);
    load_or_default!(basics_data);
    load_or_default!(reshape);
    load_or_default!(indexing_threshold);
    load_or_default!(scores);
    load_or_default!(score_threshold);
    load_or_default!(split_sections);
    load_or_default!(speedup_size);
    load_or_default!(parallel);

    Ok(config)
}
