//! Run configuration for a split.
//!
//! Values come from an optional TOML file and are then overridden by
//! whatever was given on the command line.

use crate::split_points::apply_offset;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FOLDER: &str = "output_chunks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Source document
    pub input_pdf: PathBuf,
    /// 1-indexed pages at which a new chunk begins, before the offset
    pub split_pages: Vec<i64>,
    /// Front-matter pages added to every entry of `split_pages`
    pub num_prefix_pages: i64,
    pub output_folder: PathBuf,
}

impl SplitConfig {
    pub fn new<P: Into<PathBuf>>(input_pdf: P, split_pages: Vec<i64>) -> Self {
        SplitConfig {
            input_pdf: input_pdf.into(),
            split_pages,
            num_prefix_pages: 0,
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
        }
    }

    /// Split points with the prefix offset applied
    pub fn effective_split_points(&self) -> Vec<i64> {
        apply_offset(&self.split_pages, self.num_prefix_pages)
    }
}

/// On-disk form of [`SplitConfig`]; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input_pdf: Option<PathBuf>,
    pub split_pages: Option<Vec<i64>>,
    pub num_prefix_pages: Option<i64>,
    pub output_folder: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply command-line overrides and fill in defaults
    pub fn resolve(self, overrides: ConfigFile) -> Result<SplitConfig> {
        let input_pdf = overrides
            .input_pdf
            .or(self.input_pdf)
            .context("No input PDF given (pass a path or set input_pdf in the config file)")?;

        Ok(SplitConfig {
            input_pdf,
            split_pages: overrides.split_pages.or(self.split_pages).unwrap_or_default(),
            num_prefix_pages: overrides
                .num_prefix_pages
                .or(self.num_prefix_pages)
                .unwrap_or(0),
            output_folder: overrides
                .output_folder
                .or(self.output_folder)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FOLDER)),
        })
    }
}
