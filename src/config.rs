//! Calculator defaults
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::money::RoundMode;

/// Default location of the config file
pub const DEFAULT_CONFIG_PATH: &str = "housing_calc.json";

/// Defaults shared by the CLI and the Lambda handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Years of rent to project
    #[serde(default = "default_analysis_years")]
    pub analysis_years: u32,

    /// Row budget for compacted tables (0 shows every year)
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Rounding applied to mortgage schedules
    #[serde(default)]
    pub round_mode: RoundMode,

    /// First calendar year of rent projections; current year when absent
    #[serde(default)]
    pub start_year: Option<i32>,
}

fn default_analysis_years() -> u32 { 30 }
fn default_max_rows() -> usize { 10 }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            analysis_years: default_analysis_years(),
            max_rows: default_max_rows(),
            round_mode: RoundMode::default(),
            start_year: None,
        }
    }
}

impl CalculatorConfig {
    /// Load config from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Load the default config file if it exists, otherwise use defaults
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::from_json_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Start year to use, reading the clock only when none is configured
    pub fn resolved_start_year(&self) -> i32 {
        self.start_year.unwrap_or_else(current_year)
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
