use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use pv_calc::config::ScenarioConfig;
use pv_calc::error::ConfigError;
use pv_calc::model::{ConsumptionMode, EnergyInterest, HousingType};

/// Output format for the results printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labeled metrics followed by a text bar chart.
    #[default]
    Text,
    /// Inputs, estimate, metrics and chart as one JSON object.
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "pv-calc",
    version,
    about = "Residential PV savings calculator",
    after_help = "If neither --scenario nor --preset is given, the default preset is used."
)]
pub struct Cli {
    /// Load scenario from TOML config file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (default, casa, chalet)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Housing type: piso, casa, chalet
    #[arg(long)]
    pub housing: Option<HousingType>,

    /// Floor area in m² (20-1000)
    #[arg(long, value_name = "M2")]
    pub area: Option<f64>,

    /// Number of occupants (1-12)
    #[arg(long)]
    pub occupants: Option<u32>,

    /// Unit of --value: eur (monthly bill) or kwh (monthly energy)
    #[arg(long)]
    pub mode: Option<ConsumptionMode>,

    /// Monthly consumption in the unit given by --mode
    #[arg(long)]
    pub value: Option<f64>,

    /// Region name (see --list-regions)
    #[arg(long)]
    pub region: Option<String>,

    /// Energy source of interest (repeatable): solar, eolica
    #[arg(long = "interest", value_name = "SOURCE")]
    pub interests: Vec<EnergyInterest>,

    /// Write the CSV report to this path
    #[arg(long, value_name = "PATH")]
    pub csv_out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the region yield table and exit
    #[arg(long)]
    pub list_regions: bool,

    /// Open the interactive terminal form
    #[cfg(feature = "tui")]
    #[arg(long)]
    pub tui: bool,

    /// Start the REST API server
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// API server port
    #[cfg(feature = "api")]
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

impl Cli {
    /// Resolves the scenario source: `--scenario`, then `--preset`, then `default`.
    pub fn load_scenario(&self) -> Result<ScenarioConfig, ConfigError> {
        if let Some(ref path) = self.scenario {
            ScenarioConfig::from_toml_file(path)
        } else {
            ScenarioConfig::from_preset(self.preset.as_deref().unwrap_or("default"))
        }
    }

    /// Applies per-field flags on top of the loaded scenario.
    pub fn apply_overrides(&self, cfg: &mut ScenarioConfig) {
        if let Some(housing) = self.housing {
            cfg.household.housing = housing;
        }
        if let Some(area) = self.area {
            cfg.household.area_m2 = area;
        }
        if let Some(occupants) = self.occupants {
            cfg.household.occupants = occupants;
        }
        if !self.interests.is_empty() {
            cfg.household.interests = self.interests.iter().copied().collect();
        }
        if let Some(mode) = self.mode {
            cfg.consumption.mode = mode;
        }
        if let Some(value) = self.value {
            cfg.consumption.value = value;
        }
        if let Some(ref region) = self.region {
            cfg.consumption.region.clone_from(region);
        }
    }
}
