use crate::error::{CohortError, CohortResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

pub const DEFAULT_NUM_GROUPS: usize = 5;
pub const DEFAULT_TRIALS: usize = 1000;

/// How the scorer maps a pair of group members onto the affinity matrix.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Members are looked up by their ordinal position inside the group.
    #[default]
    GroupPosition,
    /// Members are looked up by their stable registry index.
    RegistryIndex,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(short = 'g', long, default_value_t = DEFAULT_NUM_GROUPS)]
    pub num_groups: usize,

    #[arg(short = 't', long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = ScoringMode::GroupPosition)]
    pub scoring_mode: ScoringMode,

    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    // 0 = let rayon decide
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            num_groups: DEFAULT_NUM_GROUPS,
            trials: DEFAULT_TRIALS,
            seed: None,
            scoring_mode: ScoringMode::GroupPosition,
            parallel: false,
            threads: 0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CohortResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CohortError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CohortError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

impl SearchParams {
    /// Copies every flag the user typed explicitly onto `self`, leaving
    /// values that came from clap defaults untouched.
    pub fn merge_from_cli(&mut self, cli_params: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(num_groups);
        update_if_present!(trials);
        update_if_present!(seed);
        update_if_present!(scoring_mode);
        update_if_present!(parallel);
        update_if_present!(threads);
    }

    /// Fails fast on settings that can never produce a run.
    pub fn validate(&self) -> CohortResult<()> {
        if self.num_groups == 0 {
            return Err(CohortError::InvalidArgument(
                "num_groups must be at least 1".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(CohortError::InvalidArgument(
                "trials must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
