//! Rank command implementation for the getaway CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use getaway_core::Normalizer;
use getaway_scorer::{DEFAULT_LIMIT, Ranker};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::output::{CityRanking, OutputFormat, render};
use crate::{ARG_DATASET, ARG_LIMIT, CliError};

/// Dataset location used when none is configured.
pub(crate) const DEFAULT_DATASET: &str = "data/travel_places.csv";
/// Source cities ranked when none are given.
pub(crate) const DEFAULT_CITIES: [&str; 3] = ["Kolkata", "New Delhi", "Bengaluru"];

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank weekend getaway destinations for each source city. \
                 The dataset path, result limit and output format can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Rank weekend getaways for one or more source cities"
)]
#[ortho_config(prefix = "GETAWAY")]
pub(crate) struct RankArgs {
    /// Source cities to rank destinations for.
    #[arg(value_name = "city")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) cities: Vec<String>,
    /// Path to the destination CSV file.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of recommendations per city.
    #[arg(long = ARG_LIMIT, value_name = "k")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Output encoding.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the destination CSV file.
    pub(crate) dataset: Utf8PathBuf,
    /// Number of recommendations per city; at least one.
    pub(crate) limit: usize,
    /// Output encoding.
    pub(crate) format: OutputFormat,
    /// Source cities in query order.
    pub(crate) cities: Vec<String>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_dataset(&self.dataset)
    }

    fn require_dataset(path: &Utf8Path) -> Result<(), CliError> {
        match getaway_data::dataset_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::DatasetNotFile {
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingDataset {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectDataset {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let limit = args.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(CliError::InvalidLimit { field: ARG_LIMIT });
        }
        let cities = if args.cities.is_empty() {
            DEFAULT_CITIES.map(str::to_owned).to_vec()
        } else {
            args.cities
        };
        Ok(Self {
            dataset: args
                .dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET)),
            limit,
            format: args.format.unwrap_or_default(),
            cities,
        })
    }
}

/// Rank every configured city against `ranker`.
///
/// A city missing from the dataset yields an error entry and the remaining
/// cities are still ranked.
pub(crate) fn rank_cities(ranker: &Ranker, cities: &[String], limit: usize) -> Vec<CityRanking> {
    cities
        .iter()
        .map(|city| CityRanking {
            city: city.clone(),
            outcome: ranker.rank(city, limit),
        })
        .collect()
}

/// Load the dataset, rank every city and render the results to `out`.
pub(crate) fn run_rank<W: Write>(config: &RankConfig, out: &mut W) -> Result<(), CliError> {
    config.validate_sources()?;
    let dataset = getaway_data::load_dataset(&config.dataset, &Normalizer::default()).map_err(
        |source| CliError::LoadDataset {
            path: config.dataset.clone(),
            source,
        },
    )?;
    let ranker = Ranker::new(dataset);
    debug!(
        "ranking {} cities with limit {}",
        config.cities.len(),
        config.limit
    );
    let rankings = rank_cities(&ranker, &config.cities, config.limit);
    render(config.format, &rankings, out)
}
