//! Test helpers for writing CLI datasets to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

use crate::rank::{RankConfig, run_rank};
use crate::{CliError, OutputFormat};

pub(super) const SAMPLE_CSV: &str = "\
Zone,Name,City,State,Type,Google review rating,Number of google review in lakhs
Eastern,Victoria Memorial,Kolkata,West Bengal,Museum,4.6,1.5
Eastern,Tiger Hill,Darjeeling,West Bengal,Viewpoint,4.5,0.4
Eastern,Jagannath Temple,Puri,Odisha,Temple,4.7,1.1
Eastern,Howrah Bridge,Calcutta,West Bengal,Bridge,4.4,0.9
Northern,India Gate,Delhi,Delhi,Monument,4.6,2.6
Northern,Taj Mahal,Agra,Uttar Pradesh,Monument,4.6,2.9
Southern,Lalbagh,Bangalore,Karnataka,Garden,4.4,0.7
Southern,Mysore Palace,Mysuru,Karnataka,Palace,4.6,1.8
Western,Calangute Beach,Goa,Goa,Beach,not rated,
Western,Gateway of India,Mumbai,Maharashtra,Monument,4.6,1.4
";

/// A scratch directory holding a dataset file.
#[derive(Debug)]
pub(super) struct DatasetDir {
    _dir: TempDir,
    root: Utf8PathBuf,
    dataset: Utf8PathBuf,
}

impl DatasetDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("create temporary directory: {err}"));
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non UTF-8 temporary path {}", path.display()));
        let dataset = root.join("travel_places.csv");
        fs::write(&dataset, SAMPLE_CSV).unwrap_or_else(|err| panic!("write {dataset}: {err}"));
        Self {
            _dir: dir,
            root,
            dataset,
        }
    }

    pub(super) fn dataset(&self) -> &Utf8Path {
        &self.dataset
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn missing(&self) -> Utf8PathBuf {
        self.root.join("absent.csv")
    }
}

/// Run the rank command and capture everything it writes.
pub(super) fn run_to_string(config: &RankConfig) -> Result<String, CliError> {
    let mut buffer = Vec::new();
    run_rank(config, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_else(|err| panic!("output is not UTF-8: {err}")))
}

pub(super) fn config(dataset: &Utf8Path, cities: &[&str], limit: usize) -> RankConfig {
    RankConfig {
        dataset: dataset.to_path_buf(),
        limit,
        format: OutputFormat::Table,
        cities: cities.iter().map(|&city| city.to_owned()).collect(),
    }
}
