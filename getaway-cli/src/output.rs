//! Rendering ranked queries as text tables or JSON.

use std::io::Write;

use clap::ValueEnum;
use getaway_scorer::{RankError, Recommendation};
use serde::{Deserialize, Serialize};

use crate::CliError;

const BANNER: &str = "=== Weekend Getaway Ranker Output ===";
const HEADINGS: [&str; 6] = ["Name", "City", "State", "Distance Tier", "Rating", "Score"];

/// Output encodings supported by the `rank` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text tables, one per source city.
    #[default]
    Table,
    /// A single JSON array with one entry per source city.
    Json,
}

/// The outcome of ranking one source city.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CityRanking {
    pub(crate) city: String,
    pub(crate) outcome: Result<Vec<Recommendation>, RankError>,
}

#[derive(Debug, Serialize)]
struct JsonRanking<'a> {
    city: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations: Option<&'a [Recommendation]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub(crate) fn render<W: Write>(
    format: OutputFormat,
    rankings: &[CityRanking],
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => render_tables(rankings, out).map_err(CliError::WriteOutput),
        OutputFormat::Json => render_json(rankings, out),
    }
}

fn render_tables<W: Write>(rankings: &[CityRanking], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;
    for ranking in rankings {
        writeln!(out, "--- Top Recommendations for {} ---", ranking.city)?;
        match &ranking.outcome {
            Ok(recommendations) => write_table(recommendations, out)?,
            Err(err) => writeln!(out, "{err}")?,
        }
        writeln!(out)?;
        writeln!(out)?;
    }
    Ok(())
}

fn table_row(recommendation: &Recommendation) -> [String; 6] {
    [
        recommendation.name.clone(),
        recommendation.city.clone(),
        recommendation.state.clone(),
        recommendation.distance_tier.to_string(),
        format!("{:.1}", recommendation.rating),
        format!("{:.3}", recommendation.score),
    ]
}

/// Write a right-aligned table, sizing each column to its widest cell.
fn write_table<W: Write>(recommendations: &[Recommendation], out: &mut W) -> std::io::Result<()> {
    let rows: Vec<[String; 6]> = recommendations.iter().map(table_row).collect();
    let mut widths = HEADINGS.map(|heading| heading.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let headings = HEADINGS.map(str::to_owned);
    for row in std::iter::once(&headings).chain(&rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn render_json<W: Write>(rankings: &[CityRanking], out: &mut W) -> Result<(), CliError> {
    let document: Vec<JsonRanking<'_>> = rankings
        .iter()
        .map(|ranking| match &ranking.outcome {
            Ok(recommendations) => JsonRanking {
                city: &ranking.city,
                recommendations: Some(recommendations.as_slice()),
                error: None,
            },
            Err(err) => JsonRanking {
                city: &ranking.city,
                recommendations: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &document).map_err(CliError::SerializeOutput)?;
    writeln!(out).map_err(CliError::WriteOutput)
}
