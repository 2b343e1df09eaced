use log::{debug, info, warn};

use line_bidding::builder::Builder;
use line_bidding::*;
use snafu::prelude::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::bid::config_reader::*;

pub mod config_reader;
mod io_common;
mod io_csv;
mod io_excel;
mod io_text;

#[derive(Debug, Snafu)]
pub enum BidError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {worksheet} not found in {path}"))]
    MissingWorksheet { path: String, worksheet: String },
    #[snafu(display("Unexpected cell in row {lineno}: {content}"))]
    ExcelWrongCellType { lineno: usize, content: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningCsv { source: csv::Error, path: String },
    #[snafu(display("Error reading record {lineno} of {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Error opening file {path}"))]
    OpeningText {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON in {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Could not understand index {content}: expected a number from 1 or a column name"))]
    ParsingJsonNumber { content: String },
    #[snafu(display("Error writing the summary"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Error writing file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Missing parent directory for {path}"))]
    MissingParentDir { path: String },
    #[snafu(display("No seniority given: use --seniority or bidSettings.seniority"))]
    MissingSeniority {},
    #[snafu(display("No number of lines given: use --lines or bidSettings.totalLines"))]
    MissingTotalLines {},
    #[snafu(display("No roster given: use --input or rosterSources"))]
    MissingRoster {},
    #[snafu(display("Input type {provider} is not supported (expected text, csv or xlsx)"))]
    UnknownProvider { provider: String },
    #[snafu(display("{path}, line {lineno}: no valid seniority in {content:?}"))]
    MalformedBidder {
        path: String,
        lineno: usize,
        content: String,
    },
    #[snafu(display("Bid simulation error: {source}"))]
    Simulation { source: BiddingErrors },
    #[snafu(display("Difference detected between simulated summary and reference summary"))]
    ReferenceMismatch {},
}

type BidResult<T> = Result<T, BidError>;

/// A roster row, as parsed by the readers.
/// This is before checking the seniority and assigning default identifiers.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedBidder {
    pub lineno: usize,
    pub seniority: Option<u32>,
    pub identifier: Option<String>,
    pub preferences: Vec<u32>,
    /// The raw row, for error messages.
    pub content: String,
}

/// The settings of a run, after merging the command line with the configuration.
#[derive(Eq, PartialEq, Debug, Clone)]
struct RunSettings {
    seniority: u32,
    total_lines: u32,
    output_path: Option<String>,
    reference_path: Option<String>,
}

fn read_roster_data(root_path: &str, source: &RosterSource) -> BidResult<Vec<ParsedBidder>> {
    let p: PathBuf = [root_path, source.file_path.as_str()].iter().collect();
    let p2 = p.as_path().display().to_string();
    info!("Attempting to read roster file {:?}", p2);
    let parsed_bidders = match source.provider.as_str() {
        "text" | "" => io_text::read_text_roster(&p2, source),
        "csv" => io_csv::read_csv_roster(&p2, source),
        "xlsx" => io_excel::read_excel_roster(&p2, source),
        x => UnknownProviderSnafu { provider: x }.fail(),
    }?;
    info!(
        "Read {} roster rows from {:?}",
        parsed_bidders.len(),
        source.file_path
    );
    Ok(parsed_bidders)
}

fn validate_bidders(
    parsed_bidders: &[ParsedBidder],
    path: &str,
    builder: &mut Builder,
) -> BidResult<()> {
    let default_id = io_common::make_default_id(path);
    for pb in parsed_bidders.iter() {
        let seniority = pb
            .seniority
            .filter(|s| *s >= 1)
            .context(MalformedBidderSnafu {
                path,
                lineno: pb.lineno,
                content: pb.content.clone(),
            })?;
        let identifier = pb
            .identifier
            .clone()
            .unwrap_or_else(|| default_id(pb.lineno));

        // Lines are numbered from 1.
        if pb.preferences.contains(&0) {
            warn!(
                "validate_bidders: {}, line {}: dropping bid for line 0",
                path, pb.lineno
            );
        }
        let preferences: Vec<u32> = pb.preferences.iter().cloned().filter(|l| *l > 0).collect();

        debug!(
            "validate_bidders: {} {}: {:?}",
            seniority, identifier, preferences
        );
        builder.add_bidder_record(&Bidder {
            seniority,
            identifier,
            preferences,
        });
    }
    Ok(())
}

fn build_summary_js(
    output_settings: &OutputSettings,
    settings: &RunSettings,
    res: &SimulationResult,
) -> JSValue {
    let c = OutputConfig {
        bid_period: output_settings.bid_period.clone(),
        seniority: settings.seniority,
        total_lines: settings.total_lines,
    };
    let awards: Vec<JSValue> = res
        .assignments
        .iter()
        .map(|a| {
            json!({
                "seniority": a.seniority,
                "identifier": a.identifier,
                "awarded": a.award.to_string(),
            })
        })
        .collect();
    json!({
        "config": c,
        "results": {
            "rank": res.target_rank,
            "remainingCount": res.remaining_count(),
            "remainingLines": res.residual_pool,
            "awards": awards,
        }
    })
}

fn log_outcome(settings: &RunSettings, res: &SimulationResult) {
    for a in res.assignments.iter() {
        info!("{:>9} {} -> {}", a.seniority, a.identifier, a.award);
    }
    info!(
        "Seniority {}: you bid in position {}, {} of {} lines remaining",
        settings.seniority,
        res.target_rank,
        res.remaining_count(),
        settings.total_lines
    );
    let lines: Vec<String> = res.residual_pool.iter().map(|l| l.to_string()).collect();
    info!("Available lines: {}", lines.join(", "));
}

fn write_summary(pretty_js: &str, output_path: &str) -> BidResult<()> {
    if output_path == "stdout" {
        println!("{}", pretty_js);
    } else {
        info!("Writing summary to {:?}", output_path);
        fs::write(output_path, pretty_js).context(WritingOutputSnafu { path: output_path })?;
    }
    Ok(())
}

// The reference summary, if provided for comparison
fn check_reference(pretty_js_stats: &str, reference_path: &str) -> BidResult<()> {
    let summary_ref = read_summary(reference_path)?;
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(WritingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        return ReferenceMismatchSnafu {}.fail();
    }
    info!("Summary matches the reference {:?}", reference_path);
    Ok(())
}

// Command line values win over the configuration file. The roster given with
// --input is relative to the working directory, the configured ones to the
// directory of the configuration file.
fn assemble_config(args: &Args) -> BidResult<(BidConfig, String, RunSettings)> {
    let (mut config, config_root) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root = Path::new(config_path.as_str())
                .parent()
                .context(MissingParentDirSnafu {
                    path: config_path.as_str(),
                })?
                .display()
                .to_string();
            (config, root)
        }
        None => (BidConfig::default(), String::new()),
    };
    info!("config: {:?}", config);

    let root_path = match &args.input {
        Some(input) => {
            let provider = args.input_type.clone().unwrap_or_else(|| "text".to_string());
            config.roster_sources = vec![RosterSource::new(&provider, input)];
            String::new()
        }
        None => config_root.clone(),
    };
    if let Some(worksheet) = &args.excel_worksheet_name {
        for source in config.roster_sources.iter_mut() {
            source.excel_worksheet_name = Some(worksheet.clone());
        }
    }
    ensure!(!config.roster_sources.is_empty(), MissingRosterSnafu {});

    let seniority = args
        .seniority
        .or(config.bid_settings.seniority)
        .context(MissingSenioritySnafu {})?;
    let total_lines = args
        .lines
        .or(config.bid_settings.total_lines)
        .context(MissingTotalLinesSnafu {})?;
    let output_path = match (&args.out, &config.output_settings.output_path) {
        (Some(out), _) => Some(out.clone()),
        (None, Some(out)) if out == "stdout" => Some(out.clone()),
        (None, Some(out)) => {
            let p: PathBuf = [config_root.as_str(), out.as_str()].iter().collect();
            Some(p.display().to_string())
        }
        (None, None) => None,
    };

    let settings = RunSettings {
        seniority,
        total_lines,
        output_path,
        reference_path: args.reference.clone(),
    };
    Ok((config, root_path, settings))
}

pub fn run_bid_simulation(args: &Args) -> BidResult<()> {
    let (config, root_path, settings) = assemble_config(args)?;
    debug!("run_bid_simulation: settings: {:?}", settings);

    let mut builder = Builder::new(settings.total_lines);
    for source in config.roster_sources.iter() {
        let parsed_bidders = read_roster_data(&root_path, source)?;
        validate_bidders(&parsed_bidders, &source.file_path, &mut builder)?;
    }
    info!("Roster: {} crew members", builder.len());

    let result = builder
        .simulate(settings.seniority)
        .context(SimulationSnafu {})?;
    log_outcome(&settings, &result);

    // Assemble the final json
    let result_js = build_summary_js(&config.output_settings, &settings, &result);
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(WritingJsonSnafu {})?;

    if let Some(output_path) = &settings.output_path {
        write_summary(&pretty_js_stats, output_path)?;
    }

    if let Some(reference_path) = &settings.reference_path {
        check_reference(&pretty_js_stats, reference_path)?;
    }

    Ok(())
}
