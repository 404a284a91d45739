use crate::{config::Config, gateways};
use anyhow::{bail, Context as _, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use locmap_application::prelude::*;
use locmap_core::{
    entities::{Dataset, Progress},
    usecases::{ColumnNames, LayerMode, MapOptions, ProgressObserver},
};
use locmap_gateways::leaflet::LeafletRenderer;
use std::{
    fs,
    path::{Path, PathBuf},
};

const PROGRESS_LOG_STEP: u8 = 10;

#[derive(Debug, Parser)]
#[command(author, version, about = "Geocode company locations and draw them on a map")]
pub struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Geocode rows without coordinates and save the updated spreadsheet
    Geocode {
        /// Spreadsheet (.csv, .xlsx, .xls, .ods)
        input: PathBuf,
        /// Updated spreadsheet; the format follows the file extension
        #[arg(short, long, default_value = locmap_application::spreadsheet::DEFAULT_FILE_NAME)]
        output: PathBuf,
        /// Also render an interactive map into this HTML file
        #[arg(long, value_name = "HTML")]
        map: Option<PathBuf>,
        /// Cluster markers instead of one layer per company
        #[arg(long)]
        cluster: bool,
        #[command(flatten)]
        columns: ColumnArgs,
    },
    /// Render rows that already have coordinates without geocoding
    Map {
        input: PathBuf,
        #[arg(short, long, default_value = MAP_FILE_NAME)]
        output: PathBuf,
        #[arg(long)]
        cluster: bool,
        /// Only draw the rows of this company
        #[arg(long, value_name = "NAME")]
        company: Option<String>,
        #[command(flatten)]
        columns: ColumnArgs,
    },
    /// Validate the columns and count rows without coordinates
    Check {
        input: PathBuf,
        /// List the rows of this company
        #[arg(long, value_name = "NAME")]
        company: Option<String>,
        #[command(flatten)]
        columns: ColumnArgs,
    },
}

/// Overrides of the configured column names.
#[derive(Debug, Default, ClapArgs)]
struct ColumnArgs {
    #[arg(long, value_name = "NAME")]
    company_column: Option<String>,
    #[arg(long, value_name = "NAME")]
    address_column: Option<String>,
    #[arg(long, value_name = "NAME")]
    latitude_column: Option<String>,
    #[arg(long, value_name = "NAME")]
    longitude_column: Option<String>,
}

impl ColumnArgs {
    fn apply(self, mut columns: ColumnNames) -> ColumnNames {
        let Self {
            company_column,
            address_column,
            latitude_column,
            longitude_column,
        } = self;
        if let Some(name) = company_column {
            columns.company_name = name;
        }
        if let Some(name) = address_column {
            columns.address = name;
        }
        if let Some(name) = latitude_column {
            columns.latitude = name;
        }
        if let Some(name) = longitude_column {
            columns.longitude = name;
        }
        columns
    }
}

/// Logs the progress of a geocoding pass in steps of 10 %.
#[derive(Debug, Default)]
struct LogProgress {
    last_logged: Option<u8>,
}

impl ProgressObserver for LogProgress {
    fn progress(&mut self, progress: Progress) {
        let step = progress.percent() / PROGRESS_LOG_STEP * PROGRESS_LOG_STEP;
        if self.last_logged.is_some_and(|last| last >= step) {
            return;
        }
        self.last_logged = Some(step);
        if step > 0 {
            log::info!(
                "Processed {} of {} rows ({step} %)",
                progress.processed,
                progress.total
            );
        }
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

fn run_with(args: Args) -> Result<()> {
    let Args { config, command } = args;
    let cfg = Config::try_load_from_file_or_default(config.as_deref())?;
    match command {
        Command::Geocode {
            input,
            output,
            map,
            cluster,
            columns,
        } => {
            // Fail before any address is sent to the geocoding service
            let format = Format::from_path(&output)?;
            check_output_dir(&output)?;
            if let Some(map) = &map {
                check_output_dir(map)?;
            }
            let columns = columns.apply(cfg.columns);
            let session = upload_file(&input, &columns)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let session = match gateways::geocoding_gateway(&cfg.geocoding)? {
                Some(geo_gw) => {
                    let (session, geocoded) =
                        geocode(session, &*geo_gw, &mut LogProgress::default());
                    println!("{}", geocoded.summary);
                    session
                }
                None => {
                    log::warn!("No geocoding gateway configured: keeping coordinates as they are");
                    session
                }
            };
            let exported = export_spreadsheet(&session, format)?;
            write_file(&output, &exported)?;
            if let Some(map) = map {
                let options = map_options(cfg.map, cluster);
                let rendered = render_map(&session, &options, &LeafletRenderer::default())?;
                write_file(&map, &rendered)?;
            }
        }
        Command::Map {
            input,
            output,
            cluster,
            company,
            columns,
        } => {
            check_output_dir(&output)?;
            let columns = columns.apply(cfg.columns);
            let mut session = upload_file_with_coordinates(&input, &columns)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            if let Some(company) = company {
                session = select_company(&session, &company)?;
            }
            let options = map_options(cfg.map, cluster);
            let rendered = render_map(&session, &options, &LeafletRenderer::default())?;
            write_file(&output, &rendered)?;
        }
        Command::Check {
            input,
            company,
            columns,
        } => {
            let columns = columns.apply(cfg.columns);
            let session = upload_file(&input, &columns)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let dataset = session.dataset();
            println!(
                "{}: {} row(s), {} without coordinates",
                session.file_name(),
                dataset.len(),
                dataset.count_unresolved()
            );
            if let Some(company) = company {
                let selected = select_company(&session, &company)?;
                for line in company_rows(selected.dataset()) {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}

fn map_options(mut options: MapOptions, cluster: bool) -> MapOptions {
    if cluster {
        options.layer_mode = LayerMode::Clustered;
    }
    options
}

/// One line per record: company, address and coordinates.
fn company_rows(dataset: &Dataset) -> Vec<String> {
    dataset
        .records()
        .iter()
        .map(|r| {
            let (lat, lng) = r
                .position
                .map(|pos| pos.to_lat_lng_deg())
                .map(|(lat, lng)| (lat.to_string(), lng.to_string()))
                .unwrap_or_default();
            format!("{}\t{}\t{lat}\t{lng}", r.company_name, r.address)
        })
        .collect()
}

fn check_output_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            bail!("Output directory {} does not exist", dir.display())
        }
        _ => Ok(()),
    }
}

fn write_file(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, &doc.bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved {} ({})", path.display(), doc.mime_type);
    Ok(())
}
