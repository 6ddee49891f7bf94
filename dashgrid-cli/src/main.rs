//! `dashgrid`: query a JSON grid document from the terminal.

mod document;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use dashgrid::ExportScope;
use dashgrid::model::SortSpec;
use simplelog::ColorChoice;
use simplelog::ConfigBuilder;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

use crate::document::Document;

#[derive(Debug, Parser)]
#[command(
    name = "dashgrid",
    about = "Search, filter, sort and page through a JSON grid document",
    version
)]
pub struct Cli {
    /// Grid document: `{ "rows": [...], "columns": [...], "filters": [...], "table": {...} }`.
    pub file: PathBuf,

    /// Case-insensitive search across searchable columns.
    #[arg(short, long)]
    pub search: Option<String>,

    /// KEY=VALUE filter. Repeatable. Multi-select filters take
    /// comma-separated values, date ranges take START..END.
    #[arg(short, long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Column key to sort by.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// 1-based page to show; clamped into range.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page, overriding the document.
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Select a row by id. Repeatable.
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Print rows as JSON instead of a table: the selection when rows are
    /// selected, otherwise every filtered row.
    #[arg(long)]
    pub export: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if let Err(err) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialize logger: {}", err);
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let document = Document::load(&cli.file)?;

    let mut config = document.table.clone().resolve();
    if !cli.select.is_empty() {
        config.enable_selection = true;
    }
    let mut grid = document.into_grid(config)?;

    if let Some(per_page) = cli.per_page {
        grid.set_items_per_page(per_page);
    }
    if let Some(term) = cli.search {
        grid.set_search(term);
    }
    for raw in &cli.filters {
        let (key, value) = document::parse_filter(raw, grid.filter_specs())?;
        grid.set_filter(key, value);
    }
    if let Some(key) = cli.sort {
        let sort = if cli.desc {
            SortSpec::desc(key)
        } else {
            SortSpec::asc(key)
        };
        grid.set_sort(Some(sort));
    }
    for id in &cli.select {
        grid.toggle_row(id);
    }
    grid.go_to_page(cli.page);

    if cli.export {
        let scope = if cli.select.is_empty() {
            ExportScope::Filtered
        } else {
            ExportScope::Selected
        };
        let rows = grid.export(scope);
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print!("{}", render::render(&grid));
    Ok(())
}
