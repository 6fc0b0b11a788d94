use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use u23_analytics::config::{DataSources, MINUTES_PRESETS};
use u23_analytics::engine::{AggregateResult, SummaryCards, TableView};
use u23_analytics::export;
use u23_analytics::source::{self, Loaded};
use u23_analytics::{recompute, FilterSpec, Scope};

#[derive(Parser)]
#[command(name = "u23-analytics")]
#[command(about = "U23 player analytics for league statistics files", long_about = None)]
struct Cli {
    /// Player statistics CSV; repeat or comma-separate to give fallbacks
    #[arg(long, global = true, env = "U23_ANALYTICS_DATA", value_delimiter = ',')]
    data: Vec<PathBuf>,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Position substring, or "all"
    #[arg(long, global = true, default_value = "all")]
    position: String,

    /// Minimum minutes played (presets: 0, 90, 270, 450, 900)
    #[arg(long, global = true, default_value = "0")]
    min_minutes: u32,

    /// Player name substring
    #[arg(long, global = true, default_value = "")]
    search: String,

    /// Row-set for charts and table: all or u23
    #[arg(long, global = true, default_value = "all", value_parser = parse_scope)]
    scope: Scope,
}

impl FilterArgs {
    fn to_spec(&self) -> FilterSpec {
        FilterSpec::new()
            .with_position(&self.position)
            .with_min_minutes(self.min_minutes)
            .with_search(&self.search)
            .with_scope(self.scope)
    }
}

fn parse_scope(s: &str) -> std::result::Result<Scope, String> {
    Scope::from_str(s).ok_or_else(|| format!("unknown scope '{}' (expected all or u23)", s))
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary cards, leaderboards, charts and the top of the table
    Dashboard {
        /// Number of table rows to print
        #[arg(long, default_value = "20")]
        rows: usize,
    },

    /// Export the dashboard to Excel (.xlsx) or the table to CSV (.csv)
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write each chart series to its own CSV file
    Charts {
        /// Output directory
        #[arg(short, long)]
        output_dir: PathBuf,
    },

    /// List the position and minimum-minutes choices
    Options,

    /// Display information about the loaded data
    Info,

    /// Validate the data file, failing on any load error
    Validate,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let sources = DataSources::from_paths(cli.data);

    match cli.command {
        Commands::Dashboard { rows } => {
            let loaded = source::load(&sources);
            dashboard(&loaded, &cli.filters.to_spec(), rows);
        }
        Commands::Export { output } => {
            let loaded = source::load(&sources);
            export_result(&loaded, &cli.filters.to_spec(), &output)?;
        }
        Commands::Charts { output_dir } => {
            let loaded = source::load(&sources);
            charts(&loaded, &cli.filters.to_spec(), &output_dir)?;
        }
        Commands::Options => {
            options(&source::load(&sources));
        }
        Commands::Info => {
            info(&source::load(&sources));
        }
        Commands::Validate => {
            validate(&sources)?;
        }
    }

    Ok(())
}

fn describe_source(loaded: &Loaded) {
    match &loaded.source {
        Some(path) => eprintln!("Data: {} ({} players)", path.display(), loaded.dataset.len()),
        None => eprintln!("Data: none found, showing empty views"),
    }
}

fn dashboard(loaded: &Loaded, spec: &FilterSpec, rows: usize) {
    describe_source(loaded);
    let result = recompute(&loaded.dataset, spec);

    println!("Filters: {}", spec);
    println!(
        "Matched {} players, {} under 23",
        result.filtered_count, result.u23_count
    );
    println!();

    println!("Summary");
    for (label, value) in SummaryCards::LABELS.iter().zip(result.summary.as_array()) {
        println!("  {:<22} {}", label, value);
    }
    println!();

    println!("Top Young Performers");
    for card in result.leaderboards.cards() {
        let fields: Vec<String> = card
            .fields()
            .map(|(label, value)| format!("{} {}", label, value))
            .collect();
        println!("  {:<16} {:<24} {}", card.kind.title(), card.name, fields.join(", "));
    }
    println!();

    for series in result.charts.all() {
        println!("{}", series.title);
        if series.is_empty() {
            println!("  No data");
        }
        // Stored lowest first for bar charts; print highest first
        for bar in series.rows.iter().rev() {
            match &bar.team {
                Some(team) if team != &bar.label => {
                    println!("  {:<28} {:<20} {}", bar.label, team, bar.value)
                }
                _ => println!("  {:<28} {}", bar.label, bar.value),
            }
        }
        println!();
    }

    print_table(&result, rows);
}

fn print_table(result: &AggregateResult, limit: usize) {
    let table: &TableView = &result.table;
    let shown = table.rows.len().min(limit);

    if table.is_placeholder() {
        println!("Player Statistics");
    } else {
        println!("Player Statistics (showing {} of {})", shown, table.rows.len());
    }

    let header: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    println!("{}", header.join("\t"));
    for row in table.rows.iter().take(limit) {
        let cells: Vec<&str> = row.iter().map(|v| v.as_deref().unwrap_or("")).collect();
        println!("{}", cells.join("\t"));
    }
}

fn export_result(loaded: &Loaded, spec: &FilterSpec, output: &Path) -> Result<()> {
    describe_source(loaded);
    let result = recompute(&loaded.dataset, spec);

    println!("Writing {}", output.display());
    export::export_report(&result, output)
        .with_context(|| format!("Failed to export to {}", output.display()))?;

    println!("Done!");
    Ok(())
}

fn charts(loaded: &Loaded, spec: &FilterSpec, output_dir: &Path) -> Result<()> {
    describe_source(loaded);
    let result = recompute(&loaded.dataset, spec);

    let written = export::write_chart_csvs(&result.charts, output_dir)
        .with_context(|| format!("Failed to write charts to {}", output_dir.display()))?;

    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn options(loaded: &Loaded) {
    println!("Positions:");
    for position in loaded.dataset.position_options() {
        println!("  {}", position);
    }
    println!();

    println!("Minimum minutes:");
    for (minutes, label) in MINUTES_PRESETS {
        println!("  {:<5} {}", minutes, label);
    }
}

fn info(loaded: &Loaded) {
    match &loaded.source {
        Some(path) => println!("Source: {}", path.display()),
        None => println!("Source: none (no data file found or it could not be read)"),
    }
    println!("Players: {}", loaded.dataset.len());

    let columns: Vec<String> = loaded.dataset.columns().map(|c| c.to_string()).collect();
    println!("Columns: {}", columns.join(", "));

    let u23 = loaded.dataset.players().iter().filter(|p| p.is_u23).count();
    println!("U23 players: {}", u23);
}

fn validate(sources: &DataSources) -> Result<()> {
    let loaded = source::try_load(sources).context("Failed to load data")?;

    let path = loaded.source.as_deref().unwrap_or(Path::new(""));
    println!("Data file is valid: {}", path.display());
    println!("  {} players", loaded.dataset.len());
    println!("  {} canonical columns", loaded.dataset.columns().count());

    if loaded.dataset.is_empty() {
        println!("  Warning: file has a header but no player rows");
    }
    Ok(())
}
