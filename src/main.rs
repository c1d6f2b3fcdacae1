// TechJobs CLI - browse and search the job catalog from a terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use techjobs::{
    search, CatalogConfig, ColumnMapping, FieldKind, Job, JobStore, SearchColumn,
};

#[derive(Debug, Parser)]
#[command(name = "techjobs", version, about = "Browse and search job listings")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV data file (overrides the config file)
    #[arg(long, env = "TECHJOBS_DATA", global = true)]
    data: Option<PathBuf>,

    /// Map CSV columns by header name instead of position
    #[arg(long, global = true)]
    by_header: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// No log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every job
    Jobs,

    /// List the distinct values of one categorical field
    Values {
        #[arg(value_enum)]
        kind: ValueKind,
    },

    /// Search jobs by column and term
    Search {
        /// all, name, employer, location, positionType, coreCompetency
        #[arg(long, short, default_value = search::ALL)]
        column: String,

        /// Substring to look for ("all" lists everything)
        term: String,
    },

    /// List the searchable columns
    Columns,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValueKind {
    Employers,
    Locations,
    PositionTypes,
    CoreCompetencies,
}

impl From<ValueKind> for FieldKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Employers => FieldKind::Employer,
            ValueKind::Locations => FieldKind::Location,
            ValueKind::PositionTypes => FieldKind::PositionType,
            ValueKind::CoreCompetencies => FieldKind::CoreCompetency,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = resolve_config(&cli)?;
    let store = JobStore::from_config(&config);

    match &cli.command {
        Commands::Jobs => {
            let jobs = store.find_all().context("Failed to load jobs")?;
            print_jobs("All Jobs", &jobs, cli.json)?;
        }
        Commands::Values { kind } => {
            let kind = FieldKind::from(*kind);
            let values = store
                .all_values(kind)
                .with_context(|| format!("Failed to list {} values", kind))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&values)?);
            } else {
                println!("📋 {} ({})", kind, values.len());
                for value in &values {
                    println!("  {}", techjobs::display_or_placeholder(value.value()));
                }
            }
        }
        Commands::Search { column, term } => {
            let jobs = store
                .find_by_column_and_value(column, term)
                .with_context(|| format!("Search failed for {}={}", column, term))?;

            let title = if search::is_match_all(term) {
                "All Jobs".to_string()
            } else {
                let column: SearchColumn = column.parse()?;
                format!("Jobs with {}: {}", column.label(), term)
            };
            print_jobs(&title, &jobs, cli.json)?;
        }
        Commands::Columns => {
            let choices = SearchColumn::choices();
            if cli.json {
                let map: serde_json::Map<String, serde_json::Value> = choices
                    .into_iter()
                    .map(|(name, label)| (name.to_string(), label.into()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (name, label) in choices {
                    println!("  {:<16} {}", name, label);
                }
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => CatalogConfig::default(),
    };

    if let Some(data) = &cli.data {
        config = config.with_data_path(data.clone());
    }
    if cli.by_header {
        config = config.with_column_mapping(ColumnMapping::ByHeader);
    }

    Ok(config)
}

fn print_jobs(title: &str, jobs: &[Job], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(jobs)?);
        return Ok(());
    }

    println!("🔎 {} ({})", title, jobs.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if jobs.is_empty() {
        println!("No results");
    }
    for job in jobs {
        print!("{}", job);
    }

    Ok(())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,techjobs=info",
        1 => "info,techjobs=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
