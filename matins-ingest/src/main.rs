mod fields;
mod provider;
mod writer;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use matins_data::MATERIALS_TABLE;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use provider::{DEFAULT_BASE_URL, FileProvider, HttpProvider, SummaryProvider, SummaryQuery};

/// Populate the materials store from a materials-data provider
#[derive(Parser, Debug)]
#[command(name = "matins-ingest")]
#[command(about = "Fetch material summaries and (re)write the materials table", long_about = None)]
struct Cli {
    /// Store file to write
    #[arg(short, long, default_value = "materials.bin.zst", global = true)]
    output: PathBuf,

    /// Table to drop and recreate
    #[arg(long, default_value = MATERIALS_TABLE, global = true)]
    table: String,

    /// Maximum number of rows to keep
    #[arg(long, default_value_t = 500, global = true)]
    max_rows: usize,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the provider's summary endpoint
    Fetch(FetchArgs),
    /// Load documents from a local JSON or JSON-lines export
    Import(ImportArgs),
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// Provider API key
    #[arg(long, env = "MP_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Elements every material must contain
    #[arg(long, value_delimiter = ',', default_value = "Fe")]
    elements: Vec<String>,

    /// Documents per request
    #[arg(long, default_value_t = 250)]
    page_size: usize,
}

#[derive(Args, Debug)]
struct ImportArgs {
    /// Export file to read
    #[arg(short, long)]
    input: PathBuf,
}

/// Settings shared by both ingestion sources.
#[derive(Debug, Clone)]
struct IngestConfig {
    output: PathBuf,
    table: String,
    max_rows: usize,
    page_size: usize,
    elements: Vec<String>,
}

fn run(provider: &mut dyn SummaryProvider, config: &IngestConfig) -> Result<usize> {
    let query = SummaryQuery {
        elements: config.elements.clone(),
        fields: fields::query_fields().into_iter().map(String::from).collect(),
    };
    info!(elements = ?query.elements, max_rows = config.max_rows, "collecting documents");

    let docs = provider::collect_documents(provider, &query, config.max_rows, config.page_size)?;
    let table = fields::build_table(&config.table, &docs);
    let rows = table.rows.len();
    writer::replace_table(&config.output, table)?;
    Ok(rows)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = IngestConfig {
        output: cli.output,
        table: cli.table,
        max_rows: cli.max_rows,
        page_size: 250,
        elements: Vec::new(),
    };

    let rows = match cli.command {
        Command::Fetch(args) => {
            config.page_size = args.page_size;
            config.elements = args.elements;
            let mut provider = HttpProvider::new(args.base_url, args.api_key)?;
            run(&mut provider, &config)?
        }
        Command::Import(args) => {
            let mut provider = FileProvider::open(&args.input)?;
            config.page_size = config.max_rows.max(1);
            run(&mut provider, &config)?
        }
    };

    println!("Saved {rows} rows into {}", config.output.display());
    Ok(())
}
