use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use importer::{ImportOptions, ImportOutcome, RecordImporter, RecordValidator, RodeoResultsRecord};
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rodeo-import")]
#[command(about = "PRCA rodeo results importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://rodeodb.sqlite")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import one exported results file (a record or an array of records)
    File {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,

        #[arg(long)]
        include_incomplete: bool,
    },
    /// Import every .json file in a directory
    BulkImport {
        #[arg(long, default_value = "./imports")]
        directory: PathBuf,

        #[arg(long)]
        validate_only: bool,

        #[arg(long)]
        include_incomplete: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("import={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (files, validate_only, include_incomplete) = match cli.command {
        Commands::File {
            file,
            validate_only,
            include_incomplete,
        } => (vec![file], validate_only, include_incomplete),
        Commands::BulkImport {
            directory,
            validate_only,
            include_incomplete,
        } => (
            collect_json_files(&directory).await?,
            validate_only,
            include_incomplete,
        ),
    };

    if files.is_empty() {
        tracing::warn!("No JSON files to import");
        return Ok(());
    }

    let db = if validate_only {
        None
    } else {
        tracing::info!("Opening database at: {}", cli.database_url);
        let db = Database::new(&cli.database_url).await?;
        db.init_schema().await?;
        Some(db)
    };
    let options = ImportOptions { include_incomplete };

    let mut success_count = 0;
    let mut error_count = 0;

    for (idx, file_path) in files.iter().enumerate() {
        tracing::info!("[{}/{}] Processing: {}", idx + 1, files.len(), file_path.display());

        match process_file(file_path, db.as_ref(), options).await {
            Ok(()) => success_count += 1,
            Err(e) => {
                error_count += 1;
                tracing::error!("  ✗ Error: {}", e);
            }
        }
    }

    if let Some(db) = db {
        db.close().await;
    }

    tracing::info!("Summary: {} succeeded, {} failed", success_count, error_count);

    if error_count > 0 {
        return Err(format!("{} file(s) failed to import", error_count).into());
    }

    Ok(())
}

async fn collect_json_files(directory: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    tracing::info!("Scanning directory for JSON files: {}", directory.display());

    let mut json_files = Vec::new();
    let mut entries = tokio::fs::read_dir(directory).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            json_files.push(path);
        }
    }

    json_files.sort();
    Ok(json_files)
}

/// The crawler exports either a single record or an array of records
async fn process_file(
    file_path: &Path,
    db: Option<&Database>,
    options: ImportOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = tokio::fs::read_to_string(file_path).await?;
    let value: serde_json::Value = serde_json::from_str(&json_content)?;
    let records: Vec<RodeoResultsRecord> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };

    for record in &records {
        match db {
            None => {
                RecordValidator::validate(record)?.log_warnings();
                tracing::info!("  ✓ '{}' is valid", record.name);
            }
            Some(db) => match RecordImporter::new(db, options).import(record).await? {
                ImportOutcome::Imported(summary) => {
                    tracing::info!("  ✓ '{}' imported as rodeo #{}", record.name, summary.rodeo_id)
                }
                ImportOutcome::AlreadyImported { rodeo_id } => {
                    tracing::info!("  - '{}' already present as rodeo #{}", record.name, rodeo_id)
                }
                ImportOutcome::SkippedIncomplete { status } => {
                    tracing::info!("  - '{}' skipped ({})", record.name, status)
                }
            },
        }
    }

    Ok(())
}
