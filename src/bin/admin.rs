//! CLI administration tool for url-mapper.
//!
//! Operates directly on the database, without requiring the HTTP server to be
//! running. Mapping creation goes through the same validation as
//! `POST /api/mappings`.
//!
//! # Usage
//!
//! ```bash
//! # Create the url_mapping table if it does not exist
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create a mapping
//! cargo run --bin admin -- mapping create abc https://example.com
//!
//! # Show a mapping
//! cargo run --bin admin -- mapping show abc
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`url_mapper::config`].

use url_mapper::AppError;
use url_mapper::api::dto::mapping::CreateMappingRequest;
use url_mapper::application::services::MappingService;
use url_mapper::config;
use url_mapper::infrastructure::database;
use url_mapper::infrastructure::persistence::SqliteMappingRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing url-mapper.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage mappings
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping subcommands.
#[derive(Subcommand)]
enum MappingAction {
    /// Create a new mapping
    Create {
        /// Short code to register
        short_code: String,

        /// Target URL (http, https, ftp or ftps)
        long_url: String,
    },

    /// Show the mapping for a short code
    Show {
        /// Short code to look up
        short_code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Apply schema initialization
    Migrate,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = database::connect(&config).await?;

    match cli.command {
        Commands::Mapping { action } => handle_mapping_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches mapping commands.
async fn handle_mapping_action(action: MappingAction, pool: &SqlitePool) -> Result<()> {
    database::init_schema(pool).await?;

    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool.clone())));
    let service = MappingService::new(repository);

    match action {
        MappingAction::Create {
            short_code,
            long_url,
        } => create_mapping(&service, short_code, long_url).await,
        MappingAction::Show { short_code } => show_mapping(&service, &short_code).await,
    }
}

/// Creates a mapping and prints the result.
async fn create_mapping(
    service: &MappingService,
    short_code: String,
    long_url: String,
) -> Result<()> {
    let request = CreateMappingRequest {
        short_code,
        long_url,
    };

    let result = match request.into_new_mapping() {
        Ok(new_mapping) => service.create_mapping(new_mapping).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(mapping) => {
            println!("{}", "✅ Mapping created".green().bold());
            println!("  ID:         {}", mapping.id);
            println!("  Short code: {}", mapping.short_code.cyan());
            println!("  Long URL:   {}", mapping.long_url.bright_white());
            Ok(())
        }
        Err(e) if e.status_code().is_client_error() => {
            println!("{} {}", "❌".red(), e.to_string().red());
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Failed to create mapping"),
    }
}

/// Prints the mapping stored under a short code.
async fn show_mapping(service: &MappingService, short_code: &str) -> Result<()> {
    match service.resolve(short_code).await {
        Ok(mapping) => {
            println!("{}", "Mapping:".bright_white().bold());
            println!("  ID:         {}", mapping.id);
            println!("  Short code: {}", mapping.short_code.cyan());
            println!("  Long URL:   {}", mapping.long_url.bright_white());
            Ok(())
        }
        Err(AppError::NotFound) => {
            println!(
                "{}",
                format!("No mapping for short code '{}'", short_code).yellow()
            );
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Failed to look up mapping"),
    }
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Migrate => {
            database::init_schema(pool).await?;
            println!("{}", "✅ Schema is up to date".green().bold());
        }
        DbAction::Check => {
            sqlx::query_scalar::<_, i64>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
