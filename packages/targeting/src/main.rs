// Main entry point for the targeting pipeline

use anyhow::{Context, Result};
use clap::Parser;
use places_client::PlacesClient;
use targeting::agent::OpenAiAgent;
use targeting::config::Config;
use targeting::pipeline::{Pipeline, PipelineConfig};
use targeting::stores::PostgresStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Extract business applications from a chat session and resolve them
/// against local places.
#[derive(Parser, Debug)]
#[command(name = "targeting")]
struct Args {
    /// User the session belongs to
    #[arg(long)]
    user_id: String,

    /// Session UUID to process
    #[arg(long)]
    session_uuid: Uuid,

    /// Chat slot that receives the output
    #[arg(long)]
    chat_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,targeting=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let store = PostgresStore::new(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let agent = OpenAiAgent::new(config.openai_api_key).with_model(config.openai_model);
    let places = PlacesClient::new(config.google_maps_api_key);

    let pipeline = Pipeline::with_config(
        store,
        agent,
        places,
        PipelineConfig::new().with_output_path(&config.output_path),
    );

    match pipeline
        .run(&args.user_id, args.session_uuid, &args.chat_id)
        .await
        .context("Pipeline run failed")?
    {
        Some(results) => {
            tracing::info!(
                applications = results.extracted_applications.len(),
                output = %config.output_path,
                "Run complete"
            );
        }
        None => {
            tracing::info!("No conversation found; nothing written");
        }
    }

    Ok(())
}
