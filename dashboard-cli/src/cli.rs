use std::{io::Read, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};

use dashboard_core::{
    Collector, Config, Notifier, PersistOutcome, StorageEvent,
    notify::webhook::WebhookSink,
    provider::openweather::OpenWeatherProvider,
    render,
    store::fs::FsObjectStore,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard collector & notifier")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one city's raw payload from the provider and print it.
    Probe {
        /// City name, e.g. "Hilo".
        city: String,
    },

    /// Run one collection cycle: fetch every configured city, aggregate,
    /// and persist the report.
    Collect {
        /// Also print the storage event JSON for the written object, in the
        /// shape `notify` consumes.
        #[arg(long)]
        emit_event: bool,
    },

    /// Handle a new-report storage event: read, render, publish.
    Notify {
        /// Path to the event JSON; reads standard input when omitted.
        #[arg(long)]
        event_file: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env();

        match self.command {
            Command::Probe { city } => probe(&config, &city).await,
            Command::Collect { emit_event } => collect(&config, emit_event).await,
            Command::Notify { event_file } => notify(&config, event_file).await,
        }
    }
}

async fn probe(config: &Config, city: &str) -> anyhow::Result<()> {
    let provider = OpenWeatherProvider::new(config.api_key()?.to_string());

    println!("Fetching weather data for {city}...");
    let payload = provider.probe(city).await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

async fn collect(config: &Config, emit_event: bool) -> anyhow::Result<()> {
    let provider = OpenWeatherProvider::new(config.api_key()?.to_string());
    let store = Arc::new(FsObjectStore::new(config.data_dir.clone()));
    let collector = Collector::new(Box::new(provider), store);

    let bucket = config.bucket()?;
    let (report, outcome) = collector.run(&config.cities, bucket).await?;

    print!("{}", render::render(&report));
    match outcome {
        PersistOutcome::Stored(object) => {
            println!("Saved aggregated weather data to {}/{}", object.bucket, object.key);
            if emit_event {
                let event = StorageEvent::for_object(&object);
                println!("{}", serde_json::to_string(&event)?);
            }
        }
        PersistOutcome::Skipped => {
            println!("No weather data collected; nothing was saved.");
        }
    }

    Ok(())
}

async fn notify(config: &Config, event_file: Option<PathBuf>) -> anyhow::Result<()> {
    let raw = match event_file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read event file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read event from stdin")?;
            buf
        }
    };
    let event: StorageEvent = serde_json::from_str(&raw).context("Failed to parse event JSON")?;

    let store = Arc::new(FsObjectStore::new(config.data_dir.clone()));
    let sink = Arc::new(WebhookSink::new());
    let notifier = Notifier::new(store, sink, config.topic()?.to_string());

    let response = notifier.respond(&event).await;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
