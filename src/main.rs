use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

use cycling_events::aggregator::Aggregator;
use cycling_events::config::FetchConfig;
use cycling_events::types::{AggregationOptions, BikeRegParams, StravaParams};
use cycling_events::{logging, server};

#[derive(Parser)]
#[command(name = "cycling_events")]
#[command(about = "Aggregates cycling event listings from BikeReg, NYCC and friends")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP query API
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
    /// Run one aggregation pass and print the events as JSON
    Fetch {
        /// BikeReg state filter, e.g. NY
        #[arg(long, default_value = "")]
        state: String,
        /// BikeReg discipline filter, e.g. Road
        #[arg(long, default_value = "")]
        discipline: String,
        /// BikeReg month filter
        #[arg(long, default_value = "")]
        month: String,
        /// Include Strava (needs STRAVA_ACCESS_TOKEN)
        #[arg(long)]
        strava: bool,
        /// Skip BikeReg
        #[arg(long)]
        no_bikereg: bool,
        /// Skip NYCC rides and calendar
        #[arg(long)]
        no_nycc: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = FetchConfig::load()?;
    let aggregator = Aggregator::new(&config)?;

    match cli.command {
        Commands::Serve { port } => {
            server::start_server(Arc::new(aggregator), port).await?;
        }
        Commands::Fetch {
            state,
            discipline,
            month,
            strava,
            no_bikereg,
            no_nycc,
        } => {
            let options = AggregationOptions {
                include_bikereg: !no_bikereg,
                include_strava: strava,
                include_nycc: !no_nycc,
                bikereg: BikeRegParams {
                    state,
                    discipline,
                    month,
                },
                strava: StravaParams::default(),
            };

            let events = aggregator.run(&options).await;
            info!("Aggregation run produced {} events", events.len());

            let output = serde_json::json!({
                "success": true,
                "count": events.len(),
                "events": events,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
