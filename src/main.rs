use clap::Parser;
use sla_rs::{OrderRecord, SlaEngineBuilder};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sla-rs")]
#[command(about = "Order-fulfillment SLA engine", long_about = None)]
struct Cli {
    /// Path to an SLA profile YAML document
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Override the cutoff rule's boundary hour
    #[arg(long)]
    cutoff_hour: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        tracing_subscriber::fmt::init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let mut builder = SlaEngineBuilder::new();
    if let Some(profile) = &cli.profile {
        builder = builder.with_profile_path(profile);
    }
    if let Some(hour) = cli.cutoff_hour {
        builder = builder.with_cutoff_hour(hour);
    }
    let engine = builder.build().await?;

    // Process orders from stdin, one JSON document per line
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let order: OrderRecord = match serde_json::from_str(&line) {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!("skipping malformed order document: {}", e);
                continue;
            }
        };

        match engine.assess(&order) {
            Ok(assessment) => println!("{}", serde_json::to_string(&assessment)?),
            Err(e) => tracing::warn!(order_id = %order.order_id, "skipping order: {}", e),
        }
    }

    Ok(())
}
