use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sora_core::config;
use sora_core::{Catalog, Estimator};
use sora_types::request::AccessRequest;

#[derive(Parser)]
#[command(name = "soracloud", version, about = "SoraCloud — managed GPU cloud usage estimator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the GPU catalog with hourly MGH rates
    Catalog,
    /// Show the pricing plans
    Plans,
    /// Estimate monthly usage for a set of line items
    Estimate {
        /// Line items as "GPU NAME=QUANTITY", e.g. "NVIDIA T4=4"
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Submit an access request (printed as JSON for the intake channel)
    Request {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        job_title: String,
        #[arg(long)]
        organization: String,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        hear_about_us: Option<String>,
        #[arg(long)]
        how_can_we_help: Option<String>,
        #[arg(long)]
        consent_to_marketing: bool,
        #[arg(long)]
        interested_in_serverless: bool,
        #[arg(long)]
        interested_in_multimodal: bool,
    },
    /// Show current configuration
    Status,
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => {
            let pricing = config::load_pricing()?;
            for gpu in &pricing.catalog {
                println!("{:<20} {:>5} MGH/hr", gpu.name, gpu.mgh_per_hour);
            }
            Ok(())
        }
        Commands::Plans => {
            let pricing = config::load_pricing()?;
            for plan in &pricing.plans {
                println!("{} — {}", plan.name, plan.price);
                println!("  {}", plan.description);
                print!("  {}", plan.quota);
                match &plan.overage_rate {
                    Some(rate) => println!(", then {}", rate),
                    None => println!(),
                }
                for feature in &plan.features {
                    println!("  - {}", feature);
                }
                println!();
            }
            Ok(())
        }
        Commands::Estimate { items } => {
            let pricing = config::load_pricing()?;
            let mut estimator = Estimator::new(
                Arc::new(Catalog::new(pricing.catalog)),
                Arc::new(pricing.plans),
            );

            for raw in &items {
                let (gpu, quantity) = parse_item(raw)?;
                estimator
                    .add_item(gpu, quantity)
                    .with_context(|| format!("Rejected line item {:?}", raw))?;
            }

            println!("{:<20} {:>4} {:>10} {:>14}", "GPU Type", "Qty", "MGH/hr", "Monthly MGH");
            for item in estimator.items() {
                println!(
                    "{:<20} {:>4} {:>10} {:>14}",
                    item.gpu_model, item.quantity, item.mgh_per_hour, item.monthly_mgh
                );
            }
            println!();
            println!("Estimated monthly usage: {} MGH", estimator.total_monthly_mgh());
            if let Some(plan) = estimator.recommended_plan() {
                println!("Recommended plan: {} ({})", plan.name, plan.price);
            }
            Ok(())
        }
        Commands::Request {
            name,
            email,
            job_title,
            organization,
            linkedin,
            hear_about_us,
            how_can_we_help,
            consent_to_marketing,
            interested_in_serverless,
            interested_in_multimodal,
        } => {
            let request = AccessRequest {
                name,
                email,
                job_title,
                organization,
                linkedin,
                hear_about_us,
                how_can_we_help,
                consent_to_marketing,
                interested_in_serverless,
                interested_in_multimodal,
            };
            request.validate()?;
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        Commands::Status => {
            let pricing = config::load_pricing()?;
            println!("SoraCloud v{}", env!("CARGO_PKG_VERSION"));
            println!("Pricing: {}", config::pricing_path().display());
            println!("Catalog: {} GPU models", pricing.catalog.len());
            println!("Plans: {}", pricing.plans.len());
            Ok(())
        }
    }
}

/// Parse a "GPU NAME=QUANTITY" line item. The split is on the last '='
/// so model names themselves never collide with the separator.
fn parse_item(raw: &str) -> Result<(&str, u32)> {
    let (gpu, quantity) = raw
        .rsplit_once('=')
        .with_context(|| format!("Expected \"GPU NAME=QUANTITY\", got {:?}", raw))?;
    let quantity: u32 = quantity
        .trim()
        .parse()
        .with_context(|| format!("Quantity in {:?} is not a positive integer", raw))?;
    Ok((gpu.trim(), quantity))
}
