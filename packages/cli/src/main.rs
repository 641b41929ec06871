#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line tools for the Hyderabad complaint map.
//!
//! ```text
//! complaint_map classify "Bad smell near drain"
//! complaint_map solution Heat --intensity 4
//! complaint_map authority Noise
//! complaint_map latest
//! complaint_map seed --lat 17.44 --lon 78.35 --issue-type "Loud music" --intensity 3
//! complaint_map aqi
//! ```
//!
//! Running with no subcommand enters interactive mode.

mod commands;
mod interactive;
mod print;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "complaint_map",
    about = "Classify complaints, look up solutions, and manage the complaint store"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a free-text issue label into a category
    Classify {
        /// Issue label, e.g. "Garbage dumping near lake"
        text: String,
    },
    /// Show the suggested solution for a category and intensity
    Solution {
        /// Category label; unrecognized labels resolve as Other
        category: String,
        /// Intensity, nominally 1-5
        #[arg(long, default_value = "1")]
        intensity: i64,
    },
    /// Show who to contact for a category
    Authority {
        /// Category label; unrecognized labels resolve as Other
        category: String,
    },
    /// Show the most recent complaint and its solution
    Latest,
    /// Insert a complaint into the store
    Seed {
        /// Latitude (WGS84)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude (WGS84)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Free-text issue label
        #[arg(long)]
        issue_type: Option<String>,
        /// Intensity, nominally 1-5
        #[arg(long)]
        intensity: Option<i64>,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },
    /// Fetch the live city-wide air quality
    Aqi,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run().await;
    };

    match command {
        Commands::Classify { text } => commands::classify(&text),
        Commands::Solution {
            category,
            intensity,
        } => commands::solution(&category, intensity),
        Commands::Authority { category } => commands::authority(&category),
        Commands::Latest => commands::latest().await?,
        Commands::Seed {
            lat,
            lon,
            issue_type,
            intensity,
            description,
        } => {
            commands::seed(complaint_map_complaint_models::NewComplaint {
                lat,
                lon,
                issue_type,
                intensity,
                description,
                timestamp: chrono::Utc::now(),
            })
            .await?;
        }
        Commands::Aqi => commands::aqi().await?,
    }

    Ok(())
}
