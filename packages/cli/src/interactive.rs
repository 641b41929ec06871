//! Interactive menu shown when no subcommand is given.

use complaint_map_complaint_models::{IssueCategory, NewComplaint};
use dialoguer::{Input, Select};

use crate::commands;

/// Top-level actions offered by the menu.
enum Tool {
    Server,
    Classify,
    Solution,
    Latest,
    Seed,
    Aqi,
}

impl Tool {
    const ALL: &[Self] = &[
        Self::Server,
        Self::Classify,
        Self::Solution,
        Self::Latest,
        Self::Seed,
        Self::Aqi,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Server => "Start server",
            Self::Classify => "Classify an issue label",
            Self::Solution => "Look up a solution",
            Self::Latest => "Show latest complaint",
            Self::Seed => "Report a complaint",
            Self::Aqi => "Check air quality",
        }
    }
}

/// Runs the interactive menu.
///
/// # Errors
///
/// Returns an error if a prompt fails or the selected action fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Smart Complaint Map");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Server => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(complaint_map_server::interactive::run())
            })
            .await??;
        }
        Tool::Classify => {
            let text: String = Input::new().with_prompt("Issue label").interact_text()?;
            commands::classify(&text);
        }
        Tool::Solution => {
            let category = select_category()?;
            let intensity = prompt_intensity()?;
            commands::solution(category.as_ref(), intensity);
        }
        Tool::Latest => commands::latest().await?,
        Tool::Seed => {
            let lat: f64 = Input::new()
                .with_prompt("Latitude")
                .default(complaint_map_complaint_models::DEFAULT_LAT)
                .interact_text()?;
            let lon: f64 = Input::new()
                .with_prompt("Longitude")
                .default(complaint_map_complaint_models::DEFAULT_LON)
                .interact_text()?;
            let issue_type: String = Input::new().with_prompt("Issue label").interact_text()?;
            let intensity = prompt_intensity()?;
            let description: String = Input::new()
                .with_prompt("Description (optional)")
                .allow_empty(true)
                .interact_text()?;

            commands::seed(NewComplaint {
                lat,
                lon,
                issue_type: Some(issue_type),
                intensity: Some(intensity),
                description: (!description.trim().is_empty()).then_some(description),
                timestamp: chrono::Utc::now(),
            })
            .await?;
        }
        Tool::Aqi => commands::aqi().await?,
    }

    Ok(())
}

fn select_category() -> Result<IssueCategory, dialoguer::Error> {
    let categories = IssueCategory::all();
    let labels: Vec<String> = categories.iter().map(ToString::to_string).collect();

    let idx = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(categories[idx])
}

fn prompt_intensity() -> Result<i64, dialoguer::Error> {
    Input::new()
        .with_prompt("Intensity (1-5)")
        .default(complaint_map_complaint_models::DEFAULT_INTENSITY)
        .interact_text()
}
