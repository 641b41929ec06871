//! Subcommand implementations shared by the argument parser and the
//! interactive menu.

use complaint_map_aqi::{LastKnownAqi, WaqiService};
use complaint_map_complaint_models::{IssueCategory, NewComplaint};
use complaint_map_database::{DbError, db_path_from_env, open_db, queries};
use complaint_map_solutions::{Solution, authority_for, classify as classify_label};

use crate::print;

/// Prints the category for an issue label.
pub fn classify(text: &str) {
    let category = classify_label(Some(text));
    println!("{text:?} -> {category}");
}

/// Prints the solution for a category label and intensity.
pub fn solution(category: &str, intensity: i64) {
    let solution = Solution::new(IssueCategory::from_label(category), intensity);
    print!("{}", print::solution(&solution));
}

/// Prints the authority contact for a category label.
pub fn authority(category: &str) {
    let category = IssueCategory::from_label(category);
    print!("{}", print::authority(category, authority_for(category)));
}

/// Prints the most recent complaint and its solution.
///
/// # Errors
///
/// Returns [`DbError`] if the store cannot be opened or queried.
pub async fn latest() -> Result<(), DbError> {
    let path = db_path_from_env();
    let db = open_db(&path).await?;

    let Some(record) = queries::latest_complaint(db.as_ref()).await? else {
        println!("No complaint data available.");
        return Ok(());
    };

    print!("{}", print::complaint(&record));
    println!();
    print!("{}", print::solution(&Solution::for_complaint(&record)));

    Ok(())
}

/// Inserts a complaint into the store.
///
/// # Errors
///
/// Returns [`DbError`] if the store cannot be opened or the insert fails.
pub async fn seed(complaint: NewComplaint) -> Result<(), DbError> {
    let path = db_path_from_env();
    let db = open_db(&path).await?;

    let id = queries::insert_complaint(db.as_ref(), &complaint).await?;
    let total = queries::count_complaints(db.as_ref()).await?;

    println!(
        "Inserted complaint {id} ({}) into {} ({total} total)",
        classify_label(complaint.issue_type.as_deref()),
        path.display()
    );

    Ok(())
}

/// Fetches and prints the city-wide air quality.
///
/// # Errors
///
/// Returns an error if the service config is malformed, `WAQI_TOKEN` is
/// not set, or the request fails.
pub async fn aqi() -> Result<(), Box<dyn std::error::Error>> {
    let service = WaqiService::load()?;
    let token = complaint_map_aqi::service::token_from_env()?;
    let client = reqwest::Client::builder()
        .timeout(service.timeout())
        .build()?;

    let stations = complaint_map_aqi::waqi::fetch_stations(&client, &service, &token).await?;
    let reading =
        complaint_map_aqi::summarize(&stations, &LastKnownAqi::new(), chrono::Utc::now());

    print!(
        "{}",
        print::city_aqi(&reading, stations.len(), &service.name)
    );

    if stations.is_empty() {
        println!("No stations returned by API.");
        return Ok(());
    }

    println!();
    for station in complaint_map_aqi::listed_stations(&stations) {
        println!("{}", print::station_line(station));
    }

    Ok(())
}
