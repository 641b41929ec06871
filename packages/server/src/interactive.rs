//! Interactive mode for the server.
//!
//! Prompts the user for the bind address, port, and complaints database
//! before starting the server.

use dialoguer::{Confirm, Input};

/// Runs the server in interactive mode, prompting for configuration.
///
/// Asks the user for a bind address, port, and database path, sets the
/// corresponding environment variables (`BIND_ADDR`, `PORT`,
/// `COMPLAINTS_DB_PATH`), and delegates to [`super::run_server`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Smart Complaint Map Server");
    println!();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default("127.0.0.1".to_string())
        .interact_text()
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port_str: String = Input::new()
        .with_prompt("Port")
        .default("8080".to_string())
        .interact_text()
        .unwrap_or_else(|_| "8080".to_string());

    let default_db = complaint_map_database::db_path_from_env()
        .display()
        .to_string();
    let db_path: String = Input::new()
        .with_prompt("Complaints database")
        .default(default_db.clone())
        .interact_text()
        .unwrap_or(default_db);

    if std::env::var(complaint_map_aqi::service::TOKEN_ENV_VAR).is_err() {
        println!(
            "Note: {} is not set, the air quality endpoint will be unavailable.",
            complaint_map_aqi::service::TOKEN_ENV_VAR
        );
    }

    // SAFETY: Nothing else in the process touches the environment while the
    // prompts run; `run_server` reads these once before spawning workers.
    unsafe {
        std::env::set_var("BIND_ADDR", &bind_addr);
        std::env::set_var("PORT", &port_str);
        std::env::set_var(complaint_map_database::DB_PATH_ENV_VAR, &db_path);
    }

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port_str}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server().await
}
