//! `gateway` command-line client.
//!
//! Exercises the gateway against a live backend using a persisted session
//! file, the same way a dashboard page would.
//!
//! ```bash
//! gateway health
//! ARBOSOCIAL_PASSWORD=... gateway login analyst@saude.gov.br
//! gateway whoami
//! gateway municipalities --state PE
//! gateway alerts --active
//! gateway logout
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use gateway::{
    logging, ApiClient, DashboardApi, FileSessionStore, GatewayConfig, Result, SessionEvent,
};
use serde::Serialize;
use shared::{AlertFilters, LoginCredentials, MunicipalityFilters};

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "ARBOSOCIAL dashboard gateway client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Backend liveness check
    Health,
    /// Sign in and persist the session
    Login {
        email: String,
        #[arg(long, env = "ARBOSOCIAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the signed-in user
    #[command(name = "whoami")]
    WhoAmI,
    /// End the session locally and on the backend
    Logout,
    /// List municipalities
    Municipalities {
        /// Two-letter state code, e.g. PE
        #[arg(long)]
        state: Option<String>,
    },
    /// List alerts
    Alerts {
        /// Only alerts that are still active
        #[arg(long)]
        active: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(api: &ApiClient, command: Command) -> Result<()> {
    match command {
        Command::Health => print_json(&api.health_check().await?),
        Command::Login { email, password } => {
            let auth = api.sign_in(LoginCredentials { email, password }).await?;
            print_json(&auth.user)
        }
        Command::WhoAmI => print_json(&api.get_current_user().await?),
        Command::Logout => {
            api.logout().await?;
            println!("Logged out");
            Ok(())
        }
        Command::Municipalities { state } => {
            let filters = MunicipalityFilters {
                state: state.map(|s| s.trim().to_uppercase()),
                ..Default::default()
            };
            print_json(&api.get_municipalities(&filters).await?)
        }
        Command::Alerts { active } => {
            let filters = AlertFilters {
                is_active: active.then_some(true),
                ..Default::default()
            };
            print_json(&api.get_alerts(&filters).await?)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = GatewayConfig::from_env();
    let _log_guard = logging::init(&config.log);

    let store = Arc::new(FileSessionStore::new(&config.session_file));
    let api = match ApiClient::new(&config, store) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let events = api.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                SessionEvent::Invalidated { path, .. } => {
                    tracing::warn!(path = %path, "Session invalidated, sign in again")
                }
                SessionEvent::LoggedOut => tracing::info!("Session closed"),
            }
        }
    });

    match run(&api, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_unauthorized() => {
            eprintln!("Session expired or missing. Run `gateway login <email>`.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
