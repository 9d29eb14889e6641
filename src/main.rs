use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::router::{handle, AppState};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod commands;
mod config;
mod db;
mod domain;
mod errors;
mod listings;
mod responses;
mod router;
mod scraper;
mod templates;

#[cfg(test)]
mod tests;

const USAGE: &str = "usage: rental_board [serve | scrape | export <path>]";

fn main() {
    // Loaded before the subscriber so RUST_LOG may come from .env.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,html5ever=warn,selectors=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv {
        tracing::debug!("no .env loaded: {e}");
    }

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["serve"] => serve(config),
        ["scrape"] => commands::scrape(&config, &open_store(&config)),
        ["export", path] => commands::export(&open_store(&config), path),
        _ => {
            eprintln!("{USAGE}");
            2
        }
    };

    std::process::exit(code);
}

fn open_store(config: &AppConfig) -> Database {
    let db = Database::new(config.db_path.clone());

    if let Err(e) = init_db(&db, &config.schema_path) {
        tracing::error!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    db
}

fn serve(config: AppConfig) -> i32 {
    let source = match listings::source_from_config(&config.listings_source) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("❌ Listings source error: {e}");
            return 1;
        }
    };

    let state = AppState {
        source,
        sites: config.sites,
        credentials: config.credentials,
    };

    tracing::info!(
        source = %state.source.describe(),
        sites = state.sites.len(),
        "Starting server at http://{}",
        config.bind_addr
    );

    let server = Server::bind(&config.bind_addr).max_workers(8);

    // Serve requests, passing the shared state into the closure
    let result = server.serve(move |req, _info| handle(req, &state));

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
        return 1;
    }

    tracing::info!("Server shut down cleanly.");
    0
}
