// commands.rs
use crate::config::AppConfig;
use crate::db::listings::load_listing_set;
use crate::db::Database;
use crate::domain::listing::ListingSet;
use crate::errors::ServerError;
use crate::scraper::{run_scrape, SearchFilter, YglScraper};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// `rental_board scrape`
pub fn scrape(config: &AppConfig, db: &Database) -> i32 {
    let scraper = match YglScraper::new(SearchFilter::default()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Scraper init failed: {e}");
            return 1;
        }
    };

    match run_scrape(db, &config.sites, &scraper) {
        Ok(totals) => {
            tracing::info!(
                sites = totals.sites,
                failed_sites = totals.failed_sites,
                pages = totals.pages,
                seen = totals.seen,
                inserted = totals.inserted,
                refs_added = totals.refs_added,
                "✅ Scrape complete"
            );
            0
        }
        Err(e) => {
            tracing::error!("Scrape failed: {e}");
            1
        }
    }
}

/// `rental_board export <path>`
pub fn export(db: &Database, path: &str) -> i32 {
    match export_listings(db, Path::new(path)) {
        Ok(count) => {
            tracing::info!("✅ Exported {count} listings to {path}");
            0
        }
        Err(e) => {
            tracing::error!("Export failed: {e}");
            1
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] ServerError),
    #[error("write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("serialize listings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the stored listings as the JSON document the listings page reads.
pub fn export_listings(db: &Database, path: &Path) -> Result<usize, ExportError> {
    let set: ListingSet = db.with_conn(|conn| load_listing_set(conn))?;

    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &set)?;
    writer.flush().map_err(io_err)?;

    Ok(set.len())
}
