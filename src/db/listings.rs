use crate::domain::listing::{Listing, ListingSet};
use crate::errors::ServerError;
use crate::scraper::ScrapedListing;
use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted,
    RefAdded,
    Unchanged,
}

/// `refs` is stored as one comma-separated column.
pub fn split_refs(refs: &str) -> Vec<String> {
    refs.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Record a scraped listing. New addresses are inserted; a known address seen
/// at a new URL gets that URL appended to its refs.
pub fn record_listing(
    conn: &Connection,
    listing: &ScrapedListing,
    timestamp: i64,
) -> Result<RecordOutcome, ServerError> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT refs FROM listings WHERE addr = ?1",
            params![listing.address],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))?;

    match existing {
        None => {
            conn.execute(
                "INSERT INTO listings (addr, refs, price, beds, baths, date, notes, favorite, dismissed, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, '', 0, 0, ?7)",
                params![
                    listing.address,
                    listing.url,
                    listing.price,
                    listing.beds,
                    listing.baths,
                    listing.date,
                    timestamp
                ],
            )
            .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;

            Ok(RecordOutcome::Inserted)
        }
        Some(refs) => {
            let mut known = split_refs(&refs);
            if known.iter().any(|r| r == &listing.url) {
                return Ok(RecordOutcome::Unchanged);
            }

            known.push(listing.url.clone());
            conn.execute(
                "UPDATE listings SET refs = ?1 WHERE addr = ?2",
                params![known.join(","), listing.address],
            )
            .map_err(|e| ServerError::DbError(format!("update refs failed: {e}")))?;

            Ok(RecordOutcome::RefAdded)
        }
    }
}

/// Every stored listing, oldest first, as the document the renderer consumes.
pub fn load_listing_set(conn: &Connection) -> Result<ListingSet, ServerError> {
    let mut stmt = conn
        .prepare(
            "SELECT addr, refs, price, beds, baths, date, notes, favorite, dismissed
             FROM listings
             ORDER BY timestamp, addr",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            let addr: String = row.get(0)?;
            let refs: String = row.get(1)?;
            let price: i64 = row.get(2)?;

            let mut listing = Listing::new(price as f64, row.get(3)?, row.get(4)?, split_refs(&refs));
            listing.date = row.get(5)?;
            listing.notes = row.get(6)?;
            listing.is_favorite = row.get::<_, i64>(7)? != 0;
            listing.is_dismissed = row.get::<_, i64>(8)? != 0;

            Ok((addr, listing))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut set = ListingSet::new();
    for r in rows {
        let (addr, listing) = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        set.push(addr, listing);
    }
    Ok(set)
}
