// src/listings/renderer.rs
use crate::domain::listing::{Listing, ListingSet};
use crate::domain::sites::SiteDirectory;
use crate::listings::{ListingSource, ListingsError};
use maud::{html, Markup};

// Runs of non-breaking spaces keep the segments visually apart.
const SEGMENT_GAP: &str = "\u{a0}\u{a0}\u{a0}";
const LINK_GAP: &str = "\u{a0}\u{a0}";

pub struct RenderedListings {
    pub markup: Markup,
    pub count: usize,
}

/// `$price   {beds}Bd / {baths}bth   {id}:   site site ...`
pub fn render_listing(id: &str, listing: &Listing, directory: &SiteDirectory) -> Markup {
    html! {
        p.listing.favorite[listing.is_favorite].dismissed[listing.is_dismissed] {
            "$" (listing.price)
            (SEGMENT_GAP)
            (listing.beds) "Bd / " (listing.baths) "bth"
            (SEGMENT_GAP)
            (id) ":"
            (SEGMENT_GAP)
            @for url in &listing.refs {
                a href=(url) target="_blank" rel="noopener noreferrer" {
                    (directory.resolve(url))
                }
                (LINK_GAP)
            }
        }
    }
}

/// The `.properties` container with one paragraph per listing, in set order.
pub fn render_listings(set: &ListingSet, directory: &SiteDirectory) -> Markup {
    html! {
        div.properties {
            @for (id, listing) in set.iter() {
                (render_listing(id, listing, directory))
            }
        }
    }
}

/// Fetch the listings document once, parse it and render it.
pub fn load_and_render(
    source: &dyn ListingSource,
    directory: &SiteDirectory,
) -> Result<RenderedListings, ListingsError> {
    let text = source.fetch()?;
    let set = ListingSet::from_json(&text)?;

    tracing::debug!(
        source = %source.describe(),
        listings = set.len(),
        "rendering listings"
    );

    Ok(RenderedListings {
        markup: render_listings(&set, directory),
        count: set.len(),
    })
}
