// templates/pages/home.rs

use crate::listings::{ListingsError, RenderedListings};
use crate::templates::{components::listings_unavailable, desktop_layout};
use maud::{html, Markup};

pub fn home_page(listings: &Result<RenderedListings, ListingsError>) -> Markup {
    desktop_layout(
        "Listings",
        html! {
            h1 { "Listings" }
            @match listings {
                Ok(rendered) => {
                    p.summary { (rendered.count) " listings" }
                    (rendered.markup)
                }
                Err(err) => {
                    (listings_unavailable(err))
                }
            }
        },
    )
}
