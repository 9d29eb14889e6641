use crate::listings::ListingsError;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page for a failed request.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            h1 { "Error " (status) }
            p { (message) }
            p { a href="/" { "← Back to listings" } }
        },
    )
}

/// Stands in for the listings when they could not be fetched or parsed.
pub fn listings_unavailable(err: &ListingsError) -> Markup {
    html! {
        div.properties {
            p.error role="alert" {
                "Listings could not be loaded: " (err)
            }
        }
    }
}
