// templates/pages/settings.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

/// (name, label, input type)
pub const SETTINGS_FIELDS: &[(&str, &str, &str)] = &[
    ("BedsMin", "Beds (min)", "number"),
    ("BedsMax", "Beds (max)", "number"),
    ("RentMax", "Rent (max)", "number"),
    ("DateFrom", "Available from", "text"),
];

pub fn settings_page(saved: Option<usize>) -> Markup {
    desktop_layout(
        "Settings",
        html! {
            h1 { "Settings" }
            form name="settings" method="post" action="/settings" {
                @for (name, label, kind) in SETTINGS_FIELDS {
                    p {
                        label for=(name) { (label) }
                        " "
                        input type=(kind) id=(name) name=(name);
                    }
                }
                button type="submit" name="action" value="Save" { "Save" }
            }
            @if let Some(n) = saved {
                p.saved { "Saved " (n) " fields" }
            }
        },
    )
}
