// Shape of one `div.property_item` on a YGL search page:
//
// div.property_item
//  ├── a.item_title        address text, href = listing URL
//  ├── div.column          "$4,400"
//  ├── div.column          "4 Beds"
//  ├── div.column          "2 Baths"
//  └── div.column          "Available 09/01/2024"

/// Highest rent per bedroom worth keeping.
pub const MAX_RENT_PER_BED: f64 = 1150.0;
pub const MIN_BATHS: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedListing {
    pub address: String,
    pub url: String,
    pub price: i64,
    pub beds: f64,
    pub baths: f64,
    pub date: Option<String>,
}

/// Query sent with every search page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub beds_from: u32,
    pub beds_to: u32,
    pub rent_to: u32,
    pub date_from: String,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            beds_from: 4,
            beds_to: 5,
            rent_to: 5200,
            date_from: "08/02/2024".to_string(),
        }
    }
}

/// Skip single-bath places and anything over the per-bedroom budget.
pub fn is_wanted(listing: &ScrapedListing) -> bool {
    if listing.beds <= 0.0 {
        return false;
    }
    listing.baths >= MIN_BATHS && listing.price as f64 / listing.beds <= MAX_RENT_PER_BED
}
