mod models;
mod scraper_error;
mod ygl;

pub use models::{is_wanted, ScrapedListing, SearchFilter};
pub use scraper_error::ScraperError;
pub use ygl::{run_scrape, YglScraper};
