// ygl.rs
use crate::db::listings::{record_listing, RecordOutcome};
use crate::db::Database;
use crate::domain::sites::SiteDirectory;
use crate::scraper::{is_wanted, ScrapedListing, ScraperError, SearchFilter};
use ::scraper::{ElementRef, Html, Selector};
use rand::Rng;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Hard stop in case a site never serves its "nothing found" page.
const MAX_PAGES: u32 = 50;

pub struct YglScraper {
    client: Client,
    filter: SearchFilter,
}

/// Counts for one scrape run across all sites.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrapeTotals {
    pub sites: usize,
    pub failed_sites: usize,
    pub pages: usize,
    pub seen: usize,
    pub inserted: usize,
    pub refs_added: usize,
}

impl YglScraper {
    pub fn new(filter: SearchFilter) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client, filter })
    }

    /// Walk the search pages of one site until it runs out of results,
    /// handing each page's listings to `on_page`. Returns the number of
    /// pages that had listings.
    pub fn scrape_site<F>(&self, base_url: &str, mut on_page: F) -> Result<usize, ScraperError>
    where
        F: FnMut(Vec<ScrapedListing>) -> Result<(), ScraperError>,
    {
        let mut pages = 0;

        for page in 1..=MAX_PAGES {
            let url = page_url(base_url, &self.filter, page)?;
            tracing::info!("📄 Scraping page {page}: {url}");

            let html = self.fetch_html(url.as_str())?;
            let Some(listings) = parse_page(&html)? else {
                tracing::info!("🏁 No more results after page {}", page - 1);
                return Ok(pages);
            };

            tracing::info!("✅ Page {page} parsed ({} listings)", listings.len());
            on_page(listings)?;
            pages += 1;

            let pause = rand::thread_rng().gen_range(1000..=2000);
            std::thread::sleep(Duration::from_millis(pause));
        }

        tracing::warn!("stopped {base_url} at the {MAX_PAGES} page cap");
        Ok(pages)
    }

    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text()
            .map_err(|e| ScraperError::Network(e.to_string()))
    }
}

/// `base_url` plus the search filter and page number as query parameters.
pub fn page_url(base_url: &str, filter: &SearchFilter, page: u32) -> Result<Url, ScraperError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ScraperError::Config(format!("bad site url '{base_url}': {e}")))?;

    url.query_pairs_mut()
        .append_pair("beds_from", &filter.beds_from.to_string())
        .append_pair("beds_to", &filter.beds_to.to_string())
        .append_pair("rent_to", &filter.rent_to.to_string())
        .append_pair("date_from", &filter.date_from)
        .append_pair("page", &page.to_string());

    Ok(url)
}

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(e.to_string()))
}

/// Listings on one search page, or `None` once the site reports nothing found.
pub fn parse_page(html: &str) -> Result<Option<Vec<ScrapedListing>>, ScraperError> {
    let document = Html::parse_document(html);

    if document.select(&selector("div.nothing_found")?).next().is_some() {
        return Ok(None);
    }

    let item_sel = selector("div.property_item")?;
    let title_sel = selector("a.item_title")?;
    let column_sel = selector("div.column")?;

    let mut listings = Vec::new();
    for item in document.select(&item_sel) {
        match parse_item(item, &title_sel, &column_sel) {
            Some(listing) => listings.push(listing),
            None => tracing::warn!(
                "⚠️ skipping unparsable listing: {}",
                text_of(item).chars().take(80).collect::<String>()
            ),
        }
    }

    Ok(Some(listings))
}

fn parse_item(item: ElementRef, title_sel: &Selector, column_sel: &Selector) -> Option<ScrapedListing> {
    let title = item.select(title_sel).next()?;
    let address = text_of(title);
    let url = title.value().attr("href")?.to_string();
    if address.is_empty() {
        return None;
    }

    let columns: Vec<String> = item.select(column_sel).map(text_of).collect();

    let price_digits: String = columns.first()?.chars().filter(char::is_ascii_digit).collect();
    let price = price_digits.parse::<i64>().ok()?;
    let beds = first_token(columns.get(1)?)?.parse::<f64>().ok()?;
    let baths = first_token(columns.get(2)?)?.parse::<f64>().ok()?;
    let date = columns
        .get(3)
        .and_then(|c| c.split_whitespace().nth(1))
        .map(str::to_string);

    Some(ScrapedListing {
        address,
        url,
        price,
        beds,
        baths,
        date,
    })
}

fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn first_token(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

/// Scrape every site in the directory and record wanted listings. A site
/// that fails to fetch or parse is skipped; store errors end the run.
pub fn run_scrape(
    db: &Database,
    sites: &SiteDirectory,
    scraper: &YglScraper,
) -> Result<ScrapeTotals, ScraperError> {
    let mut totals = ScrapeTotals::default();

    for site in sites.prefixes() {
        let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let mut inserted = 0;

        let result = scraper.scrape_site(site, |listings| {
            for listing in listings.iter().filter(|l| is_wanted(l)) {
                totals.seen += 1;
                let outcome = db.with_conn(|conn| record_listing(conn, listing, timestamp))?;
                match outcome {
                    RecordOutcome::Inserted => {
                        inserted += 1;
                        tracing::info!("🏠 new listing: {} ({})", listing.address, listing.url);
                    }
                    RecordOutcome::RefAdded => totals.refs_added += 1,
                    RecordOutcome::Unchanged => {}
                }
            }
            Ok(())
        });

        let pages = match result {
            Ok(pages) => pages,
            // A broken store breaks every site; stop here.
            Err(e @ ScraperError::Db(_)) => return Err(e),
            Err(e) => {
                tracing::error!("❌ {site} aborted: {e}");
                totals.failed_sites += 1;
                continue;
            }
        };

        tracing::info!("{site}: {pages} pages, {inserted} new listings");
        totals.sites += 1;
        totals.pages += pages;
        totals.inserted += inserted;
    }

    Ok(totals)
}
