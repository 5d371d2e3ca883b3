// src/scrape/mod.rs
use crate::carzone::PageSource;
use crate::extractors::FieldExtractor;
use crate::listing::ListingRecord;
use crate::utils::error::FetchError;

/// Fetches and extracts a single listing page.
pub async fn scrape_one<S: PageSource>(
    source: &S,
    extractor: &FieldExtractor,
    url: &str,
) -> Result<ListingRecord, FetchError> {
    let markup = source.fetch_page(url).await?;
    Ok(extractor.extract(&markup, url))
}

/// Processes every locator in order, one at a time.
///
/// Always returns one record per locator, in input order. A locator that fails
/// to fetch yields a placeholder record carrying the error message.
pub async fn run<S: PageSource>(
    locators: &[String],
    source: &S,
    extractor: &FieldExtractor,
) -> Vec<ListingRecord> {
    let mut records = Vec::with_capacity(locators.len());
    let mut failures = 0;

    for url in locators {
        println!("Scraping: {}", url);

        let record = match scrape_one(source, extractor, url).await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Error scraping {}: {}", url, e);
                failures += 1;
                ListingRecord::failed(url, &e.to_string())
            }
        };
        records.push(record);
    }

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        records.len() - failures,
        failures
    );
    records
}
