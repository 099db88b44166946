use anyhow::Result;

use crate::config::ScraperConfig;
use crate::data_models::{JobPosting, SearchFilters};
use crate::extractor::{ListingExtractor, MarkerSet};
use crate::fetcher::PageFetcher;
use crate::search_url;

/// Result of one scrape: the postings found, or why the page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Found(Vec<JobPosting>),
    Failed(String),
}

impl ScrapeOutcome {
    pub fn jobs(&self) -> &[JobPosting] {
        match self {
            ScrapeOutcome::Found(jobs) => jobs,
            ScrapeOutcome::Failed(_) => &[],
        }
    }
}

pub struct JobScraper {
    base_url: String,
    fetcher: PageFetcher,
    extractor: ListingExtractor,
}

impl JobScraper {
    pub fn new(config: &ScraperConfig, markers: &MarkerSet) -> Result<JobScraper> {
        Ok(JobScraper {
            base_url: config.base_url.clone(),
            fetcher: PageFetcher::new(config)?,
            extractor: ListingExtractor::new(markers)?,
        })
    }

    pub fn search_url(&self, filters: &SearchFilters) -> String {
        search_url::build(&self.base_url, filters)
    }

    /// Fetches the first results page for `filters` and extracts its postings.
    /// A failed fetch is reported in the outcome, never as an error.
    pub async fn search(&self, filters: &SearchFilters) -> ScrapeOutcome {
        let url = self.search_url(filters);
        log::info!("scraping job listings: {url}");

        match self.fetcher.fetch(&url).await {
            Ok(html) => {
                let jobs = self.extractor.extract(&html, filters.max_results);
                log::info!("{} job postings extracted", jobs.len());
                ScrapeOutcome::Found(jobs)
            }
            Err(e) => {
                log::error!("error fetching job listings, error: {:#}", e);
                ScrapeOutcome::Failed(e.to_string())
            }
        }
    }
}
