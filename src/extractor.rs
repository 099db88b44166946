use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::data_models::JobPosting;
use crate::errors::MarkerError;

/// Where a field's value is read from once its element is found.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Trimmed text content of the element.
    #[default]
    Text,
    /// Value of the named attribute.
    Attribute(String),
}

/// Lookup rule for one field inside a listing card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub selector: String,
    #[serde(default)]
    pub source: FieldSource,
}

impl Marker {
    pub fn text(selector: &str) -> Marker {
        Marker {
            selector: selector.to_string(),
            source: FieldSource::Text,
        }
    }

    pub fn attribute(selector: &str, name: &str) -> Marker {
        Marker {
            selector: selector.to_string(),
            source: FieldSource::Attribute(name.to_string()),
        }
    }
}

/// Structural markers of a search results page. Loadable from JSON so markup
/// changes on the site only need a new markers file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    pub card: String,
    pub title: Marker,
    pub company: Marker,
    pub location: Marker,
    pub published_at: Marker,
    pub apply_url: Marker,
}

impl Default for MarkerSet {
    fn default() -> Self {
        MarkerSet {
            card: "div.base-card".to_string(),
            title: Marker::text("h3.base-search-card__title"),
            company: Marker::text("h4.base-search-card__subtitle"),
            location: Marker::text("span.job-search-card__location"),
            published_at: Marker::attribute("time", "datetime"),
            apply_url: Marker::attribute("a.base-card__full-link", "href"),
        }
    }
}

struct CompiledMarker {
    selector: Selector,
    source: FieldSource,
}

impl CompiledMarker {
    fn compile(field: &'static str, marker: &Marker) -> Result<CompiledMarker, MarkerError> {
        Ok(CompiledMarker {
            selector: parse_selector(field, &marker.selector)?,
            source: marker.source.clone(),
        })
    }

    /// First match inside `card`; `None` if the element or its attribute is missing.
    fn read(&self, card: &ElementRef) -> Option<String> {
        let element = card.select(&self.selector).next()?;
        match &self.source {
            FieldSource::Text => Some(element.text().collect::<String>().trim().to_string()),
            FieldSource::Attribute(name) => element.value().attr(name).map(|v| v.to_string()),
        }
    }
}

fn parse_selector(field: &'static str, selector: &str) -> Result<Selector, MarkerError> {
    Selector::parse(selector).map_err(|e| MarkerError::InvalidSelector {
        field,
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Turns a search results page into postings.
pub struct ListingExtractor {
    card: Selector,
    title: CompiledMarker,
    company: CompiledMarker,
    location: CompiledMarker,
    published_at: CompiledMarker,
    apply_url: CompiledMarker,
}

impl ListingExtractor {
    pub fn new(markers: &MarkerSet) -> Result<ListingExtractor, MarkerError> {
        Ok(ListingExtractor {
            card: parse_selector("card", &markers.card)?,
            title: CompiledMarker::compile("title", &markers.title)?,
            company: CompiledMarker::compile("company", &markers.company)?,
            location: CompiledMarker::compile("location", &markers.location)?,
            published_at: CompiledMarker::compile("published_at", &markers.published_at)?,
            apply_url: CompiledMarker::compile("apply_url", &markers.apply_url)?,
        })
    }

    /// Extracts at most `max_results` postings, in document order. Never fails:
    /// anything missing from a card becomes a placeholder.
    pub fn extract(&self, html: &str, max_results: usize) -> Vec<JobPosting> {
        let document = Html::parse_document(html);
        document
            .select(&self.card)
            .take(max_results)
            .map(|card| self.extract_card(&card))
            .collect()
    }

    fn extract_card(&self, card: &ElementRef) -> JobPosting {
        JobPosting::scraped(
            self.title.read(card),
            self.company.read(card),
            self.location.read(card),
            self.published_at.read(card),
            self.apply_url.read(card),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_extractor() -> ListingExtractor {
        ListingExtractor::new(&MarkerSet::default()).unwrap()
    }

    const CARD: &str = r#"
        <div class="base-card relative">
            <a class="base-card__full-link" href="https://ma.linkedin.com/jobs/view/1"></a>
            <h3 class="base-search-card__title">
                Backend Engineer
            </h3>
            <h4 class="base-search-card__subtitle"> <a>Acme</a> </h4>
            <span class="job-search-card__location">Rabat, Morocco</span>
            <time class="job-search-card__listdate" datetime="2025-10-12">1 week ago</time>
        </div>"#;

    #[test]
    fn test_extracts_all_fields() {
        let extractor = default_extractor();
        let jobs = extractor.extract(&format!("<html><body>{CARD}</body></html>"), 25);
        assert_eq!(jobs.len(), 1);
        let job = &jobs[0];
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.location, "Rabat, Morocco");
        assert_eq!(job.published_at, "2025-10-12");
        assert_eq!(job.apply_url, "https://ma.linkedin.com/jobs/view/1");
        assert_eq!(job.description, "Position of Backend Engineer at Acme");
    }

    #[test]
    fn test_empty_card_is_not_dropped() {
        let extractor = default_extractor();
        let jobs = extractor.extract(r#"<div class="base-card"><p>nothing here</p></div>"#, 5);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "N/A");
        assert_eq!(jobs[0].company, "N/A");
        assert_eq!(jobs[0].location, "N/A");
        assert_eq!(jobs[0].apply_url, "#");
        assert_eq!(jobs[0].description, "Position of N/A at N/A");
    }

    #[test]
    fn test_missing_attributes_fall_back() {
        let extractor = default_extractor();
        let html = r#"<div class="base-card"><time>today</time><a class="base-card__full-link">x</a></div>"#;
        let jobs = extractor.extract(html, 5);
        assert_eq!(jobs[0].apply_url, "#");
        assert!(chrono::DateTime::parse_from_rfc3339(&jobs[0].published_at).is_ok());
    }

    #[test]
    fn test_truncates_to_max_results() {
        let extractor = default_extractor();
        let html = CARD.repeat(4);
        assert_eq!(extractor.extract(&html, 2).len(), 2);
        assert_eq!(extractor.extract(&html, 10).len(), 4);
        assert!(extractor.extract(&html, 0).is_empty());
    }

    #[test]
    fn test_no_cards() {
        let extractor = default_extractor();
        assert!(extractor.extract("<html><body><p>No jobs</p></body></html>", 25).is_empty());
        assert!(extractor.extract("", 25).is_empty());
    }

    #[test]
    fn test_custom_markers() {
        let markers = MarkerSet {
            card: "li.job".into(),
            title: Marker::text(".name"),
            company: Marker::attribute("span[data-company]", "data-company"),
            location: Marker::text(".where"),
            published_at: Marker::attribute("time", "datetime"),
            apply_url: Marker::attribute("a", "href"),
        };
        let extractor = ListingExtractor::new(&markers).unwrap();
        let html = r#"<ul><li class="job"><span class="name">SRE</span><span data-company="Initech"></span><a href="/apply">Apply</a></li></ul>"#;
        let jobs = extractor.extract(html, 10);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "SRE");
        assert_eq!(jobs[0].company, "Initech");
        assert_eq!(jobs[0].location, "N/A");
        assert_eq!(jobs[0].apply_url, "/apply");
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let markers = MarkerSet {
            card: "div[".into(),
            ..MarkerSet::default()
        };
        let err = ListingExtractor::new(&markers).err().unwrap();
        assert!(matches!(err, MarkerError::InvalidSelector { field: "card", .. }));
    }

    #[test]
    fn test_markers_from_json() {
        let json = r#"{
            "card": "div.base-card",
            "title": {"selector": "h3.base-search-card__title"},
            "company": {"selector": "h4.base-search-card__subtitle", "source": "text"},
            "location": {"selector": "span.job-search-card__location"},
            "published_at": {"selector": "time", "source": {"attribute": "datetime"}},
            "apply_url": {"selector": "a.base-card__full-link", "source": {"attribute": "href"}}
        }"#;
        let markers: MarkerSet = serde_json::from_str(json).unwrap();
        assert_eq!(markers, MarkerSet::default());
    }
}
