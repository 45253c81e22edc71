// src/page_extractor/extractor.rs
use crate::config::Config;
use crate::models::Result;
use crate::page_extractor::dom;
use crate::page_extractor::fetcher::PageFetcher;
use crate::page_extractor::logo_locator::LogoLocator;
use crate::page_extractor::phone_extractor::PhoneExtractor;
use crate::page_extractor::types::ExtractionResult;
use scraper::Html;
use tracing::info;

/// One-shot pipeline: fetch the page, parse it, and run both extractors
/// over the resulting tree. Holds no state across runs beyond compiled
/// patterns and the HTTP client.
pub struct PageExtractor {
    fetcher: PageFetcher,
    phones: PhoneExtractor,
    logo: LogoLocator,
}

impl PageExtractor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(&config.fetch)?,
            phones: PhoneExtractor::new(&config.phones)?,
            logo: LogoLocator::new(&config.logo)?,
        })
    }

    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        let page = self.fetcher.fetch(url).await?;

        let document = Html::parse_document(&page.body);
        let text = dom::visible_text(&document);

        let phones = self.phones.extract(&text);
        let logo = self.logo.locate(&document, &page.final_url);

        info!(
            "Extracted {} phone number(s), logo {} from {}",
            phones.len(),
            if logo.is_some() { "found" } else { "not found" },
            page.final_url
        );

        Ok(ExtractionResult {
            page_url: page.final_url.to_string(),
            phones,
            logo,
        })
    }

    /// Extraction over already-fetched HTML. Split out from `extract` so the
    /// pure part of the pipeline is testable without a network.
    pub fn extract_from_html(&self, html: &str, base_url: &url::Url) -> ExtractionResult {
        let document = Html::parse_document(html);
        let text = dom::visible_text(&document);

        ExtractionResult {
            page_url: base_url.to_string(),
            phones: self.phones.extract(&text),
            logo: self.logo.locate(&document, base_url),
        }
    }
}
