// src/page_extractor/logo_locator.rs
use crate::config::LogoConfig;
use crate::page_extractor::types::LogoCandidate;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "svg", "webp", "gif"];
const LANDMARK_TAGS: [&str; 2] = ["header", "nav"];

pub struct LogoLocator {
    identity_tokens: Vec<String>,
    bg_url_regex: Regex,
    early_cutoff: usize,
    early_bonus: u32,
    landmark_bonus: u32,
}

impl LogoLocator {
    pub fn new(config: &LogoConfig) -> crate::models::Result<Self> {
        Ok(Self {
            identity_tokens: config
                .identity_tokens
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
            bg_url_regex: Regex::new(r#"url\(\s*['"]?([^'")]+)['"]?\s*\)"#)?,
            early_cutoff: config.early_cutoff,
            early_bonus: config.early_bonus,
            landmark_bonus: config.landmark_bonus,
        })
    }

    /// Walk the document in order, score every image-bearing element, and
    /// return the best candidate with its reference resolved against the
    /// page base URL. `None` is a normal outcome, not a failure.
    pub fn locate(&self, document: &Html, base_url: &Url) -> Option<LogoCandidate> {
        let mut best: Option<LogoCandidate> = None;
        let mut doc_index = 0usize;

        for node in document.root_element().descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            doc_index += 1;

            let Some(source) = self.image_source(&element) else {
                continue;
            };

            let signal = self.signal_score(&element, &source);
            if signal == 0 {
                continue;
            }

            let mut score = signal;
            if doc_index <= self.early_cutoff {
                score += self.early_bonus;
            }

            debug!(
                "logo candidate {:?} at element {} scored {}",
                source, doc_index, score
            );

            // Strict comparison keeps the earliest candidate on ties.
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(LogoCandidate {
                    source: resolve_reference(&source, base_url),
                    score,
                    doc_index,
                });
            }
        }

        best
    }

    fn image_source(&self, element: &ElementRef) -> Option<String> {
        let el = element.value();

        if el.name() == "img" {
            let src = el.attr("src")?.trim();
            if src.is_empty() {
                return None;
            }
            return Some(src.to_string());
        }

        // Non-img elements only count when styled with a background image.
        let style = el.attr("style")?;
        let captures = self.bg_url_regex.captures(style)?;
        Some(captures[1].trim().to_string())
    }

    /// Token hits in id/class/alt and the source filename, weighted by the
    /// token's rank in the alias list, plus a landmark-ancestor bonus.
    /// Zero signal means the element carries no identity hint at all.
    fn signal_score(&self, element: &ElementRef, source: &str) -> u32 {
        if !plausible_image_reference(source) {
            return 0;
        }

        let el = element.value();
        let filename = filename_of(source).to_lowercase();
        let mut score = 0u32;

        for (rank, token) in self.identity_tokens.iter().enumerate() {
            let weight = (self.identity_tokens.len() - rank) as u32;
            let attr_hit = ["id", "class", "alt"]
                .iter()
                .filter_map(|name| el.attr(name))
                .any(|value| value.to_lowercase().contains(token));
            if attr_hit || filename.contains(token) {
                score += weight;
            }
        }

        if element.ancestors().filter_map(ElementRef::wrap).any(|a| {
            LANDMARK_TAGS.contains(&a.value().name())
        }) {
            score += self.landmark_bonus;
        }

        score
    }
}

/// Reject references whose extension says they cannot be an image, while
/// allowing extensionless CDN paths and data URIs through.
fn plausible_image_reference(source: &str) -> bool {
    let filename = filename_of(source);
    match filename.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => true,
    }
}

fn filename_of(source: &str) -> &str {
    let path = source
        .split_once(['?', '#'])
        .map_or(source, |(path, _)| path);
    path.rsplit('/').next().unwrap_or(path)
}

fn resolve_reference(source: &str, base_url: &Url) -> String {
    match base_url.join(source) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => source.to_string(),
    }
}
