// src/page_extractor/phone_extractor.rs
use crate::config::PhoneConfig;
use crate::page_extractor::types::{PhoneCandidate, PhoneShape};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Ordered rule table, most specific shape first. Spans matched by an
/// earlier rule are consumed and never re-matched by a later one.
const RULES: [(PhoneShape, &str); 4] = [
    (
        PhoneShape::InternationalFormat,
        r"\+\d{1,3}(?:[-. \x{A0}]\(?\d{1,4}\)?){2,6}",
    ),
    (
        PhoneShape::ParenAreaCode,
        r"\(\d{3}\)[ \x{A0}]?\d{3}[-. \x{A0}]?\d{4}",
    ),
    (PhoneShape::DashSeparated, r"\b\d{3}[-.]\d{3}[-.]\d{4}\b"),
    (
        PhoneShape::BareDigitsGrouped,
        r"\b\d{1,4}(?:[ \x{A0}]\d{2,4}){1,4}\b",
    ),
];

pub struct PhoneExtractor {
    rules: Vec<(PhoneShape, Regex)>,
    date_regex: Regex,
    min_digits: usize,
    max_digits: usize,
}

impl PhoneExtractor {
    pub fn new(config: &PhoneConfig) -> crate::models::Result<Self> {
        let rules = RULES
            .iter()
            .map(|(shape, pattern)| Ok((*shape, Regex::new(pattern)?)))
            .collect::<crate::models::Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            // Calendar dates share the dash/space grouped digit shape.
            date_regex: Regex::new(r"^\d{4}[- ]\d{2}[- ]\d{2}$")?,
            min_digits: config.min_digits,
            max_digits: config.max_digits,
        })
    }

    /// Scan visible page text for phone-shaped substrings. Best-effort
    /// heuristic: false positives and negatives are both acceptable.
    pub fn extract(&self, text: &str) -> Vec<PhoneCandidate> {
        let mut consumed: Vec<(usize, usize)> = Vec::new();
        let mut found: Vec<(usize, PhoneCandidate)> = Vec::new();

        for (shape, regex) in &self.rules {
            for m in regex.find_iter(text) {
                let span = (m.start(), m.end());
                if consumed.iter().any(|&(s, e)| span.0 < e && s < span.1) {
                    continue;
                }
                // A rejected match still consumes its span; a fragment of
                // an implausible digit run is not a phone number either.
                consumed.push(span);

                if !self.plausible(m.as_str(), text, span.0, span.1) {
                    continue;
                }

                found.push((
                    span.0,
                    PhoneCandidate {
                        raw: m.as_str().to_string(),
                        normalized: normalize(m.as_str()),
                        shape: *shape,
                    },
                ));
            }
        }

        found.sort_by_key(|(start, _)| *start);

        let mut seen = HashSet::new();
        let phones: Vec<PhoneCandidate> = found
            .into_iter()
            .map(|(_, candidate)| candidate)
            .filter(|c| seen.insert(c.normalized.clone()))
            .collect();

        debug!("Extracted {} phone candidates", phones.len());
        phones
    }

    fn plausible(&self, raw: &str, text: &str, start: usize, end: usize) -> bool {
        let digits = raw.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < self.min_digits || digits > self.max_digits {
            return false;
        }

        // Word-boundary guard: never accept a match carved out of a longer
        // digit run such as a tracking or account number.
        let bytes = text.as_bytes();
        if start > 0 && bytes[start - 1].is_ascii_digit() {
            return false;
        }
        if end < bytes.len() && bytes[end].is_ascii_digit() {
            return false;
        }

        if self.date_regex.is_match(raw) {
            return false;
        }

        true
    }
}

fn normalize(raw: &str) -> String {
    let mut normalized = String::new();
    if raw.starts_with('+') {
        normalized.push('+');
    }
    normalized.extend(raw.chars().filter(|c| c.is_ascii_digit()));
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhoneConfig;

    fn extractor() -> PhoneExtractor {
        PhoneExtractor::new(&PhoneConfig::default()).unwrap()
    }

    #[test]
    fn finds_paren_and_international_formats() {
        let phones = extractor().extract("Call us at (555) 123-4567 or +1 555-987-6543");
        let raw: Vec<&str> = phones.iter().map(|p| p.raw.as_str()).collect();
        assert_eq!(raw, vec!["(555) 123-4567", "+1 555-987-6543"]);
        assert_eq!(phones[0].shape, PhoneShape::ParenAreaCode);
        assert_eq!(phones[1].shape, PhoneShape::InternationalFormat);
        assert_eq!(phones[1].normalized, "+15559876543");
    }

    #[test]
    fn finds_dash_and_dot_separated_numbers() {
        let phones = extractor().extract("sales: 555-123-4567, support: 555.987.6543");
        assert_eq!(phones.len(), 2);
        assert!(phones.iter().all(|p| p.shape == PhoneShape::DashSeparated));
    }

    #[test]
    fn finds_space_grouped_numbers() {
        let phones = extractor().extract("Hotline 0800 123 456 is free of charge");
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].raw, "0800 123 456");
        assert_eq!(phones[0].shape, PhoneShape::BareDigitsGrouped);
    }

    #[test]
    fn bare_tracking_number_is_not_a_phone() {
        let phones = extractor().extract("Order #1234567890123 has shipped");
        assert!(phones.is_empty());
    }

    #[test]
    fn digit_run_adjacent_to_match_is_rejected() {
        // A structured-looking span inside a longer digit run.
        let phones = extractor().extract("ref 9555-123-45678 end");
        assert!(phones.is_empty());
    }

    #[test]
    fn too_few_digits_are_rejected() {
        assert!(extractor().extract("room 12 34").is_empty());
    }

    #[test]
    fn too_many_digits_are_rejected() {
        assert!(extractor()
            .extract("+1 2345 6789 0123 4567 89")
            .is_empty());
    }

    #[test]
    fn calendar_dates_are_not_phones() {
        assert!(extractor().extract("published 2023 01 15").is_empty());
        assert!(extractor().extract("published 2023-01-15").is_empty());
    }

    #[test]
    fn international_match_is_not_rematched_by_lower_priority_rules() {
        let phones = extractor().extract("dial +1 555-987-6543 now");
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].shape, PhoneShape::InternationalFormat);
    }

    #[test]
    fn duplicates_deduplicate_by_normalized_form() {
        let phones = extractor().extract("call (555) 123-4567 or 555-123-4567");
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].raw, "(555) 123-4567");
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Call us at (555) 123-4567 or +1 555-987-6543 today";
        let first = extractor().extract(text);
        let second = extractor().extract(text);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn filler_text_around_a_number_does_not_break_matching() {
        let phones =
            extractor().extract("Lorem ipsum dolor sit amet (555) 123-4567 consectetur adipiscing");
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].normalized, "5551234567");
    }
}
