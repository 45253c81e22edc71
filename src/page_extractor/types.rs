// src/page_extractor/types.rs
use serde::{Deserialize, Serialize};

/// Which pattern rule produced a phone candidate, from most to least specific.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum PhoneShape {
    InternationalFormat,
    ParenAreaCode,
    DashSeparated,
    BareDigitsGrouped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneCandidate {
    /// The text exactly as it appeared in the page.
    pub raw: String,
    /// Digits only, leading `+` preserved. Used for de-duplication.
    pub normalized: String,
    pub shape: PhoneShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoCandidate {
    /// Image reference resolved against the page base URL.
    pub source: String,
    pub score: u32,
    /// Position of the element in document order, for deterministic tie-breaks.
    pub doc_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub page_url: String,
    pub phones: Vec<PhoneCandidate>,
    pub logo: Option<LogoCandidate>,
}
