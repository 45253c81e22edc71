pub mod dom;
pub mod extractor;
pub mod fetcher;
pub mod logo_locator;
pub mod phone_extractor;
pub mod types;

// Re-export the main types for easy importing
pub use extractor::PageExtractor;
pub use types::ExtractionResult;
