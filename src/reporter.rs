// src/reporter.rs
use crate::page_extractor::types::ExtractionResult;

/// Render the result as the lines printed to stdout. Pure formatting;
/// empty results are valid output, not errors.
pub fn render(result: &ExtractionResult) -> String {
    let mut out = String::new();

    if result.phones.is_empty() {
        out.push_str("Phone numbers: none found\n");
    } else {
        out.push_str(&format!("Phone numbers ({}):\n", result.phones.len()));
        for phone in &result.phones {
            out.push_str(&format!("  {}\n", phone.raw));
        }
    }

    match &result.logo {
        Some(logo) => out.push_str(&format!("Logo: {}\n", logo.source)),
        None => out.push_str("Logo: not found\n"),
    }

    out
}

pub fn print(result: &ExtractionResult) {
    print!("{}", render(result));
}
