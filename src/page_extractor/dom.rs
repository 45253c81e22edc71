// src/page_extractor/dom.rs
use scraper::{ElementRef, Html, Node};

const SKIPPED_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Collect the text a visitor would actually see: script/style/template
/// subtrees and inline `display:none` elements are skipped. Text nodes are
/// joined with newlines so digit runs on separate lines never merge into
/// one phone-shaped string.
pub fn visible_text(document: &Html) -> String {
    let mut out = String::new();
    collect_visible_text(document.root_element(), &mut out);
    out
}

fn collect_visible_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push_str(trimmed);
                    out.push('\n');
                }
            }
            Node::Element(el) => {
                if SKIPPED_TAGS.contains(&el.name()) {
                    continue;
                }
                if is_inline_hidden(el.attr("style")) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn is_inline_hidden(style: Option<&str>) -> bool {
    style.map_or(false, |s| {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        compact.contains("display:none") || compact.contains("visibility:hidden")
    })
}
