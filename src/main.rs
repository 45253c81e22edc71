use tracing_subscriber::EnvFilter;

mod config;
mod models;
mod page_extractor;
mod reporter;

use config::{load_config, Config};
use models::Result;
use page_extractor::{ExtractionResult, PageExtractor};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Load configuration; the tool works out of the box without one.
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            if std::path::Path::new("config.yml").exists() {
                eprintln!(
                    "contact-scout: failed to load config.yml: {}; using defaults",
                    e
                );
            }
            Config::default()
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(log_directive(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let url = match (args.next(), args.next()) {
        (Some(url), None) => url,
        _ => {
            eprintln!("usage: contact-scout <url>");
            std::process::exit(2);
        }
    };

    match run(&config, &url).await {
        Ok(result) => reporter::print(&result),
        Err(e) => {
            eprintln!("contact-scout: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: &Config, url: &str) -> Result<ExtractionResult> {
    let extractor = PageExtractor::new(config)?;
    extractor.extract(url).await
}

/// The configured level is user input; an unparseable value falls back to
/// info instead of panicking.
fn log_directive(level: &str) -> tracing_subscriber::filter::Directive {
    format!("contact_scout={}", level).parse().unwrap_or_else(|_| {
        eprintln!(
            "contact-scout: invalid logging level {:?} in config.yml; using info",
            level
        );
        "contact_scout=info".parse().unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::log_directive;

    #[test]
    fn valid_levels_parse_into_directives() {
        assert_eq!(log_directive("debug").to_string(), "contact_scout=debug");
    }

    #[test]
    fn unparseable_level_falls_back_to_info() {
        assert_eq!(log_directive("verbose").to_string(), "contact_scout=info");
    }
}
