use clap::Parser;
use notion_notices::{CrawlerConfig, DEFAULT_BASE_URL};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notion-notices")]
#[command(about = "Crawls a Notion notice board into JSON files")]
#[command(version)]
pub struct Args {
    /// Listing page to crawl (defaults to the KAIST CS notice board)
    pub url: Option<String>,

    /// Directory the JSON files are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver server URL (also read from WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Delay between notice pages in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Show the browser window
    #[arg(long)]
    pub no_headless: bool,

    /// Extract a saved HTML page and print it as JSON instead of crawling
    #[arg(long, value_name = "HTML")]
    pub extract_file: Option<PathBuf>,
}

impl Args {
    /// Build the crawler configuration: file, then environment, then flags
    pub fn to_config(&self) -> Result<CrawlerConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => {
                ::log::info!("Loading configuration from file: {}", path.display());
                CrawlerConfig::from_file(path)?
            }
            None => CrawlerConfig::new(DEFAULT_BASE_URL),
        };

        config.apply_env();

        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(webdriver_url) = &self.webdriver_url {
            config.webdriver_url = webdriver_url.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.request_delay_ms = delay_ms;
        }
        if self.no_headless {
            config.headless = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["notion-notices"]);
        let config = args.to_config().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.headless);
        assert!(args.extract_file.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "notion-notices",
            "https://example.notion.site/board",
            "--output-dir",
            "out",
            "--delay-ms",
            "500",
            "--no-headless",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.base_url, "https://example.notion.site/board");
        assert_eq!(config.output_dir, "out");
        assert_eq!(config.request_delay_ms, 500);
        assert!(!config.headless);
    }
}
