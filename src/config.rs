use crate::error::CrawlError;
use crate::filter::UrlFilter;
use crate::parsers;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Notice board crawled when no URL is given
pub const DEFAULT_BASE_URL: &str = "https://kaist-cs.notion.site/da7b6b2e21b64bc684c69297de57e52f";

/// CSS selectors for the semantic classes of a rendered Notion page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Listing rows, tried in order until one matches
    pub listing: Vec<String>,

    /// Hyperlink nested inside a listing row
    pub link: String,

    /// Title element nested inside a listing row
    pub title: String,

    /// Content containers on a detail page, tried in order
    pub containers: Vec<String>,

    /// Text blocks inside the container
    pub text_block: String,

    /// Images inside the container
    pub image: String,

    /// Date property, searched in the whole document
    pub date: String,

    /// Page heading, used as the title when extracting a standalone page
    pub heading: String,

    /// Element the renderer waits for before reading the page
    pub ready: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            listing: vec![
                ".notion-collection-item".to_string(),
                ".notion-selectable.notion-page-block".to_string(),
                "a[href*='/']".to_string(),
            ],
            link: "a".to_string(),
            title: ".notion-page-block-title".to_string(),
            containers: vec![
                ".notion-page-content".to_string(),
                ".notion-scroller".to_string(),
            ],
            text_block: ".notion-text-block".to_string(),
            image: "img.notion-image-block".to_string(),
            date: ".notion-property-date".to_string(),
            heading: "h1".to_string(),
            ready: ".notion-page-content".to_string(),
        }
    }
}

impl SelectorConfig {
    fn all(&self) -> impl Iterator<Item = &String> {
        self.listing
            .iter()
            .chain(self.containers.iter())
            .chain([
                &self.link,
                &self.title,
                &self.text_block,
                &self.image,
                &self.date,
                &self.heading,
                &self.ready,
            ])
    }
}

/// Configuration for a notice crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Listing page to crawl
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory the JSON artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window size as `WIDTH,HEIGHT`
    #[serde(default = "default_window_size")]
    pub window_size: String,

    /// Seconds to wait for the ready selector after navigation
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// Extra wait after the ready selector appears
    #[serde(default = "default_render_settle_ms")]
    pub render_settle_ms: u64,

    /// Wait after each scroll for lazy content
    #[serde(default = "default_scroll_pause_ms")]
    pub scroll_pause_ms: u64,

    /// Upper bound on scroll rounds per page
    #[serde(default = "default_max_scroll_rounds")]
    pub max_scroll_rounds: usize,

    /// Politeness delay between detail pages
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Regex patterns an image URL must match to be kept (empty keeps all)
    #[serde(default)]
    pub image_include_patterns: Vec<String>,

    /// Regex patterns that drop an image URL
    #[serde(default)]
    pub image_exclude_patterns: Vec<String>,
}

/// Default value for base_url
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default value for output_dir
fn default_output_dir() -> String {
    "notion_data".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for headless
fn default_headless() -> bool {
    true
}

/// Default browser window size
fn default_window_size() -> String {
    "1920,1080".to_string()
}

/// Default value for load_timeout_secs
fn default_load_timeout_secs() -> u64 {
    20
}

/// Default value for render_settle_ms
fn default_render_settle_ms() -> u64 {
    3000
}

/// Default value for scroll_pause_ms
fn default_scroll_pause_ms() -> u64 {
    2000
}

/// Default cap on scroll rounds
fn default_max_scroll_rounds() -> usize {
    50
}

/// Default politeness delay between notice pages
fn default_request_delay_ms() -> u64 {
    2000
}

impl CrawlerConfig {
    /// Create a new configuration with default values
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            output_dir: default_output_dir(),
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            window_size: default_window_size(),
            load_timeout_secs: default_load_timeout_secs(),
            render_settle_ms: default_render_settle_ms(),
            scroll_pause_ms: default_scroll_pause_ms(),
            max_scroll_rounds: default_max_scroll_rounds(),
            request_delay_ms: default_request_delay_ms(),
            selectors: SelectorConfig::default(),
            image_include_patterns: Vec::new(),
            image_exclude_patterns: Vec::new(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL with the `WEBDRIVER_URL` environment variable if set
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }

    /// Check that every selector and image pattern compiles
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.selectors.listing.is_empty() {
            return Err(CrawlError::Config("no listing selectors configured".to_string()));
        }
        for selector in self.selectors.all() {
            parsers::compile(selector).map_err(|e| CrawlError::Config(e.to_string()))?;
        }
        self.image_filter()?;
        Ok(())
    }

    /// Build the filter applied to extracted image URLs
    pub fn image_filter(&self) -> Result<UrlFilter, CrawlError> {
        UrlFilter::new(&self.image_include_patterns, &self.image_exclude_patterns)
            .map_err(|e| CrawlError::Config(e.to_string()))
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }

    pub fn render_settle(&self) -> Duration {
        Duration::from_millis(self.render_settle_ms)
    }

    pub fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.scroll_pause_ms)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CrawlerConfig::from_json(
            r#"{"base_url": "https://example.notion.site/board", "request_delay_ms": 0}"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://example.notion.site/board");
        assert_eq!(config.request_delay_ms, 0);
        assert_eq!(config.output_dir, "notion_data");
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert!(config.headless);
        assert_eq!(config.selectors, SelectorConfig::default());
    }

    #[test]
    fn test_missing_base_url_falls_back_to_default_board() {
        let config = CrawlerConfig::from_json("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_selector_overrides_keep_other_defaults() {
        let config = CrawlerConfig::from_json(
            r#"{"selectors": {"date": ".custom-date", "containers": ["main"]}}"#,
        )
        .unwrap();

        assert_eq!(config.selectors.date, ".custom-date");
        assert_eq!(config.selectors.containers, vec!["main".to_string()]);
        assert_eq!(config.selectors.text_block, ".notion-text-block");
    }

    #[test]
    fn test_validate() {
        let config = CrawlerConfig::new(DEFAULT_BASE_URL);
        assert!(config.validate().is_ok());

        let mut bad_selector = config.clone();
        bad_selector.selectors.text_block = "div[".to_string();
        assert!(matches!(bad_selector.validate(), Err(CrawlError::Config(_))));

        let mut bad_pattern = config.clone();
        bad_pattern.image_include_patterns = vec!["(".to_string()];
        assert!(matches!(bad_pattern.validate(), Err(CrawlError::Config(_))));

        let mut no_listing = config;
        no_listing.selectors.listing.clear();
        assert!(matches!(no_listing.validate(), Err(CrawlError::Config(_))));
    }
}
