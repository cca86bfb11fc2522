use crate::config::CrawlerConfig;
use crate::crawlers::Renderer;
use crate::error::CrawlError;
use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::Duration;

/// Renders pages in a browser driven over WebDriver
pub struct WebDriverRenderer {
    client: Client,
    ready_selector: String,
    load_timeout: Duration,
    render_settle: Duration,
    scroll_pause: Duration,
    max_scroll_rounds: usize,
}

impl WebDriverRenderer {
    /// Opens a browser session on the configured WebDriver server.
    ///
    /// The session stays open until [`close`](Self::close) is called.
    pub async fn connect(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let capabilities = browser_capabilities(config);
        let client = connect_to_webdriver(&config.webdriver_url, capabilities)
            .await
            .ok_or_else(|| CrawlError::WebDriver {
                url: config.webdriver_url.clone(),
            })?;

        Ok(Self {
            client,
            ready_selector: config.selectors.ready.clone(),
            load_timeout: config.load_timeout(),
            render_settle: config.render_settle(),
            scroll_pause: config.scroll_pause(),
            max_scroll_rounds: config.max_scroll_rounds,
        })
    }

    /// Ends the browser session
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        } else {
            ::log::debug!("WebDriver session closed");
        }
    }

    async fn load(&self, url: &str) -> Result<String, CmdError> {
        self.client.goto(url).await?;

        self.client
            .wait()
            .at_most(self.load_timeout)
            .for_element(Locator::Css(self.ready_selector.as_str()))
            .await?;

        tokio::time::sleep(self.render_settle).await;
        self.scroll_to_bottom().await?;

        self.client.source().await
    }

    /// Scrolls until the page height stops growing so lazy blocks get loaded
    async fn scroll_to_bottom(&self) -> Result<(), CmdError> {
        let mut last_height = self.scroll_height().await?;

        for round in 0..self.max_scroll_rounds {
            self.client
                .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
                .await?;
            tokio::time::sleep(self.scroll_pause).await;

            let new_height = self.scroll_height().await?;
            if new_height == last_height {
                ::log::trace!("Page height settled after {} scroll rounds", round + 1);
                return Ok(());
            }
            last_height = new_height;
        }

        ::log::warn!(
            "Page still growing after {} scroll rounds, reading it as is",
            self.max_scroll_rounds
        );
        Ok(())
    }

    async fn scroll_height(&self) -> Result<Value, CmdError> {
        self.client
            .execute("return document.body.scrollHeight", vec![])
            .await
    }
}

#[async_trait]
impl Renderer for WebDriverRenderer {
    async fn render(&mut self, url: &str) -> Option<String> {
        ::log::debug!("RENDER: {}", url);
        let started = std::time::Instant::now();

        match self.load(url).await {
            Ok(html) => {
                ::log::debug!(
                    "Rendered {} ({} bytes) in {:.2} seconds",
                    url,
                    html.len(),
                    started.elapsed().as_secs_f64()
                );
                Some(html)
            }
            Err(e) => {
                handle_navigation_error(e, url);
                None
            }
        }
    }
}

/// Chrome capabilities for the session
fn browser_capabilities(config: &CrawlerConfig) -> Map<String, Value> {
    let mut args = vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        format!("--window-size={}", config.window_size),
    ];
    if config.headless {
        args.insert(0, "--headless".to_string());
    }

    let mut capabilities = Map::new();
    capabilities.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    capabilities
}

/// Connects to the WebDriver instance, trying common local ports if the configured one fails
async fn connect_to_webdriver(webdriver_url: &str, capabilities: Map<String, Value>) -> Option<Client> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(capabilities);

    match builder.connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Some(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://127.0.0.1:4444",
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = builder.connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Some(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    None
}

/// Logs a failed page load
fn handle_navigation_error(error: CmdError, url: &str) {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while loading {}", url);
    } else {
        ::log::error!("Error loading page {}: {}", url, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_capabilities() {
        let config = CrawlerConfig::new("https://example.notion.site/board");
        let capabilities = browser_capabilities(&config);

        let args = capabilities["goog:chromeOptions"]["args"].as_array().unwrap();
        assert_eq!(args[0], "--headless");
        assert!(args.contains(&json!("--window-size=1920,1080")));
    }

    #[test]
    fn test_windowed_capabilities() {
        let mut config = CrawlerConfig::new("https://example.notion.site/board");
        config.headless = false;
        let capabilities = browser_capabilities(&config);

        let args = capabilities["goog:chromeOptions"]["args"].as_array().unwrap();
        assert!(!args.contains(&json!("--headless")));
    }
}
