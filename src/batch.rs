use crate::config::CrawlerConfig;
use crate::crawlers::{Renderer, WebDriverRenderer};
use crate::error::CrawlError;
use crate::filter::UrlFilter;
use crate::parsers::{listing, notice};
use crate::results::{LinkCandidate, NO_TITLE, NoticeRecord};
use crate::writer::NoticeWriter;
use scraper::Html;
use url::Url;

/// Crawls a notice board: the listing page, then every notice it links to.
///
/// Pages are handled one at a time. Each notice is written to its own file as
/// soon as it is extracted and the whole batch is written once at the end.
pub struct NoticeCrawler {
    config: CrawlerConfig,
    base_url: Url,
    image_filter: UrlFilter,
    writer: NoticeWriter,
}

impl NoticeCrawler {
    /// Validate the configuration and prepare a crawler
    pub fn new(config: CrawlerConfig) -> Result<Self, CrawlError> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|source| CrawlError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        let image_filter = config.image_filter()?;
        let writer = NoticeWriter::new(&config.output_dir);

        Ok(Self {
            config,
            base_url,
            image_filter,
            writer,
        })
    }

    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Runs a full crawl in a fresh browser session.
    ///
    /// The session is closed before returning, whether the crawl succeeded or not.
    pub async fn run(&self) -> Result<Vec<NoticeRecord>, CrawlError> {
        let mut renderer = WebDriverRenderer::connect(&self.config).await?;
        let result = self.crawl(&mut renderer).await;
        renderer.close().await;
        result
    }

    /// Crawls the listing page and its notices using `renderer`
    pub async fn crawl<R: Renderer>(&self, renderer: &mut R) -> Result<Vec<NoticeRecord>, CrawlError> {
        ::log::info!("Starting notice crawl for: {}", self.config.base_url);

        let Some(listing_html) = renderer.render(&self.config.base_url).await else {
            ::log::error!("Failed to load main page {}", self.config.base_url);
            return Err(CrawlError::ListingUnavailable {
                url: self.config.base_url.clone(),
            });
        };

        let candidates = self.links_from(&listing_html);
        if candidates.is_empty() {
            ::log::warn!("No notice links found on {}", self.config.base_url);
            return Ok(Vec::new());
        }

        let total = candidates.len();
        ::log::info!("Found {} notices", total);

        let mut notices = Vec::with_capacity(total);
        for (position, candidate) in candidates.into_iter().enumerate() {
            let index = position + 1;
            ::log::info!("Crawling notice {}/{}: {}", index, total, candidate.title);

            let Some(html) = renderer.render(&candidate.url).await else {
                ::log::warn!("Failed to load notice page: {}", candidate.url);
                continue;
            };

            let notice = self
                .notice_from(&html, &candidate.title)
                .with_source(candidate.url, index);
            let path = self.writer.write_notice(index, &notice)?;
            ::log::info!("Saved to {}", path.display());
            notices.push(notice);

            self.pause().await;
        }

        let path = self.writer.write_all(&notices)?;
        ::log::info!("All {} notices saved to {}", notices.len(), path.display());

        Ok(notices)
    }

    /// Extracts a single page whose HTML is already at hand, titled by its heading
    pub fn extract_page(&self, html: &str) -> NoticeRecord {
        let document = Html::parse_document(html);
        let title = notice::page_title(&document, &self.config.selectors).unwrap_or_else(|| NO_TITLE.to_string());
        notice::extract_notice(&document, &title, &self.config.selectors, &self.image_filter)
    }

    fn links_from(&self, html: &str) -> Vec<LinkCandidate> {
        let document = Html::parse_document(html);
        listing::extract_links(&document, &self.base_url, &self.config.selectors)
    }

    fn notice_from(&self, html: &str, title: &str) -> NoticeRecord {
        let document = Html::parse_document(html);
        notice::extract_notice(&document, title, &self.config.selectors, &self.image_filter)
    }

    /// Politeness delay between notice pages
    async fn pause(&self) {
        let delay = self.config.request_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
