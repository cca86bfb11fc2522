//! Crawls a Notion-hosted notice board and saves each notice as JSON.
//!
//! The listing page is rendered in a browser, its notice links extracted, and
//! every linked page rendered and reduced to a [`NoticeRecord`]. Extraction
//! lives in [`parsers`] and never touches the network or disk.

pub mod batch;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod utils;
pub mod writer;

// Re-export commonly used types for convenience
pub use batch::NoticeCrawler;
pub use config::{CrawlerConfig, DEFAULT_BASE_URL, SelectorConfig};
pub use crawlers::{Renderer, WebDriverRenderer};
pub use error::{CrawlError, ExtractError};
pub use results::{LinkCandidate, NoticeBody, NoticeRecord};
