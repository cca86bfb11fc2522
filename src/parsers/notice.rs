//! Content extraction for a notice's detail page.

use crate::config::SelectorConfig;
use crate::error::ExtractError;
use crate::filter::UrlFilter;
use crate::parsers::compile;
use crate::parsers::text::{join_blocks, visible_text};
use crate::results::{NO_DATE, NoticeBody, NoticeRecord};
use crate::utils::crawl_timestamp;
use scraper::{ElementRef, Html};

/// Separator Notion renders between the two ends of a date range
pub const DATE_RANGE_ARROW: char = '→';

/// Extracts a notice record from a rendered detail page, stamped with the current time.
///
/// Never fails: when extraction goes wrong the returned record is degraded
/// (error marker as content, no date or images) so the batch can go on.
pub fn extract_notice(
    document: &Html,
    title: &str,
    selectors: &SelectorConfig,
    images: &UrlFilter,
) -> NoticeRecord {
    extract_notice_at(document, title, selectors, images, crawl_timestamp())
}

/// Same as [`extract_notice`] with an explicit `crawled_at` value
pub fn extract_notice_at(
    document: &Html,
    title: &str,
    selectors: &SelectorConfig,
    images: &UrlFilter,
    crawled_at: String,
) -> NoticeRecord {
    match extract_body(document, selectors, images) {
        Ok(body) => NoticeRecord::new(title, body, crawled_at),
        Err(e) => {
            ::log::error!("Error extracting content for {}: {}", title, e);
            NoticeRecord::degraded(title, crawled_at)
        }
    }
}

/// Reads date, body text and image URLs from a detail page
pub fn extract_body(
    document: &Html,
    selectors: &SelectorConfig,
    images: &UrlFilter,
) -> Result<NoticeBody, ExtractError> {
    let container = resolve_container(document, &selectors.containers)?;

    let text_block = compile(&selectors.text_block)?;
    let content = join_blocks(container.select(&text_block).map(visible_text));

    let image = compile(&selectors.image)?;
    let image_urls = container
        .select(&image)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty() && images.allows(src))
        .map(str::to_string)
        .collect();

    let date = compile(&selectors.date)?;
    let date = document
        .select(&date)
        .next()
        .map(visible_text)
        .unwrap_or_else(|| NO_DATE.to_string());

    let (start, finish) = date_range(&date);

    Ok(NoticeBody {
        date,
        start,
        finish,
        content,
        image_urls,
    })
}

/// Splits a `start → finish` date into its two ends.
///
/// Dates without an arrow (including the "No date" sentinel) give `(None, None)`.
/// An empty side of the arrow stays `None`.
pub fn date_range(date: &str) -> (Option<String>, Option<String>) {
    let Some((start, finish)) = date.trim().split_once(DATE_RANGE_ARROW) else {
        return (None, None);
    };

    let side = |text: &str| Some(text.trim().to_string()).filter(|text| !text.is_empty());
    (side(start), side(finish))
}

/// First element matched by the container chain, else the document root
fn resolve_container<'a>(document: &'a Html, chain: &[String]) -> Result<ElementRef<'a>, ExtractError> {
    for text in chain {
        let selector = compile(text)?;
        if let Some(container) = document.select(&selector).next() {
            return Ok(container);
        }
        ::log::debug!("No container matched {}", text);
    }
    Ok(document.root_element())
}

/// Text of the page heading, if it has any
pub fn page_title(document: &Html, selectors: &SelectorConfig) -> Option<String> {
    let heading = compile(&selectors.heading).ok()?;
    document
        .select(&heading)
        .next()
        .map(visible_text)
        .filter(|title| !title.is_empty())
}
