//! Link extraction for the listing page.

use crate::config::SelectorConfig;
use crate::parsers::text::visible_text;
use crate::parsers::{compile, first_match};
use crate::results::{LinkCandidate, NO_TITLE};
use scraper::{Html, Selector};
use url::Url;

/// Extracts notice links from a rendered listing page.
///
/// The listing selectors are tried in order and the first one that matches
/// anything supplies the rows. Each row contributes one candidate if it has an
/// `href` (on a nested link, or on the row itself). Candidates keep document
/// order and are not de-duplicated. An empty vector means no notices were found.
pub fn extract_links(document: &Html, base_url: &Url, selectors: &SelectorConfig) -> Vec<LinkCandidate> {
    let chain = selectors
        .listing
        .iter()
        .filter_map(|text| match compile(text) {
            Ok(selector) => Some((text.clone(), selector)),
            Err(e) => {
                ::log::warn!("Skipping listing selector: {}", e);
                None
            }
        })
        .collect::<Vec<_>>();

    let (link_selector, title_selector) = match (compile(&selectors.link), compile(&selectors.title)) {
        (Ok(link), Ok(title)) => (link, title),
        (Err(e), _) | (_, Err(e)) => {
            ::log::warn!("Cannot extract listing links: {}", e);
            return Vec::new();
        }
    };

    let Some((matched_by, rows)) = first_match(document.root_element(), &chain) else {
        ::log::debug!("No listing selector matched");
        return Vec::new();
    };
    ::log::debug!("Listing selector {} matched {} rows", matched_by, rows.len());

    rows.into_iter()
        .filter_map(|row| {
            let source = row.select(&link_selector).next().unwrap_or(row);
            let href = source.value().attr("href").filter(|href| !href.is_empty())?;
            let url = resolve_href(base_url, href)?;
            Some(LinkCandidate::new(url, row_title(row, &title_selector)))
        })
        .collect()
}

/// Joins root-relative hrefs onto the base URL, passing anything else through
pub fn resolve_href(base_url: &Url, href: &str) -> Option<String> {
    if !href.starts_with('/') {
        return Some(href.to_string());
    }

    match base_url.join(href) {
        Ok(url) => Some(url.into()),
        Err(e) => {
            ::log::debug!("Could not resolve {} against {}: {}", href, base_url, e);
            None
        }
    }
}

fn row_title(row: scraper::ElementRef<'_>, title_selector: &Selector) -> String {
    let title = visible_text(row.select(title_selector).next().unwrap_or(row));
    if title.is_empty() {
        NO_TITLE.to_string()
    } else {
        title
    }
}
