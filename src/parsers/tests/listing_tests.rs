use crate::config::SelectorConfig;
use crate::parsers::listing::{extract_links, resolve_href};
use crate::results::LinkCandidate;
use scraper::Html;
use url::Url;

fn base_url() -> Url {
    Url::parse("https://kaist-cs.notion.site/da7b6b2e21b64bc684c69297de57e52f").unwrap()
}

fn links(html: &str) -> Vec<LinkCandidate> {
    extract_links(&Html::parse_document(html), &base_url(), &SelectorConfig::default())
}

#[test]
fn test_collection_items_skip_missing_href() {
    let html = r#"<html><body>
        <div class="notion-collection-item">
            <a href="/Notice-One-111"><div class="notion-page-block-title">Notice One</div></a>
        </div>
        <div class="notion-collection-item">
            <span class="notion-page-block-title">No link here</span>
        </div>
        <div class="notion-collection-item">
            <a href="https://kaist-cs.notion.site/Notice-Two-222">
                <div class="notion-page-block-title"> Notice Two </div>
            </a>
        </div>
    </body></html>"#;

    let result = links(html);
    assert_eq!(result.len(), 2);
    assert_eq!(
        result[0],
        LinkCandidate::new(
            "https://kaist-cs.notion.site/Notice-One-111".to_string(),
            "Notice One".to_string()
        )
    );
    assert_eq!(result[1].url, "https://kaist-cs.notion.site/Notice-Two-222");
    assert_eq!(result[1].title, "Notice Two");
}

#[test]
fn test_falls_back_to_page_blocks() {
    let html = r#"<html><body>
        <div class="notion-selectable notion-page-block">
            <a href="/Page-A">Page A</a>
        </div>
        <div class="notion-page-block">
            <a href="/Not-Selectable">ignored</a>
        </div>
    </body></html>"#;

    let result = links(html);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].url, "https://kaist-cs.notion.site/Page-A");
    assert_eq!(result[0].title, "Page A");
}

#[test]
fn test_first_matching_selector_wins() {
    // Page blocks are ignored once a collection item has matched
    let html = r#"<html><body>
        <div class="notion-collection-item"><a href="/From-Collection">Collection</a></div>
        <div class="notion-selectable notion-page-block"><a href="/From-Block">Block</a></div>
    </body></html>"#;

    let result = links(html);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Collection");
}

#[test]
fn test_falls_back_to_plain_links() {
    let html = r##"<html><body>
        <a href="/Plain-Link">Plain link</a>
        <a href="#top">No slash</a>
        <a href="https://example.com/elsewhere">External</a>
    </body></html>"##;

    let result = links(html);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].url, "https://kaist-cs.notion.site/Plain-Link");
    assert_eq!(result[0].title, "Plain link");
    assert_eq!(result[1].url, "https://example.com/elsewhere");
}

#[test]
fn test_no_matches_yields_empty() {
    assert!(links("<html><body><p>Nothing to see</p></body></html>").is_empty());
    assert!(links("").is_empty());
}

#[test]
fn test_empty_title_uses_placeholder() {
    let html = r#"<html><body>
        <div class="notion-collection-item"><a href="/Untitled"><img src="x.png"></a></div>
    </body></html>"#;

    let result = links(html);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "No Title");
}

#[test]
fn test_title_falls_back_to_row_text() {
    let html = r#"<html><body>
        <div class="notion-collection-item"><a href="/Row">Row</a> <span>text</span></div>
    </body></html>"#;

    let result = links(html);
    assert_eq!(result[0].title, "Rowtext");
}

#[test]
fn test_duplicates_are_kept() {
    let html = r#"<html><body>
        <div class="notion-collection-item"><a href="/Same">First</a></div>
        <div class="notion-collection-item"><a href="/Same">Second</a></div>
    </body></html>"#;

    let result = links(html);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].url, result[1].url);
    assert_eq!(result[0].title, "First");
    assert_eq!(result[1].title, "Second");
}

#[test]
fn test_invalid_listing_selector_is_skipped() {
    let selectors = SelectorConfig {
        listing: vec!["div[".to_string(), ".notion-collection-item".to_string()],
        ..SelectorConfig::default()
    };
    let html = r#"<html><body><div class="notion-collection-item"><a href="/A">A</a></div></body></html>"#;

    let result = extract_links(&Html::parse_document(html), &base_url(), &selectors);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_resolve_href() {
    let base = base_url();

    let resolved = resolve_href(&base, "/Some-Notice-abc").unwrap();
    assert_eq!(resolved, "https://kaist-cs.notion.site/Some-Notice-abc");
    assert!(Url::parse(&resolved).is_ok());

    assert_eq!(resolve_href(&base, "relative/path").unwrap(), "relative/path");
    assert_eq!(
        resolve_href(&base, "https://other.site/x").unwrap(),
        "https://other.site/x"
    );
}

#[test]
fn test_empty_href_is_skipped() {
    let html = r#"<html><body>
        <div class="notion-collection-item"><a href="">Empty</a></div>
        <div class="notion-collection-item"><a href="/Kept">Kept</a></div>
    </body></html>"#;

    let result = links(html);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Kept");
}

#[test]
fn test_protocol_relative_href_takes_base_scheme() {
    let html = r#"<html><body>
        <div class="notion-collection-item"><a href="//cdn.x/y">P</a></div>
    </body></html>"#;

    assert_eq!(
        links(html),
        vec![LinkCandidate::new("https://cdn.x/y".to_string(), "P".to_string())]
    );
}
