use regex::Regex;
use std::sync::OnceLock;

/// Maximum number of characters of the title kept in a notice filename
pub const SLUG_MAX_CHARS: usize = 30;

/// Current local time in the format stored in `crawled_at`
pub fn crawl_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Convert a notice title to a filename-safe slug
pub fn title_slug(title: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let unsafe_chars = UNSAFE.get_or_init(|| Regex::new(r#"[\s/\\:*?"<>|\x00-\x1f]"#).unwrap());

    unsafe_chars
        .replace_all(title, "_")
        .chars()
        .take(SLUG_MAX_CHARS)
        .collect()
}

/// Filename for the notice at the given 1-based position
pub fn notice_file_name(index: usize, title: &str) -> String {
    format!("notice_{}_{}.json", index, title_slug(title))
}
