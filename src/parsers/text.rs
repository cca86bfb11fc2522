use scraper::ElementRef;

/// Separator placed between text blocks of a notice body
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Visible text of an element: every text node trimmed and concatenated
pub fn visible_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Joins non-empty text blocks with a blank line between them
pub fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
