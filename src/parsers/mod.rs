pub mod listing;
pub mod notice;
pub mod text;

#[cfg(test)]
mod tests;

use crate::error::ExtractError;
use scraper::{ElementRef, Selector};

/// Compile a CSS selector, keeping the offending text in the error
pub fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Evaluates an ordered fallback chain of selectors below `scope`.
///
/// Returns the selector text and matched elements of the first selector that
/// matches at least one element, or `None` when every selector comes up empty.
pub fn first_match<'a, 's>(
    scope: ElementRef<'a>,
    chain: &'s [(String, Selector)],
) -> Option<(&'s str, Vec<ElementRef<'a>>)> {
    chain.iter().find_map(|(text, selector)| {
        let matched = scope.select(selector).collect::<Vec<_>>();
        if matched.is_empty() {
            ::log::debug!("Selector {} matched nothing, trying next", text);
            None
        } else {
            Some((text.as_str(), matched))
        }
    })
}
