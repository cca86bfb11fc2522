use async_trait::async_trait;

/// Produces the rendered HTML of a page
#[async_trait]
pub trait Renderer {
    /// Render `url` and return its HTML once dynamic content has settled.
    ///
    /// `None` means the page could not be loaded; the caller decides whether
    /// that skips the page or aborts the run.
    async fn render(&mut self, url: &str) -> Option<String>;
}
