use regex::Regex;

/// Regex filter over URLs found in a page
///
/// Exclude patterns take precedence over include patterns. With no include
/// patterns every URL that is not excluded passes.
#[derive(Debug, Default)]
pub struct UrlFilter {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Create a new URL filter from include and exclude patterns
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self, regex::Error> {
        let include_regexes = include_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_regexes = exclude_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            include_regexes,
            exclude_regexes,
        })
    }

    /// Determine if a URL should be kept
    pub fn allows(&self, url: &str) -> bool {
        if self.exclude_regexes.iter().any(|regex| regex.is_match(url)) {
            return false;
        }

        self.include_regexes.is_empty() || self.include_regexes.iter().any(|regex| regex.is_match(url))
    }
}
