use serde::{Deserialize, Serialize};

/// Title used when a listing entry has no extractable text
pub const NO_TITLE: &str = "No Title";

/// Date used when a detail page has no date property
pub const NO_DATE: &str = "No date";

/// Content of a record whose extraction failed
pub const EXTRACTION_ERROR_CONTENT: &str = "Error extracting content";

/// A notice link discovered on the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCandidate {
    /// Absolute URL of the detail page
    pub url: String,

    /// Display title of the entry
    pub title: String,
}

impl LinkCandidate {
    pub fn new(url: String, title: String) -> Self {
        Self { url, title }
    }
}

/// The parts of a notice read from its detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeBody {
    pub date: String,

    /// First half of a `start → finish` date range
    pub start: Option<String>,

    /// Second half of a `start → finish` date range
    pub finish: Option<String>,

    pub content: String,
    pub image_urls: Vec<String>,
}

/// One crawled notice, as written to disk
///
/// A degraded record (see [`NoticeRecord::degraded`]) carries no date or
/// images, and those keys are left out of the serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRecord {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,

    /// Local time the page was extracted, `%Y-%m-%d %H:%M:%S`
    pub crawled_at: String,

    /// Detail page URL, attached by the batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// 1-based position of the notice in the listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl NoticeRecord {
    /// Create a record from a successfully extracted body
    pub fn new(title: &str, body: NoticeBody, crawled_at: String) -> Self {
        Self {
            title: title.to_string(),
            date: Some(body.date),
            start: body.start,
            finish: body.finish,
            content: body.content,
            image_urls: Some(body.image_urls),
            crawled_at,
            url: None,
            index: None,
        }
    }

    /// Create the placeholder record for a page whose extraction failed
    pub fn degraded(title: &str, crawled_at: String) -> Self {
        Self {
            title: title.to_string(),
            date: None,
            start: None,
            finish: None,
            content: EXTRACTION_ERROR_CONTENT.to_string(),
            image_urls: None,
            crawled_at,
            url: None,
            index: None,
        }
    }

    /// Attach the page URL and listing position
    pub fn with_source(mut self, url: String, index: usize) -> Self {
        self.url = Some(url);
        self.index = Some(index);
        self
    }

    /// Whether this record came out of a failed extraction
    pub fn is_degraded(&self) -> bool {
        self.date.is_none() && self.image_urls.is_none() && self.content == EXTRACTION_ERROR_CONTENT
    }
}
