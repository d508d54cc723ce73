use serde::Serialize;

/// A single visited page. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    url: String,
}

impl Page {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Substring match on the url. An empty keyword matches every page.
    pub fn matches(&self, keyword: &str) -> bool {
        self.url.contains(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_matches_substring() {
        let page = Page::new("https://news.example.com");

        assert!(page.matches("news"));
        assert!(page.matches("example.com"));
        assert!(page.matches(""));
        assert!(!page.matches("sports"));
    }
}
