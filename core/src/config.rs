//! Viewer configuration.

/// Collection URL of the public todo source.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com/todos";

/// Number of todo rows shown per page.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

impl Config {
    /// Point the viewer at another todo source. Blank values are ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        if !base_url.trim().is_empty() {
            self.base_url = base_url.trim().to_string();
        }
        self
    }
}
