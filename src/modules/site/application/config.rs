/// Site-wide settings resolved at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute origin used for sitemap locations, without a trailing slash.
    pub base_url: String,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url }
    }
}
