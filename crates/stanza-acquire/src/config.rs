use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const BASE_URL: &str = "https://www.poetryfoundation.org";

/// Everything that ties the scraper to one site's markup.
///
/// Class markers follow `getElementsByClassName` rules: a marker holding
/// several space-separated classes matches elements that carry all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root, without a trailing slash.
    pub base_url: String,
    /// Heading style of the poem title.
    pub title_marker: String,
    /// Plain link style of the poet byline.
    pub poet_marker: String,
    /// Flex container holding the poem body.
    pub body_marker: String,
    /// Underlined inline links on a poet's page.
    pub link_marker: String,
    /// Segment that must appear in a link for it to be a poem page.
    pub poem_path_marker: String,
    /// Links containing this are magazine poems with a different layout.
    pub magazine_marker: String,
    pub user_agent: String,
    /// Per-request timeout; `None` or 0 waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            title_marker: "type-gamma".to_string(),
            poet_marker: "link-underline-off".to_string(),
            body_marker: "mb-6 flex flex-col gap-12 md:mb-0".to_string(),
            link_marker: "link-underline-on".to_string(),
            poem_path_marker: "/poems/".to_string(),
            magazine_marker: "poetrymagazine".to_string(),
            user_agent: concat!("stanza/", env!("CARGO_PKG_VERSION"), " (poem scraper)").to_string(),
            timeout_secs: Some(30),
        }
    }
}

impl SiteConfig {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|&secs| secs > 0).map(Duration::from_secs)
    }

    /// `{base}/poets/{slug}`
    pub fn poet_url(&self, slug: &str) -> String {
        format!("{}/poets/{slug}", self.base_url.trim_end_matches('/'))
    }

    /// Whether a link points at a poem page this scraper can read.
    pub fn is_poem_link(&self, href: &str) -> bool {
        href.contains(&self.poem_path_marker) && !href.contains(&self.magazine_marker)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read site config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse site config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
