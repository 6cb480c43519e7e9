use crate::config::SiteConfig;
use crate::error::FetchError;
use url::Url;

/// HTTP client bound to one site.
///
/// Every call goes to the network; nothing is cached between calls.
pub struct Fetcher {
    client: reqwest::Client,
    base: String,
}

impl Fetcher {
    pub fn new(config: &SiteConfig) -> Result<Self, FetchError> {
        Url::parse(&config.base_url).map_err(|source| FetchError::InvalidUrl {
            href: config.base_url.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| FetchError::Request {
            url: config.base_url.clone(),
            source,
        })?;

        Ok(Self {
            client,
            base: config.base_url.clone(),
        })
    }

    /// Turn a link from a page into a full URL.
    ///
    /// Site-relative paths ("/poems/1/x") are appended to the base URL as
    /// written, so a base with a path prefix keeps it. Absolute links are
    /// kept as they are.
    pub fn resolve(&self, href: &str) -> String {
        match Url::parse(href) {
            Ok(_) => href.to_string(),
            Err(_) => format!("{}{href}", self.base.trim_end_matches('/')),
        }
    }

    /// GET a page and return its body as text. Anything but 200 OK is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "GET");
        let request_err = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_err)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await.map_err(request_err)?;
        tracing::debug!(url = %url, bytes = html.len(), "Received HTML");
        Ok(html)
    }
}
