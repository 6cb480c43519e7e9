use crate::config::SiteConfig;
use crate::error::HarvestError;
use crate::fetch::Fetcher;
use crate::links;
use crate::poem;
use stanza_export::ExportReport;
use stanza_model::{poet_slug, PoemRecord};
use std::path::Path;

/// Scrape every poem linked from a poet's page and export them to CSV.
///
/// `poet` is a display name such as "Walt Whitman"; the CSV lands in
/// `output_dir` as `{slug}.csv`. The first failure ends the run and nothing
/// is written.
pub async fn harvest(poet: &str, config: SiteConfig, output_dir: &Path) -> Result<ExportReport, HarvestError> {
    Harvester::new(config)?.run(poet, output_dir).await
}

/// Drives one poet through fetch, link extraction, poem extraction and export.
pub struct Harvester {
    config: SiteConfig,
    fetcher: Fetcher,
}

impl Harvester {
    pub fn new(config: SiteConfig) -> Result<Self, HarvestError> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    pub async fn run(&self, poet: &str, output_dir: &Path) -> Result<ExportReport, HarvestError> {
        let poems = self.collect(poet).await?;
        let report = stanza_export::export(&poems, output_dir)?;
        Ok(report)
    }

    /// Fetch and extract every poem for `poet`, one page at a time.
    pub async fn collect(&self, poet: &str) -> Result<Vec<PoemRecord>, HarvestError> {
        let poet_url = self.config.poet_url(&poet_slug(poet));
        tracing::info!(poet = %poet, url = %poet_url, "Fetching poet page");
        let html = self.fetcher.fetch(&poet_url).await?;

        let candidates = links::extract_poem_links(&html, &self.config.link_marker).map_err(|source| {
            HarvestError::Parse {
                url: poet_url.clone(),
                source,
            }
        })?;
        tracing::info!(links = candidates.len(), "Found link candidates");

        let mut poems = Vec::new();
        for link in candidates {
            if !self.config.is_poem_link(&link.href) {
                tracing::debug!(href = %link.href, text = %link.text.trim(), "Skipping non-poem link");
                continue;
            }

            let url = self.fetcher.resolve(&link.href);
            let html = self.fetcher.fetch(&url).await?;

            let poem = poem::extract_poem(&html, &self.config).map_err(|source| HarvestError::Extraction {
                url: url.clone(),
                source,
            })?;
            poem.validate().map_err(|source| HarvestError::Validation {
                url: url.clone(),
                source,
            })?;

            tracing::info!(
                title = %poem.title.trim(),
                poet = %poem.poet.trim(),
                lines = poem.body.lines().count(),
                "Extracted poem"
            );
            poems.push(poem);
        }

        tracing::info!(poet = %poet, poems = poems.len(), "Collected poems");
        Ok(poems)
    }
}
