pub mod config;
pub mod error;
pub mod fetch;
pub mod harvest;
pub mod links;
pub mod poem;
pub mod select;

pub use config::SiteConfig;
pub use error::{ExtractionError, FetchError, HarvestError, ParseError};
pub use harvest::{harvest, Harvester};
