//! Downloads a researcher's publication list from dblp and writes a flat
//! YAML summary (title, year, venue, link) of it.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod model;
pub mod parser;
pub mod storage;

pub use config::DblpConfig;
pub use error::{FetchError, Result};
pub use fetcher::{HttpSource, PublicationFetcher, XmlSource};
pub use model::Publication;
