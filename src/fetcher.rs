use std::path::Path;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::{
    config::DblpConfig,
    error::Result,
    model::Publication,
    parser::DblpParser,
    storage::LocalSaver
};

/// Where the raw person document comes from.
pub trait XmlSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Plain blocking GET: no timeout, no retries, error statuses are failures.
#[derive(Debug, Default)]
pub struct HttpSource {
    client: Client
}

impl XmlSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client
            .get(url)
            .send()?
            .error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

#[derive(Debug)]
pub struct PublicationFetcher<S = HttpSource> {
    config: DblpConfig,
    source: S
}

impl PublicationFetcher<HttpSource> {
    pub fn new(config: DblpConfig) -> Self {
        Self::with_source(config, HttpSource::default())
    }
}

impl<S: XmlSource> PublicationFetcher<S> {
    pub fn with_source(config: DblpConfig, source: S) -> Self {
        PublicationFetcher {
            config,
            source
        }
    }

    pub fn config(&self) -> &DblpConfig {
        &self.config
    }

    /// Downloads and flattens the publication list, in document order.
    pub fn get_publications(&self) -> Result<Vec<Publication>> {
        let url = self.config.person_xml_url();
        debug!(%url, "fetching dblp person document");
        let xml = self.source.fetch(&url)?;

        let publications = DblpParser::parse(&xml)?
            .into_iter()
            .enumerate()
            .filter_map(|(position, descriptor)| match descriptor {
                Some(descriptor) => Some(Publication::from_descriptor(&descriptor, &self.config)),
                None => {
                    debug!(position, "skipping record without descriptor");
                    None
                }
            })
            .collect::<Vec<_>>();
        info!(publications = publications.len(), "parsed publication list");
        Ok(publications)
    }

    /// Fetches, converts and writes the YAML file, returning the number of entries written.
    pub fn fetch_to_file(&self, output_path: impl AsRef<Path>) -> Result<usize> {
        let publications = self.get_publications()?;
        LocalSaver::save_publications_as_yaml(output_path, &publications)?;
        Ok(publications.len())
    }
}
