use serde::{Deserialize, Serialize};

use crate::{
    config::DblpConfig,
    parser::Descriptor
};

// one entry of the written publications file. field order is the YAML key order.

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Publication {
    pub title: String,
    pub year: String,
    pub venue: String,
    pub link: String
}

impl Publication {
    pub fn new(title: String, year: String, venue: String, link: String) -> Self {
        Publication {
            title,
            year,
            venue,
            link
        }
    }

    /// Flattens a descriptor. Missing fields become empty strings; the venue
    /// is the proceedings title when it has any text, otherwise the journal.
    pub fn from_descriptor(descriptor: &Descriptor, config: &DblpConfig) -> Self {
        // pick on the raw text and trim afterwards: a blank booktitle still wins.
        let venue = descriptor.booktitle.as_ref()
            .filter(|booktitle| !booktitle.is_empty())
            .or(descriptor.journal.as_ref())
            .cloned();

        Self::new(
            trimmed(&descriptor.title),
            trimmed(&descriptor.year),
            trimmed(&venue),
            config.record_url(descriptor.key.as_deref())
        )
    }
}

fn trimmed(field: &Option<String>) -> String {
    field.as_deref()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
