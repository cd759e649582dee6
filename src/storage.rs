use std::{
    fs::File,
    io::Write,
    path::Path
};

use tracing::info;

use crate::{
    error::Result,
    format::Formatter,
    model::Publication
};

// Utils to store publication files on local device.
pub struct LocalSaver;

impl LocalSaver {
    /// Overwrites `fname` with the YAML document. The document is rendered
    /// before the file is touched, so a serialization failure leaves it as is.
    pub fn save_publications_as_yaml(fname: impl AsRef<Path>, data: &[Publication]) -> Result<()> {
        let fname = fname.as_ref();
        let yaml = Formatter::to_yaml(data)?;
        let mut file = File::create(fname)?;
        file.write_all(yaml.as_bytes())?;
        file.flush()?;
        info!(path = %fname.display(), publications = data.len(), "wrote publications file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::error::FetchError;

    fn publication(title: &str) -> Publication {
        Publication::new(title.to_string(), String::from("2001"), String::from("V"), String::new())
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("publications.yml");
        fs::write(&path, "stale content that is much longer than the new document\n".repeat(20)).unwrap();

        LocalSaver::save_publications_as_yaml(&path, &[publication("Fresh")]).unwrap();

        let parsed: Vec<Publication> = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, vec![publication("Fresh")]);
    }

    #[test]
    fn test_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("publications.yml");
        let err = LocalSaver::save_publications_as_yaml(&path, &[]).unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
