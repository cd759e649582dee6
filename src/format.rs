use crate::{
    error::Result,
    model::Publication
};

pub struct Formatter;

impl Formatter {
    /// YAML sequence of publication mappings. Non-ASCII text is emitted as-is.
    pub fn to_yaml(data: &[Publication]) -> Result<String> {
        Ok(serde_yaml::to_string(data)?)
    }

    pub fn to_summary(count: usize, output_file: &str) -> String {
        format!("Saved {} publications to {}", count, output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publications() -> Vec<Publication> {
        vec![
            Publication::new(
                String::from("Über Graphen: ein Überblick"),
                String::from("2020"),
                String::from("J. Graph Theory"),
                String::from("https://dblp.org/rec/journals/jgt/Doe20")
            ),
            Publication::new(String::new(), String::new(), String::new(), String::new()),
        ]
    }

    #[test]
    fn test_yaml_round_trip() {
        let data = publications();
        let yaml = Formatter::to_yaml(&data).unwrap();
        let parsed: Vec<Publication> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_yaml_layout() {
        let yaml = Formatter::to_yaml(&publications()).unwrap();
        assert!(yaml.starts_with("- title: "));
        assert!(yaml.contains("Über Graphen"), "unicode should not be escaped: {}", yaml);
        let keys = ["title:", "year:", "venue:", "link:"]
            .map(|key| yaml.find(key).unwrap());
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_empty_list() {
        let yaml = Formatter::to_yaml(&[]).unwrap();
        let parsed: Vec<Publication> = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            Formatter::to_summary(12, "publications.yml"),
            "Saved 12 publications to publications.yml"
        );
    }
}
