use dotenvy;
use std::env;

// replace with your own dblp pid (search for yourself on dblp.org).
const DEFAULT_PID: &str = "09/5889";
const DEFAULT_BASE_URL: &str = "https://dblp.org";
const DEFAULT_OUTPUT_FILE: &str = "publications.yml";
const ENV_FILE: &str = "fetch_dblp.env";

macro_rules! person_xml_url {
    () => { "{}/pid/{}.xml" }
}

macro_rules! record_url {
    () => { "{}/rec/{}" }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DblpConfig {
    pub pid: String,
    pub base_url: String,
    pub output_file: String,
}

impl DblpConfig {
    pub fn default() -> Self {
        Self::new(DEFAULT_PID, DEFAULT_BASE_URL, DEFAULT_OUTPUT_FILE)
    }

    pub fn new(pid: &str, base_url: &str, output_file: &str) -> Self {
        DblpConfig {
            pid: pid.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            output_file: output_file.to_string()
        }
    }

    /// Builds the config from `fetch_dblp.env` and the process environment.
    ///
    /// Every variable is optional; unset ones keep the compiled-in defaults,
    /// and a missing env file is not an error.
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(ENV_FILE);
        let pid = get_env_string_or("DBLP_PID", DEFAULT_PID);
        let base_url = get_env_string_or("DBLP_BASE_URL", DEFAULT_BASE_URL);
        let output_file = get_env_string_or("OUTPUT_FILE", DEFAULT_OUTPUT_FILE);
        Self::new(&pid, &base_url, &output_file)
    }

    pub fn person_xml_url(&self) -> String {
        format!(person_xml_url!(), self.base_url, self.pid)
    }

    /// Canonical record page for a dblp key, or an empty string without one.
    pub fn record_url(&self, key: Option<&str>) -> String {
        match key {
            Some(key) if !key.is_empty() => format!(record_url!(), self.base_url, key),
            _ => String::new()
        }
    }
}

fn get_env_string_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|var| !var.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
