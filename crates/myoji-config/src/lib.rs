use std::env;
use std::path::PathBuf;

/// Placeholder in the search URI template replaced by the surname.
pub const MYOJI_PLACEHOLDER: &str = "{myoji}";

const DEFAULT_URI_BASE: &str = "https://myoji-yurai.net/searchResult.htm?myojiKanji={myoji}";
const DEFAULT_CACHE_DIR: &str = "cache";

/// Runtime configuration, built once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search URI template containing [`MYOJI_PLACEHOLDER`].
    pub search_uri_template: String,
    /// Base directory the cache store writes under.
    pub cache_root: PathBuf,
}

impl Config {
    /// Build from the process environment, falling back to the production
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let search_uri_template =
            env::var("MYOJI_URI_BASE").unwrap_or_else(|_| DEFAULT_URI_BASE.to_string());

        let cache_root = env::var("MYOJI_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR));

        Config {
            search_uri_template,
            cache_root,
        }
    }

    /// Query URI for one surname, substituted verbatim into the template.
    pub fn search_uri(&self, myoji: &str) -> String {
        self.search_uri_template.replace(MYOJI_PLACEHOLDER, myoji)
    }
}
