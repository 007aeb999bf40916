//! Build configuration.

use std::path::PathBuf;

use serde_json::{Map, Value};

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Base directory for page data files
    pub data_dir: PathBuf,

    /// Output directory for generated files
    pub output_dir: PathBuf,

    /// Template search directory
    pub templates_dir: PathBuf,

    /// Static asset directory (reserved for future static-file handling)
    pub static_dir: PathBuf,

    /// URL prefix substituted into every page as `static_url`
    pub static_url: String,

    /// Extra parameters merged into every page's render parameters;
    /// node-specific keys win on collision
    pub global_params: Map<String, Value>,

    /// Root-level basenames the output cleanup leaves untouched
    pub permanent_paths: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("docs"),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("docs/static"),
            static_url: String::new(),
            global_params: Map::new(),
            permanent_paths: vec!["CNAME".to_string(), "static".to_string()],
        }
    }
}
