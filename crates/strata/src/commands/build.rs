//! Site generation driver.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use strata_sitemap::load_sitemap;
use strata_static::{BuildConfig, HelperRegistry, SiteBuilder};

/// Configuration file structure (strata.toml).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default = "default_data_dir")]
    data_dir: String,
    #[serde(default)]
    global_template_parameters: Map<String, Value>,
    #[serde(default = "default_permanent_paths")]
    permanent_paths: Vec<String>,
    #[serde(default = "default_site_dir")]
    site_dir: String,
    #[serde(default = "default_sitemap_file")]
    sitemap_file: String,
    #[serde(default = "default_static_dir")]
    static_dir: String,
    #[serde(default)]
    static_url: String,
    #[serde(default = "default_templates_dir")]
    templates_dir: String,
    /// Accepted for compatibility with older configs; helper modules are
    /// registered programmatically, not loaded from a file.
    #[serde(default)]
    template_functions_file: Option<String>,
}

fn default_data_dir() -> String {
    "data".to_string()
}
fn default_permanent_paths() -> Vec<String> {
    vec!["CNAME".to_string(), "static".to_string()]
}
fn default_site_dir() -> String {
    "docs".to_string()
}
fn default_sitemap_file() -> String {
    "sitemap.json".to_string()
}
fn default_static_dir() -> String {
    "docs/static".to_string()
}
fn default_templates_dir() -> String {
    "templates".to_string()
}

/// Load configuration from the given path.
/// Unspecified keys fall back to the fixed defaults.
fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Run the build command.
pub fn run(config_path: &Path) -> Result<()> {
    tracing::info!("Using configuration from {}", config_path.display());
    let file_config = load_config(config_path)?;

    if let Some(ref path) = file_config.template_functions_file {
        tracing::warn!(
            "template_functions_file = {:?} is ignored: helpers are registered \
             programmatically through strata_static::HelperRegistry",
            path
        );
    }

    let sitemap_file = PathBuf::from(&file_config.sitemap_file);
    tracing::info!("Loading sitemap from {}", sitemap_file.display());
    let sitemap = load_sitemap(&sitemap_file)
        .with_context(|| format!("Failed to load sitemap {}", sitemap_file.display()))?;

    let config = BuildConfig {
        data_dir: PathBuf::from(&file_config.data_dir),
        output_dir: PathBuf::from(&file_config.site_dir),
        templates_dir: PathBuf::from(&file_config.templates_dir),
        static_dir: PathBuf::from(&file_config.static_dir),
        static_url: file_config.static_url,
        global_params: file_config.global_template_parameters,
        permanent_paths: file_config.permanent_paths,
    };

    // The stock binary ships no helpers; embedding hosts register theirs
    // before building.
    let helpers = HelperRegistry::new();

    tracing::info!("Building site...");
    let result = SiteBuilder::new(config, &helpers)
        .build(&sitemap)
        .context("Build failed")?;

    tracing::info!(
        "Built {} pages in {}ms",
        result.pages,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_config_uses_fixed_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(config.data_dir, "data");
        assert_eq!(config.site_dir, "docs");
        assert_eq!(config.sitemap_file, "sitemap.json");
        assert_eq!(config.static_dir, "docs/static");
        assert_eq!(config.static_url, "");
        assert_eq!(config.templates_dir, "templates");
        assert_eq!(config.permanent_paths, vec!["CNAME", "static"]);
        assert!(config.global_template_parameters.is_empty());
        assert_eq!(config.template_functions_file, None);
    }

    #[test]
    fn user_values_win_over_defaults_per_field() {
        let config: ConfigFile = toml::from_str(
            r#"
site_dir = "public"
static_url = "/assets"

[global_template_parameters]
site_name = "Example"
year = 2026
"#,
        )
        .unwrap();

        assert_eq!(config.site_dir, "public");
        assert_eq!(config.static_url, "/assets");
        // Untouched keys keep their defaults
        assert_eq!(config.data_dir, "data");
        assert_eq!(
            config.global_template_parameters.get("site_name"),
            Some(&Value::from("Example"))
        );
        assert_eq!(
            config.global_template_parameters.get("year"),
            Some(&Value::from(2026))
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Path::new("no/such/strata.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("strata.toml");
        fs::write(&path, "site_dir = [not toml").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn run_builds_a_site_end_to_end() {
        let temp = tempdir().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("templates")).unwrap();
        fs::write(
            root.join("templates/page.html"),
            "{{ title }} ({{ previous_page }})",
        )
        .unwrap();
        fs::write(
            root.join("templates/contents.html"),
            "{% for item in contents %}{{ item.link }} {% endfor %}",
        )
        .unwrap();
        fs::create_dir_all(root.join("site")).unwrap();
        fs::write(
            root.join("sitemap.json"),
            r#"{
                "route": "",
                "title": "Home",
                "template": "contents.html",
                "children": [{"route": "about", "title": "About"}]
            }"#,
        )
        .unwrap();

        // Absolute paths so the test does not depend on the process cwd
        let config_path = root.join("strata.toml");
        fs::write(
            &config_path,
            format!(
                r#"
site_dir = "{site}"
sitemap_file = "{sitemap}"
templates_dir = "{templates}"
"#,
                site = root.join("site").display(),
                sitemap = root.join("sitemap.json").display(),
                templates = root.join("templates").display(),
            ),
        )
        .unwrap();

        run(&config_path).unwrap();

        let home = fs::read_to_string(root.join("site/index.html")).unwrap();
        assert_eq!(home, "/about ");
        let about = fs::read_to_string(root.join("site/about/index.html")).unwrap();
        assert_eq!(about, "About (/)");
    }
}
