//! Recursive site builder.
//!
//! Walks the sitemap tree depth-first, rendering one output file per node.
//! Children are rendered before their parent so a section page always sees
//! the completed summaries of its children in its `contents` parameter.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use serde_json::{json, Map, Value};

use strata_sitemap::{Page, SitemapNode};

use crate::cleanup::clear_output;
use crate::config::BuildConfig;
use crate::helpers::HelperRegistry;
use crate::templates::{TemplateEngine, DEFAULT_PAGE_TEMPLATE};

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to clear output directory: {0}")]
    Cleanup(String),

    #[error("Failed to read page data: {path}: {message}")]
    DataRead { path: String, message: String },

    #[error("Failed to parse page data: {path}: {message}")]
    DataParse { path: String, message: String },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Failed to render template {template}: {message}")]
    TemplateRender { template: String, message: String },

    #[error("Failed to write output: {0}")]
    OutputWrite(String),
}

/// What a rendered node hands back to its parent: the material for one
/// entry in the parent's contents listing.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LevelSummary {
    /// Display title of the node
    pub title: String,

    /// Site-root-relative path with a leading slash
    pub link: String,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages rendered
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Site builder driving the whole tree walk.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a builder; the registry's exposed helpers become template
    /// globals.
    pub fn new(config: BuildConfig, helpers: &HelperRegistry) -> Self {
        let templates = TemplateEngine::new(&config.templates_dir, helpers);
        Self { config, templates }
    }

    /// Build the site: clear stale output, walk the sitemap, emit statics.
    ///
    /// Any failure aborts the run; a failed run's output directory must be
    /// treated as stale.
    pub fn build(&self, root: &SitemapNode) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        clear_output(&self.config.output_dir, &self.config.permanent_paths)?;

        let mut pages = 0;
        self.walk(root, &mut pages)?;

        self.emit_statics();

        Ok(BuildResult {
            pages,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Walk the whole sitemap from its root, rendering every level.
    ///
    /// `rendered` receives one increment per written page. Returns the
    /// root's own summary.
    pub fn walk(
        &self,
        root: &SitemapNode,
        rendered: &mut usize,
    ) -> Result<LevelSummary, BuildError> {
        self.render_level(root, "", rendered)
    }

    /// Render one sitemap node and, post-order, everything below it.
    fn render_level(
        &self,
        node: &SitemapNode,
        previous_level_path: &str,
        rendered: &mut usize,
    ) -> Result<LevelSummary, BuildError> {
        let level_path = join_level(previous_level_path, node.route());
        let link = format!("/{level_path}");
        let template = node.template().unwrap_or(DEFAULT_PAGE_TEMPLATE);

        tracing::debug!(
            "rendering {} -> {}/index.html (template {})",
            link,
            level_path,
            template
        );

        // Children first: a section's contents listing needs every child's
        // completed summary. Sibling order is the sitemap's order.
        let additional = match node {
            SitemapNode::Section(section) => {
                let mut contents = Vec::with_capacity(section.children.len());
                for child in &section.children {
                    let summary = self.render_level(child, &level_path, rendered)?;
                    contents.push(json!({ "title": summary.title, "link": summary.link }));
                }
                let mut params = Map::new();
                params.insert("contents".to_string(), Value::Array(contents));
                params
            }
            SitemapNode::Page(page) => self.page_params(&level_path, page)?,
        };

        // Navigational defaults, then globals, then node-specific params;
        // later entries win on key collision.
        let mut params = Map::new();
        params.insert("title".to_string(), Value::from(node.title()));
        params.insert("tab_title".to_string(), Value::from(node.tab_title()));
        params.insert(
            "previous_page".to_string(),
            Value::from(format!("/{previous_level_path}")),
        );
        params.insert(
            "static_url".to_string(),
            Value::from(self.config.static_url.as_str()),
        );
        for (key, value) in &self.config.global_params {
            params.insert(key.clone(), value.clone());
        }
        for (key, value) in additional {
            params.insert(key, value);
        }

        let level_dir = self.config.output_dir.join(&level_path);
        fs::create_dir_all(&level_dir).map_err(|e| {
            BuildError::OutputWrite(format!("cannot create {}: {}", level_dir.display(), e))
        })?;

        let html = self.templates.render(template, &params)?;

        let output_path = level_dir.join("index.html");
        fs::write(&output_path, html).map_err(|e| {
            BuildError::OutputWrite(format!("cannot write {}: {}", output_path.display(), e))
        })?;

        *rendered += 1;

        Ok(LevelSummary {
            title: node.title().to_string(),
            link,
        })
    }

    /// Resolve render parameters for a leaf page from its data file.
    fn page_params(&self, level_path: &str, page: &Page) -> Result<Map<String, Value>, BuildError> {
        let mut params = Map::new();

        let Some(data_type) = page.data_type.as_deref() else {
            return Ok(params);
        };

        let data_path = self.config.data_dir.join(level_path);
        let raw = fs::read_to_string(&data_path).map_err(|e| BuildError::DataRead {
            path: data_path.display().to_string(),
            message: e.to_string(),
        })?;

        let data = if data_type == "json" {
            serde_json::from_str(&raw).map_err(|e| BuildError::DataParse {
                path: data_path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Value::String(raw)
        };

        params.insert("data".to_string(), data);
        Ok(params)
    }

    /// Reserved seam for copying static assets into the output root.
    ///
    /// Static files conventionally live under a permanent path and survive
    /// cleanup, so nothing is copied today.
    fn emit_statics(&self) {
        tracing::debug!("no static assets to emit");
    }
}

/// Join a parent level path with a route segment.
fn join_level(previous: &str, route: &str) -> String {
    if previous.is_empty() {
        route.to_string()
    } else if route.is_empty() {
        previous.to_string()
    } else {
        format!("{previous}/{route}")
    }
}
