//! Template engine boundary.
//!
//! Thin wrapper over minijinja with a filesystem template loader, the
//! only seam through which pages are rendered.

use std::path::Path;

use minijinja::{path_loader, Environment, ErrorKind};
use serde_json::{Map, Value};

use crate::builder::BuildError;
use crate::helpers::HelperRegistry;

/// Template used when a sitemap node does not name its own.
pub const DEFAULT_PAGE_TEMPLATE: &str = "page.html";

/// Template engine resolving named templates against a search directory.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine bound to a template directory, with the registry's
    /// exposed helpers installed as template globals.
    pub fn new(templates_dir: &Path, helpers: &HelperRegistry) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_dir));
        helpers.install(&mut env);
        Self { env }
    }

    /// Render a named template with the given parameters.
    pub fn render(&self, name: &str, params: &Map<String, Value>) -> Result<String, BuildError> {
        let template = self.env.get_template(name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                BuildError::TemplateNotFound(name.to_string())
            } else {
                BuildError::TemplateRender {
                    template: name.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        template.render(params).map_err(|e| BuildError::TemplateRender {
            template: name.to_string(),
            message: e.to_string(),
        })
    }
}
