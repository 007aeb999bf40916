//! Static site generation for strata.
//!
//! Walks a sitemap tree and renders one template per node into an output
//! directory, composing child summaries into parent pages. Template helper
//! functions are supplied through an explicit [`HelperRegistry`] rather
//! than loaded at runtime.

pub mod builder;
pub mod cleanup;
pub mod config;
pub mod helpers;
pub mod templates;

pub use builder::{BuildError, BuildResult, LevelSummary, SiteBuilder};
pub use cleanup::clear_output;
pub use config::BuildConfig;
pub use helpers::{HelperRegistry, HELPER_PREFIX};
pub use templates::{TemplateEngine, DEFAULT_PAGE_TEMPLATE};
