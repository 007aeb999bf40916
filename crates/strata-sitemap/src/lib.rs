//! Sitemap tree model for the strata site generator.
//!
//! This crate provides the declarative site description: a tree of sections
//! and leaf pages, loaded from a JSON sitemap file and resolved into a
//! tagged node type at load time.

pub mod loader;
pub mod node;

pub use loader::{load_sitemap, SitemapError};
pub use node::{Page, Section, SitemapNode};
