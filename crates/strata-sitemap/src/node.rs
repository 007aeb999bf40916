//! Sitemap node types.
//!
//! The on-disk sitemap distinguishes sections from leaf pages only by the
//! presence of a `children` array. That field-presence check is resolved
//! once during deserialization into a tagged [`SitemapNode`], so the rest
//! of the generator branches on the variant instead of re-inspecting raw
//! JSON.

use serde::Deserialize;

/// One level of the site tree: a section with children or a leaf page.
#[derive(Debug, Clone, PartialEq)]
pub enum SitemapNode {
    Section(Section),
    Page(Page),
}

/// A sitemap node with children, rendered as an index of its descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Path segment, joined with the parent's path
    pub route: String,

    /// Display title
    pub title: String,

    /// Browser tab title override
    pub tab_title: Option<String>,

    /// Template name override
    pub template: Option<String>,

    /// Ordered child nodes
    pub children: Vec<SitemapNode>,
}

/// A leaf sitemap node, backed by an optional page data file.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Path segment, joined with the parent's path
    pub route: String,

    /// Display title
    pub title: String,

    /// Browser tab title override
    pub tab_title: Option<String>,

    /// Template name override
    pub template: Option<String>,

    /// How to interpret the page data file: "json" parses it, any other
    /// value binds the raw text, absent means no data file at all
    pub data_type: Option<String>,
}

impl SitemapNode {
    /// Path segment of this node.
    pub fn route(&self) -> &str {
        match self {
            Self::Section(s) => &s.route,
            Self::Page(p) => &p.route,
        }
    }

    /// Display title of this node.
    pub fn title(&self) -> &str {
        match self {
            Self::Section(s) => &s.title,
            Self::Page(p) => &p.title,
        }
    }

    /// Tab title, falling back to the display title.
    pub fn tab_title(&self) -> &str {
        match self {
            Self::Section(s) => s.tab_title.as_deref().unwrap_or(&s.title),
            Self::Page(p) => p.tab_title.as_deref().unwrap_or(&p.title),
        }
    }

    /// Template name override, if any.
    pub fn template(&self) -> Option<&str> {
        match self {
            Self::Section(s) => s.template.as_deref(),
            Self::Page(p) => p.template.as_deref(),
        }
    }
}

/// Raw sitemap entry as it appears on disk, before section/page resolution.
#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    route: String,
    title: String,
    #[serde(default)]
    tab_title: Option<String>,
    #[serde(default)]
    template: Option<String>,
    #[serde(default)]
    data_type: Option<String>,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
}

impl From<RawNode> for SitemapNode {
    fn from(raw: RawNode) -> Self {
        // `children` wins over page-data fields; a node carrying both is
        // treated as a section and its `data_type` is dropped.
        match raw.children {
            Some(children) => Self::Section(Section {
                route: raw.route,
                title: raw.title,
                tab_title: raw.tab_title,
                template: raw.template,
                children: children.into_iter().map(SitemapNode::from).collect(),
            }),
            None => Self::Page(Page {
                route: raw.route,
                title: raw.title,
                tab_title: raw.tab_title,
                template: raw.template,
                data_type: raw.data_type,
            }),
        }
    }
}
