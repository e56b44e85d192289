//! Menu tree nodes

use serde::{Deserialize, Serialize};

use crate::route::normalize_path;

/// One entry of the sidebar tree.
///
/// Top-level entries are either leaves (an internal page or an external link)
/// or categories with `children`. Only categories carry a meaningful
/// `is_opened` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    /// Stable identifier of a top-level entry, e.g. `"techniques"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Display label
    pub title: String,
    /// Internal route, e.g. `"/techniques/mvc"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// External link, rendered outside the router
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Expansion state of a category
    #[serde(default)]
    pub is_opened: bool,
    /// Presentation-only "new" badge
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

/// Where a node points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLink<'a> {
    Internal(&'a str),
    External(&'a str),
    None,
}

impl MenuNode {
    /// Leaf pointing at an internal route
    pub fn page(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: None,
            title: title.into(),
            path: Some(path.into()),
            external_url: None,
            is_opened: false,
            is_new: false,
            children: Vec::new(),
        }
    }

    /// Leaf pointing outside the site
    pub fn external(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: None,
            title: title.into(),
            path: None,
            external_url: Some(url.into()),
            is_opened: false,
            is_new: false,
            children: Vec::new(),
        }
    }

    /// Category holding `children`
    pub fn category(title: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            key: None,
            title: title.into(),
            path: None,
            external_url: None,
            is_opened: false,
            is_new: false,
            children,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn opened(mut self, is_opened: bool) -> Self {
        self.is_opened = is_opened;
        self
    }

    pub fn is_category(&self) -> bool {
        !self.children.is_empty()
    }

    /// Internal path wins if a node somehow has both; tables reject that at load time.
    pub fn link(&self) -> MenuLink<'_> {
        match (self.path.as_deref(), self.external_url.as_deref()) {
            (Some(path), _) => MenuLink::Internal(path),
            (None, Some(url)) => MenuLink::External(url),
            (None, None) => MenuLink::None,
        }
    }

    /// Case-insensitive comparison of a URL segment against the title, or
    /// against the key of a category. Keys of leaves never match.
    pub fn matches_segment(&self, segment: &str) -> bool {
        let segment = segment.to_lowercase();
        if self.title.to_lowercase() == segment {
            return true;
        }
        if !self.is_category() {
            return false;
        }
        self.key
            .as_deref()
            .is_some_and(|key| key.to_lowercase() == segment)
    }

    /// True if this node's internal path is the given URL.
    pub fn is_active(&self, url: &str) -> bool {
        match self.path.as_deref() {
            Some(path) => normalize_path(path) == normalize_path(url),
            None => false,
        }
    }

    /// True if this node or one of its descendants is the given URL.
    pub fn contains_active(&self, url: &str) -> bool {
        self.is_active(url) || self.children.iter().any(|child| child.contains_active(url))
    }

    /// Depth-first walk over this node and its descendants
    pub fn walk(&self) -> Box<dyn Iterator<Item = &MenuNode> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(|c| c.walk())))
    }
}
