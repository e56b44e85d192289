//! Menu table - the static content of the sidebar
//!
//! The built-in table is embedded at compile time from `data/menu.json`.
//! A table names its default-expanded section by key rather than position so
//! entries can be reordered freely.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};
use crate::node::MenuNode;

const BUILTIN_TABLE: &str = include_str!("../data/menu.json");

/// Validated menu content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTable {
    /// Key of the section shown expanded before any route narrows it
    pub default_section: String,
    pub items: Vec<MenuNode>,
}

impl MenuTable {
    /// Build a table from in-memory nodes
    pub fn new(default_section: impl Into<String>, items: Vec<MenuNode>) -> MenuResult<Self> {
        let table = Self {
            default_section: default_section.into(),
            items,
        };
        table.validate()?;
        Ok(table)
    }

    /// The table shipped with the crate
    pub fn builtin() -> MenuResult<Self> {
        Self::from_json(BUILTIN_TABLE)
    }

    pub fn from_json(json: &str) -> MenuResult<Self> {
        let table: MenuTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_file(path: impl AsRef<Path>) -> MenuResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading menu table from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Index of the default-expanded section among top-level items
    pub fn default_index(&self) -> MenuResult<usize> {
        self.items
            .iter()
            .position(|item| item.key.as_deref() == Some(self.default_section.as_str()))
            .ok_or_else(|| MenuError::DefaultSectionNotFound(self.default_section.clone()))
    }

    /// Every internal path in the tree, in menu order
    pub fn internal_paths(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .flat_map(|item| item.walk())
            .filter_map(|node| node.path.as_deref())
    }

    fn validate(&self) -> MenuResult<()> {
        if self.items.is_empty() {
            return Err(MenuError::EmptyTable);
        }

        let mut keys = HashSet::new();
        for item in &self.items {
            if let Some(key) = item.key.as_deref() {
                if !keys.insert(key) {
                    return Err(MenuError::DuplicateKey(key.to_string()));
                }
            }
        }

        for node in self.items.iter().flat_map(|item| item.walk()) {
            if node.path.is_some() && node.external_url.is_some() {
                return Err(MenuError::ConflictingLinks(node.title.clone()));
            }
        }

        let default_index = self.default_index()?;
        if !self.items[default_index].is_category() {
            return Err(MenuError::DefaultSectionNotExpandable(self.default_section.clone()));
        }
        Ok(())
    }

    /// Top-level nodes with the default section expanded
    pub(crate) fn initial_items(&self) -> MenuResult<Vec<MenuNode>> {
        let default_index = self.default_index()?;
        let mut items = self.items.clone();
        items[default_index].is_opened = true;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MenuNode> {
        vec![
            MenuNode::page("简介", "/").with_key("introduction"),
            MenuNode::category("概览", vec![MenuNode::page("第一步", "/first-steps")])
                .with_key("overview"),
            MenuNode::category("技术", vec![MenuNode::page("配置", "/techniques/configuration")])
                .with_key("techniques"),
        ]
    }

    #[test]
    fn test_builtin_table_loads() {
        let table = MenuTable::builtin().unwrap();
        assert_eq!(table.default_section, "overview");
        assert_eq!(table.default_index().unwrap(), 1);
        assert_eq!(table.items[1].title, "概览");
        assert!(table.items.iter().any(|item| item.title == "GraphQL"));
    }

    #[test]
    fn test_builtin_external_links_have_no_path() {
        let table = MenuTable::builtin().unwrap();
        let api = table.items.iter().find(|item| item.title == "API参考").unwrap();
        assert!(api.path.is_none());
        assert!(api.external_url.is_some());
        assert!(!api.is_category());
    }

    #[test]
    fn test_initial_items_open_default_only() {
        let table = MenuTable::new("overview", sample()).unwrap();
        let items = table.initial_items().unwrap();
        let opened: Vec<_> = items.iter().filter(|i| i.is_opened).map(|i| i.title.as_str()).collect();
        assert_eq!(opened, vec!["概览"]);
    }

    #[test]
    fn test_missing_default_section() {
        let err = MenuTable::new("recipes", sample()).unwrap_err();
        assert!(matches!(err, MenuError::DefaultSectionNotFound(key) if key == "recipes"));
    }

    #[test]
    fn test_default_section_must_have_children() {
        let err = MenuTable::new("introduction", sample()).unwrap_err();
        assert!(matches!(err, MenuError::DefaultSectionNotExpandable(_)));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut items = sample();
        items.push(MenuNode::page("技术 2", "/t2").with_key("techniques"));
        let err = MenuTable::new("overview", items).unwrap_err();
        assert!(matches!(err, MenuError::DuplicateKey(key) if key == "techniques"));
    }

    #[test]
    fn test_conflicting_links_rejected() {
        let mut items = sample();
        let mut bad = MenuNode::page("示例", "/sample");
        bad.external_url = Some("https://github.com/nestjs/nest".to_string());
        items[1].children.push(bad);
        let err = MenuTable::new("overview", items).unwrap_err();
        assert!(matches!(err, MenuError::ConflictingLinks(title) if title == "示例"));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(MenuTable::new("overview", vec![]), Err(MenuError::EmptyTable)));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(MenuTable::from_json("{"), Err(MenuError::ParseError(_))));
    }

    #[test]
    fn test_internal_paths_in_menu_order() {
        let table = MenuTable::new("overview", sample()).unwrap();
        let paths: Vec<_> = table.internal_paths().collect();
        assert_eq!(paths, vec!["/", "/first-steps", "/techniques/configuration"]);
    }
}
