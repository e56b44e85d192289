//! Environment configuration
//!
//! - `DOCS_MENU_TABLE`: path to a JSON menu table replacing the built-in one
//! - `DOCS_SIDEBAR_OPENED`: initial sidebar visibility (default `true`)

use std::path::PathBuf;

use crate::controller::MenuStateController;
use crate::error::{MenuError, MenuResult};
use crate::table::MenuTable;

pub const TABLE_VAR: &str = "DOCS_MENU_TABLE";
pub const SIDEBAR_VAR: &str = "DOCS_SIDEBAR_OPENED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub table_path: Option<PathBuf>,
    pub sidebar_opened: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            table_path: None,
            sidebar_opened: true,
        }
    }
}

impl MenuConfig {
    pub fn from_env() -> MenuResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MenuResult<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(TABLE_VAR).filter(|p| !p.trim().is_empty()) {
            config.table_path = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup(SIDEBAR_VAR) {
            config.sidebar_opened = parse_flag(SIDEBAR_VAR, &value)?;
        }
        Ok(config)
    }

    pub fn load_table(&self) -> MenuResult<MenuTable> {
        match &self.table_path {
            Some(path) => MenuTable::from_file(path),
            None => MenuTable::builtin(),
        }
    }

    /// Controller built from the configured table and sidebar flag
    pub fn controller(&self) -> MenuResult<MenuStateController> {
        let mut controller = MenuStateController::new(&self.load_table()?)?;
        controller.set_sidebar_opened(self.sidebar_opened);
        Ok(controller)
    }
}

fn parse_flag(name: &'static str, value: &str) -> MenuResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(MenuError::InvalidConfig {
            name,
            value: value.to_string(),
        }),
    }
}
