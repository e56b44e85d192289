//! Docs Menu - sidebar navigation state for the documentation site
//!
//! The sidebar shows a fixed tree of sections loaded from an embedded JSON
//! table. One section starts expanded; every completed navigation expands the
//! section named by the first URL segment and collapses that default one.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use docs_menu::prelude::*;
//!
//! let table = MenuTable::builtin().unwrap();
//! let router = Router::new(RouteTable::from_menu(&table), "/").unwrap();
//! let menu = Rc::new(RefCell::new(MenuStateController::new(&table).unwrap()));
//!
//! let _binding = MenuBinding::attach(Rc::clone(&menu), &router);
//! router.navigate("/techniques/mvc").unwrap();
//!
//! assert_eq!(menu.borrow().expanded_titles(), vec!["技术"]);
//! ```

pub mod binding;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod node;
pub mod route;
pub mod router;
pub mod table;

// Re-export common types
pub mod prelude {
    pub use crate::binding::{MenuBinding, SyncTarget};
    pub use crate::config::MenuConfig;
    pub use crate::controller::{MenuStateController, SkipReason, SyncOutcome};
    pub use crate::error::{MenuError, MenuResult, RouteError};
    pub use crate::events::{NavigationEnd, NavigationEvent, NavigationId};
    pub use crate::node::{MenuLink, MenuNode};
    pub use crate::route::{ActivatedRoute, RouteConfig, RouteSnapshot, RouteTable, UrlSegment};
    pub use crate::router::{NavigationSource, RouteSource, Router, Subscription};
    pub use crate::table::MenuTable;
}
