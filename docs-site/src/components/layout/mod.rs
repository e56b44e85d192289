pub mod docs_layout;
pub mod sidebar;

pub use docs_layout::DocsLayout;
pub use sidebar::Sidebar;
