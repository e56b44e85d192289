pub mod menu;
pub mod menu_link;
pub mod nav_section;

pub use menu::Menu;
pub use menu_link::MenuLinkItem;
pub use nav_section::NavSection;
