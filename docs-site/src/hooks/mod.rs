pub mod use_menu_state;
pub mod use_site_navigation;

pub use use_menu_state::{use_menu_state, MenuState};
pub use use_site_navigation::{use_site_navigation, SiteNavigation};
