use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use docs_menu::prelude::{MenuConfig, MenuResult, MenuStateController, RouteTable};
use docs_menu::router::Router as NavRouter;

/// Router and menu template shared by the layout and the sidebar
#[derive(Clone)]
pub struct SiteNavigation {
    pub router: NavRouter,
    pub menu: Rc<MenuStateController>,
}

impl PartialEq for SiteNavigation {
    fn eq(&self, other: &Self) -> bool {
        self.router == other.router && Rc::ptr_eq(&self.menu, &other.menu)
    }
}

/// Environment configuration on native builds; the browser has no environment.
fn site_config() -> MenuResult<MenuConfig> {
    #[cfg(not(target_arch = "wasm32"))]
    return MenuConfig::from_env();
    #[cfg(target_arch = "wasm32")]
    return Ok(MenuConfig::default());
}

impl SiteNavigation {
    pub fn load(url: &str) -> MenuResult<Self> {
        Self::load_with(&site_config()?, url)
    }

    pub fn load_with(config: &MenuConfig, url: &str) -> MenuResult<Self> {
        let table = config.load_table()?;
        let mut menu = MenuStateController::new(&table)?;
        menu.set_sidebar_opened(config.sidebar_opened);
        let router = NavRouter::new(RouteTable::from_menu(&table), url)?;
        Ok(Self {
            router,
            menu: Rc::new(menu),
        })
    }
}

/// Build the site navigation once for the lifetime of the layout
pub fn use_site_navigation(url: String) -> Option<SiteNavigation> {
    use_hook(move || match SiteNavigation::load(&url) {
        Ok(navigation) => Some(navigation),
        Err(e) => {
            tracing::error!("Failed to load the sidebar menu: {e}");
            None
        }
    })
}
