//! Menu preview - prints the sidebar state after visiting a sequence of URLs
//!
//! Usage: `menu-preview [URL]...`
//!
//! The first URL is treated as a direct load, the rest as navigations.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use docs_menu::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("docs_menu=info")).init();

    let config = MenuConfig::from_env().context("reading configuration")?;
    let table = config.load_table().context("loading menu table")?;

    let mut urls = std::env::args().skip(1);
    let start = urls.next().unwrap_or_else(|| "/".to_string());

    let router = Router::new(RouteTable::from_menu(&table), &start)
        .with_context(|| format!("resolving {start}"))?;
    let mut controller = MenuStateController::new(&table)?;
    controller.set_sidebar_opened(config.sidebar_opened);
    let menu = Rc::new(RefCell::new(controller));
    let binding = MenuBinding::attach(Rc::clone(&menu), &router);
    log::info!("Loaded {start}: {:?}", binding.initial_outcome());

    for url in urls {
        match router.navigate(&url) {
            Ok(Some(id)) => log::info!("Navigation {id} to {url} completed"),
            Ok(None) => log::info!("Already at {url}"),
            Err(e) => log::warn!("Navigation to {url} failed: {e}"),
        }
    }

    let menu = menu.borrow();
    println!("=== Sidebar at {} ===", router.url());
    println!("sidebar opened: {}\n", menu.is_sidebar_opened());
    print_tree(menu.items(), &router.url());

    binding.detach();
    Ok(())
}

fn print_tree(items: &[MenuNode], current: &str) {
    for item in items {
        let marker = match (item.is_category(), item.is_opened) {
            (true, true) => "▼",
            (true, false) => "▶",
            (false, _) => " ",
        };
        println!("{marker} {}{}", item.title, describe(item, current));
        if item.is_category() && item.is_opened {
            for child in &item.children {
                println!("    {}{}", child.title, describe(child, current));
            }
        }
    }
}

fn describe(node: &MenuNode, current: &str) -> String {
    let badge = if node.is_new { " [new]" } else { "" };
    let active = if node.is_active(current) { " <" } else { "" };
    match node.link() {
        MenuLink::Internal(path) => format!("  ({path}){badge}{active}"),
        MenuLink::External(url) => format!("  -> {url}{badge}"),
        MenuLink::None => badge.to_string(),
    }
}
