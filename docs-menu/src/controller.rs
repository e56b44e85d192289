//! Menu state controller
//!
//! Keeps one top-level section expanded in step with the current route. The
//! synchronization pass is best-effort: whenever the route does not identify a
//! section it leaves the tree alone and reports why.

use crate::error::MenuResult;
use crate::node::MenuNode;
use crate::route::RouteSnapshot;
use crate::table::MenuTable;

/// Why a synchronization pass left the tree untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The snapshot has no matched child route
    NoChildRoute,
    /// Neither a nested segment nor a lazily loaded route
    NotSectionRoute,
    /// The matched route consumed no URL segment
    NoSegment,
    /// No top-level entry is named after the segment
    NoMatchingSection,
}

/// Result of [`MenuStateController::synchronize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Expanded { index: usize, title: String },
    Unchanged(SkipReason),
}

impl SyncOutcome {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded { .. })
    }
}

/// Owns the sidebar tree and its expansion state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStateController {
    items: Vec<MenuNode>,
    default_index: usize,
    is_sidebar_opened: bool,
    sync_passes: u64,
}

impl MenuStateController {
    /// Build the controller with the table's default section expanded
    pub fn new(table: &MenuTable) -> MenuResult<Self> {
        Ok(Self {
            items: table.initial_items()?,
            default_index: table.default_index()?,
            is_sidebar_opened: true,
            sync_passes: 0,
        })
    }

    pub fn builtin() -> MenuResult<Self> {
        Self::new(&MenuTable::builtin()?)
    }

    pub fn items(&self) -> &[MenuNode] {
        &self.items
    }

    pub fn default_index(&self) -> usize {
        self.default_index
    }

    pub fn is_sidebar_opened(&self) -> bool {
        self.is_sidebar_opened
    }

    pub fn set_sidebar_opened(&mut self, opened: bool) {
        self.is_sidebar_opened = opened;
    }

    /// Number of synchronization passes run so far
    pub fn sync_passes(&self) -> u64 {
        self.sync_passes
    }

    /// Titles of the currently expanded categories
    pub fn expanded_titles(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.is_category() && item.is_opened)
            .map(|item| item.title.as_str())
            .collect()
    }

    /// Flip a category open or closed. Leaves and unknown indexes are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) if item.is_category() => {
                item.is_opened = !item.is_opened;
                true
            }
            _ => false,
        }
    }

    /// Expand the section named by the first URL segment of `snapshot` and
    /// collapse the default section.
    pub fn synchronize(&mut self, snapshot: &RouteSnapshot) -> SyncOutcome {
        self.sync_passes += 1;
        let outcome = self.apply(snapshot);
        log::trace!("Menu sync for {}: {:?}", snapshot.url, outcome);
        outcome
    }

    fn apply(&mut self, snapshot: &RouteSnapshot) -> SyncOutcome {
        let Some(child) = snapshot.first_child() else {
            return SyncOutcome::Unchanged(SkipReason::NoChildRoute);
        };
        if !child.has_nested_segment() && !child.is_lazy() {
            return SyncOutcome::Unchanged(SkipReason::NotSectionRoute);
        }
        let Some(segment) = child.first_segment() else {
            return SyncOutcome::Unchanged(SkipReason::NoSegment);
        };
        let Some(index) = self.items.iter().position(|item| item.matches_segment(segment)) else {
            return SyncOutcome::Unchanged(SkipReason::NoMatchingSection);
        };

        self.items[index].is_opened = true;
        self.items[self.default_index].is_opened = false;

        SyncOutcome::Expanded {
            index,
            title: self.items[index].title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{ActivatedRoute, RouteConfig};

    fn controller() -> MenuStateController {
        MenuStateController::builtin().unwrap()
    }

    fn lazy(segment: &str) -> RouteSnapshot {
        RouteSnapshot::new(
            format!("/{segment}"),
            Some(ActivatedRoute::new(&[segment], Some(RouteConfig::lazy(segment)))),
        )
    }

    fn nested(first: &str, second: &str) -> RouteSnapshot {
        RouteSnapshot::new(
            format!("/{first}/{second}"),
            Some(ActivatedRoute::new(&[first, second], Some(RouteConfig::eager(format!("{first}/{second}"))))),
        )
    }

    fn title_of(ctl: &MenuStateController, title: &str) -> bool {
        ctl.items().iter().find(|item| item.title == title).unwrap().is_opened
    }

    #[test]
    fn test_default_section_starts_opened() {
        let ctl = controller();
        assert_eq!(ctl.default_index(), 1);
        assert_eq!(ctl.expanded_titles(), vec!["概览"]);
        assert!(ctl.is_sidebar_opened());
    }

    #[test]
    fn test_techniques_opens_and_collapses_default() {
        let mut ctl = controller();
        let outcome = ctl.synchronize(&nested("techniques", "mvc"));
        assert_eq!(outcome, SyncOutcome::Expanded { index: 3, title: "技术".to_string() });
        assert!(title_of(&ctl, "技术"));
        assert!(!ctl.items()[1].is_opened);
    }

    #[test]
    fn test_root_route_is_noop() {
        let mut ctl = controller();
        let before = ctl.items().to_vec();
        let root = RouteSnapshot::new("/", Some(ActivatedRoute::new(&[], Some(RouteConfig::eager("")))));
        assert_eq!(ctl.synchronize(&root), SyncOutcome::Unchanged(SkipReason::NotSectionRoute));
        assert_eq!(ctl.items(), before.as_slice());
    }

    #[test]
    fn test_single_eager_segment_is_noop() {
        let mut ctl = controller();
        let before = ctl.items().to_vec();
        let page = RouteSnapshot::new(
            "/first-steps",
            Some(ActivatedRoute::new(&["first-steps"], Some(RouteConfig::eager("first-steps")))),
        );
        assert!(!ctl.synchronize(&page).is_expanded());
        assert_eq!(ctl.items(), before.as_slice());
    }

    #[test]
    fn test_missing_child_is_noop() {
        let mut ctl = controller();
        let outcome = ctl.synchronize(&RouteSnapshot::default());
        assert_eq!(outcome, SyncOutcome::Unchanged(SkipReason::NoChildRoute));
    }

    #[test]
    fn test_lazy_route_without_segments_is_noop() {
        let mut ctl = controller();
        let snapshot = RouteSnapshot::new("/", Some(ActivatedRoute::new(&[], Some(RouteConfig::lazy("")))));
        assert_eq!(ctl.synchronize(&snapshot), SyncOutcome::Unchanged(SkipReason::NoSegment));
    }

    #[test]
    fn test_unknown_section_is_noop() {
        let mut ctl = controller();
        ctl.synchronize(&lazy("security"));
        let before = ctl.items().to_vec();
        let outcome = ctl.synchronize(&nested("nonexistent-section", "page"));
        assert_eq!(outcome, SyncOutcome::Unchanged(SkipReason::NoMatchingSection));
        assert_eq!(ctl.items(), before.as_slice());
    }

    #[test]
    fn test_graphql_matches_title_case_insensitively() {
        let mut ctl = controller();
        let outcome = ctl.synchronize(&lazy("graphql"));
        assert!(matches!(outcome, SyncOutcome::Expanded { ref title, .. } if title == "GraphQL"));
        assert_eq!(ctl.expanded_titles(), vec!["GraphQL"]);
    }

    #[test]
    fn test_default_section_match_ends_closed() {
        let mut ctl = controller();
        ctl.synchronize(&nested("techniques", "mvc"));
        let outcome = ctl.synchronize(&nested("overview", "anything"));
        assert_eq!(outcome, SyncOutcome::Expanded { index: 1, title: "概览".to_string() });
        assert!(!ctl.items()[1].is_opened);
        assert_eq!(ctl.expanded_titles(), vec!["技术"]);
    }

    #[test]
    fn test_leaf_key_segment_is_noop() {
        let mut ctl = controller();
        let before = ctl.items().to_vec();
        let outcome = ctl.synchronize(&nested("deployment", "extra"));
        assert_eq!(outcome, SyncOutcome::Unchanged(SkipReason::NoMatchingSection));
        assert_eq!(ctl.items(), before.as_slice());
    }

    #[test]
    fn test_synchronize_is_idempotent() {
        let mut once = controller();
        once.synchronize(&lazy("websockets"));

        let mut twice = controller();
        twice.synchronize(&lazy("websockets"));
        twice.synchronize(&lazy("websockets"));

        assert_eq!(once.items(), twice.items());
        assert_eq!(twice.sync_passes(), 2);
    }

    #[test]
    fn test_previous_match_stays_open() {
        let mut ctl = controller();
        ctl.synchronize(&lazy("techniques"));
        ctl.synchronize(&lazy("security"));
        assert_eq!(ctl.expanded_titles(), vec!["技术", "安全"]);
    }

    #[test]
    fn test_toggle_categories_only() {
        let mut ctl = controller();
        assert!(ctl.toggle(1));
        assert!(!ctl.items()[1].is_opened);
        assert!(ctl.toggle(1));
        assert!(ctl.items()[1].is_opened);
        // "简介" is a plain page
        assert!(!ctl.toggle(0));
        assert!(!ctl.toggle(999));
    }

    #[test]
    fn test_sidebar_flag_is_pass_through() {
        let mut ctl = controller();
        ctl.set_sidebar_opened(false);
        assert!(!ctl.is_sidebar_opened());
        let before = ctl.items().to_vec();
        ctl.set_sidebar_opened(true);
        assert_eq!(ctl.items(), before.as_slice());
    }
}
