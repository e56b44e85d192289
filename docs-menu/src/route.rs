//! Route snapshots and the route table they are resolved from

use std::collections::HashSet;

use crate::error::RouteError;
use crate::table::MenuTable;

const WILDCARD: &str = "**";

/// One path segment of a matched URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSegment {
    pub path: String,
}

impl UrlSegment {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// A route definition of the site router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// Path pattern without leading slash; `""` is the root, `"**"` matches anything
    pub path: String,
    /// Children are loaded lazily; the route matches by prefix
    pub load_children: bool,
}

impl RouteConfig {
    pub fn eager(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            load_children: false,
        }
    }

    pub fn lazy(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            load_children: true,
        }
    }

    pub fn wildcard() -> Self {
        Self::eager(WILDCARD)
    }

    fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Number of URL segments this config consumes, if it matches
    fn match_len(&self, segments: &[String]) -> Option<usize> {
        if self.path == WILDCARD {
            return Some(segments.len());
        }
        let own = self.segments();
        if own.len() > segments.len() {
            return None;
        }
        if own.iter().zip(segments).any(|(a, b)| !a.eq_ignore_ascii_case(b)) {
            return None;
        }
        if self.load_children || own.len() == segments.len() {
            Some(own.len())
        } else {
            None
        }
    }
}

/// The first matched child route of a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedRoute {
    /// Segments consumed by this route
    pub url: Vec<UrlSegment>,
    pub route_config: Option<RouteConfig>,
}

impl ActivatedRoute {
    pub fn new(segments: &[&str], route_config: Option<RouteConfig>) -> Self {
        Self {
            url: segments.iter().map(|s| UrlSegment::new(*s)).collect(),
            route_config,
        }
    }

    /// A non-empty segment exists at index 1
    pub fn has_nested_segment(&self) -> bool {
        self.url.get(1).is_some_and(|segment| !segment.path.is_empty())
    }

    pub fn is_lazy(&self) -> bool {
        self.route_config
            .as_ref()
            .is_some_and(|config| config.load_children)
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.url.first().map(|segment| segment.path.as_str())
    }
}

/// Immutable view of the resolved navigation state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSnapshot {
    /// Normalized URL the snapshot was resolved from
    pub url: String,
    pub first_child: Option<ActivatedRoute>,
}

impl RouteSnapshot {
    pub fn new(url: impl Into<String>, first_child: Option<ActivatedRoute>) -> Self {
        Self {
            url: url.into(),
            first_child,
        }
    }

    pub fn first_child(&self) -> Option<&ActivatedRoute> {
        self.first_child.as_ref()
    }
}

/// Ordered route definitions, first match wins
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
    routes: Vec<RouteConfig>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteConfig>) -> Self {
        Self { routes }
    }

    /// Routes of the documentation site, derived from its menu.
    ///
    /// Single-segment pages become eager routes, sections whose pages live
    /// below a shared first segment become lazily loaded routes, and a
    /// wildcard route catches everything else.
    pub fn from_menu(table: &MenuTable) -> Self {
        let mut seen = HashSet::new();
        let mut routes = vec![RouteConfig::eager("")];
        for path in table.internal_paths() {
            let segments = split_segments(path);
            let config = match segments.as_slice() {
                [] => continue,
                [single] => RouteConfig::eager(*single),
                [first, ..] => RouteConfig::lazy(*first),
            };
            if seen.insert(config.path.clone()) {
                routes.push(config);
            }
        }
        routes.push(RouteConfig::wildcard());
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteConfig] {
        &self.routes
    }

    pub fn resolve(&self, url: &str) -> Result<RouteSnapshot, RouteError> {
        let segments = parse_url(url)?;
        let normalized = join_segments(&segments);
        for config in &self.routes {
            if let Some(len) = config.match_len(&segments) {
                let child = ActivatedRoute {
                    url: segments[..len].iter().map(UrlSegment::new).collect(),
                    route_config: Some(config.clone()),
                };
                return Ok(RouteSnapshot::new(normalized, Some(child)));
            }
        }
        Err(RouteError::NoMatch(normalized))
    }
}

/// Split an absolute URL into its path segments, dropping query and fragment
pub fn parse_url(url: &str) -> Result<Vec<String>, RouteError> {
    if !url.starts_with('/') {
        return Err(RouteError::NotAbsolute(url.to_string()));
    }
    Ok(split_segments(url).into_iter().map(str::to_string).collect())
}

/// Canonical form of a URL path: leading slash, no trailing slash, no query
pub fn normalize_path(url: &str) -> String {
    join_segments(&split_segments(url))
}

fn split_segments(url: &str) -> Vec<&str> {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].split('/').filter(|s| !s.is_empty()).collect()
}

fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::from("/");
    let joined: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    out.push_str(&joined.join("/"));
    out
}
