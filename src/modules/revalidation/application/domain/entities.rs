use std::fmt;

/// Public pages invalidated on every content write, whatever changed.
pub const SECTION_PAGES: [&str; 4] = ["/about", "/contact", "/portfolio", "/experience"];

const ROOT: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageScope {
    /// The shared layout wrapping every page.
    Layout,
    Page,
}

impl PageScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageScope::Layout => "layout",
            PageScope::Page => "page",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaleMarker {
    pub path: String,
    pub scope: PageScope,
}

impl StaleMarker {
    pub fn page(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scope: PageScope::Page,
        }
    }

    pub fn layout(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scope: PageScope::Layout,
        }
    }

    /// Storage key, e.g. `page:/about`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.scope.as_str(), self.path)
    }
}

impl fmt::Display for StaleMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Whether `path` is a page this site renders and therefore can be marked.
pub fn is_known_page(path: &str) -> bool {
    path == ROOT || SECTION_PAGES.contains(&path)
}

/// Everything to mark stale after `path` changed, in marking order.
///
/// Root layout, root page, the path itself, then every section page.
/// Unknown paths are never marked, so the set of markers stays bounded.
pub fn revalidation_targets(path: &str) -> Vec<StaleMarker> {
    let mut targets = vec![StaleMarker::layout(ROOT), StaleMarker::page(ROOT)];

    let candidates = std::iter::once(path)
        .filter(|p| is_known_page(p))
        .chain(SECTION_PAGES.iter().copied());

    for candidate in candidates {
        let marker = StaleMarker::page(candidate);
        if !targets.contains(&marker) {
            targets.push(marker);
        }
    }

    targets
}

/// Paths echoed back to the caller: `/`, the requested path, then the sections.
pub fn reported_paths(path: &str) -> Vec<String> {
    [ROOT, path]
        .into_iter()
        .chain(SECTION_PAGES.iter().copied())
        .map(str::to_string)
        .collect()
}
