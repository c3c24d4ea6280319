//! Route resolution for the application.
//!
//! The table knows two paths: the root, which is never a terminal view and
//! always redirects, and the canonical path, which mounts the homepage.
//! Everything else resolves to the not-found view.
//!
//! Redirects are expressed as an on-enter [`Transition::Replace`] so the view
//! layer only has to perform the history replace, never decide on it.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

pub const ROOT_PATH: &str = "/";
/// Where the homepage is mounted. The router's `Homepage` route shares it.
pub const CANONICAL_PATH: &str = "/v1";

/// How the redirector picks the path it replaces the root with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectPolicy {
    /// Always replace with the canonical path, whatever target was requested.
    #[default]
    Canonical,
    /// Replace with the given target. The root itself is never honoured
    /// since it would redirect to itself; the canonical path is used instead.
    HonorTarget(String),
}

/// A terminal view the router can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Homepage,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect { to: String },
    Homepage,
    NotFound { path: String },
}

/// What happens when a path becomes the active route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Render(View),
    /// Replace the current history entry; runs once after the first render.
    Replace { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    canonical: String,
    policy: RedirectPolicy,
}

/// Upper bound on redirect hops when settling a path.
const MAX_REDIRECTS: usize = 4;

/// Strips the query string and fragment and drops trailing slashes.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

impl RouteTable {
    pub fn new(canonical: impl Into<String>, policy: RedirectPolicy) -> Self {
        Self {
            canonical: canonical.into(),
            policy,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(CANONICAL_PATH, config.redirect.clone())
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn policy(&self) -> &RedirectPolicy {
        &self.policy
    }

    /// The path the root redirects to under the current policy.
    pub fn redirect_target(&self) -> &str {
        match &self.policy {
            RedirectPolicy::Canonical => self.canonical.as_str(),
            RedirectPolicy::HonorTarget(target)
                if target.starts_with('/') && normalize(target) != ROOT_PATH =>
            {
                target.as_str()
            }
            RedirectPolicy::HonorTarget(_) => self.canonical.as_str(),
        }
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        match normalize(path) {
            ROOT_PATH => Resolution::Redirect {
                to: self.redirect_target().to_string(),
            },
            p if p == self.canonical => Resolution::Homepage,
            _ => Resolution::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// The on-enter action for `path` becoming the active route.
    pub fn enter(&self, path: &str) -> Transition {
        match self.resolve(path) {
            Resolution::Redirect { to } => Transition::Replace {
                from: path.to_string(),
                to,
            },
            Resolution::Homepage => Transition::Render(View::Homepage),
            Resolution::NotFound { .. } => Transition::Render(View::NotFound),
        }
    }

    /// Follows redirects from `path` until a view renders, returning the
    /// final path and the view mounted there.
    pub fn settle(&self, path: &str) -> (String, View) {
        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            match self.enter(&current) {
                Transition::Render(view) => return (current, view),
                Transition::Replace { to, .. } => current = to,
            }
        }
        (current, View::NotFound)
    }

    /// Whether `path` is routed by this table, ignoring query and fragment.
    pub fn is_declared(&self, path: &str) -> bool {
        let path = normalize(path);
        path == ROOT_PATH || path == self.canonical
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/v1/"), "/v1");
        assert_eq!(normalize("/v1//"), "/v1");
        assert_eq!(normalize("/?from=mail"), "/");
        assert_eq!(
            normalize("/conference-summary?conference=ICLR&year=2025"),
            "/conference-summary"
        );
        assert_eq!(normalize("/motivation#why"), "/motivation");
    }

    #[test]
    fn test_root_redirects_to_canonical() {
        let table = RouteTable::default();
        assert_eq!(
            table.resolve("/"),
            Resolution::Redirect {
                to: "/v1".to_string()
            }
        );
        assert_eq!(
            table.enter("/"),
            Transition::Replace {
                from: "/".to_string(),
                to: "/v1".to_string()
            }
        );
    }

    #[test]
    fn test_root_redirect_is_idempotent() {
        let table = RouteTable::default();
        let first = table.settle("/");
        let second = table.settle("/");
        assert_eq!(first, ("/v1".to_string(), View::Homepage));
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonical_renders_homepage() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("/v1"), Resolution::Homepage);
        assert_eq!(table.enter("/v1/"), Transition::Render(View::Homepage));
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        let table = RouteTable::default();
        for path in ["/papers", "/motivation", "/v1/nested", "/v2"] {
            assert_eq!(
                table.resolve(path),
                Resolution::NotFound {
                    path: path.to_string()
                }
            );
            assert_eq!(table.enter(path), Transition::Render(View::NotFound));
        }
    }

    #[test]
    fn test_canonical_policy_ignores_target() {
        let table = RouteTable::new("/v1", RedirectPolicy::Canonical);
        assert_eq!(table.redirect_target(), "/v1");
    }

    #[test]
    fn test_honor_target_policy() {
        let table = RouteTable::new("/v1", RedirectPolicy::HonorTarget("/motivation".into()));
        assert_eq!(table.redirect_target(), "/motivation");
        assert_eq!(
            table.settle("/"),
            ("/motivation".to_string(), View::NotFound)
        );
    }

    #[test]
    fn test_honor_target_never_loops_on_root() {
        for target in ["/", "/?again", "relative"] {
            let table = RouteTable::new("/v1", RedirectPolicy::HonorTarget(target.into()));
            assert_eq!(table.redirect_target(), "/v1");
            assert_eq!(table.settle("/"), ("/v1".to_string(), View::Homepage));
        }
    }

    #[test]
    fn test_declared_paths() {
        let table = RouteTable::default();
        assert!(table.is_declared("/"));
        assert!(table.is_declared("/v1"));
        assert!(table.is_declared("/v1?tab=upcoming"));
        assert!(!table.is_declared("/papers"));
        assert!(!table.is_declared("/conference-summary?conference=ICLR&year=2025"));
    }
}
