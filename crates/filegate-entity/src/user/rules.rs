//! Filesystem access rules.

use serde::{Deserialize, Serialize};

/// An allow/deny predicate over filesystem paths.
///
/// Rules are ordered; later rules override earlier ones. This core only
/// carries the data — the authorization layer consults it when dispatching
/// file operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRule {
    /// `true` to allow, `false` to deny.
    pub allow: bool,
    /// Path prefix the rule applies to.
    pub path: String,
}

impl AccessRule {
    /// Whether this rule applies to the given path.
    pub fn applies_to(&self, path: &str) -> bool {
        path.starts_with(&self.path)
    }
}

/// Evaluates an ordered rule list against a path. The last applicable rule
/// wins; a path no rule covers is allowed.
pub fn path_allowed(rules: &[AccessRule], path: &str) -> bool {
    for rule in rules.iter().rev() {
        if rule.applies_to(path) {
            return rule.allow;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deny(path: &str) -> AccessRule {
        AccessRule {
            allow: false,
            path: path.to_string(),
        }
    }

    fn allow(path: &str) -> AccessRule {
        AccessRule {
            allow: true,
            path: path.to_string(),
        }
    }

    #[test]
    fn test_uncovered_path_allowed() {
        assert!(path_allowed(&[deny("/private")], "/public/readme.md"));
    }

    #[test]
    fn test_deny_prefix() {
        let rules = [deny("/private")];
        assert!(!path_allowed(&rules, "/private/secrets.txt"));
    }

    #[test]
    fn test_last_applicable_rule_wins() {
        let rules = [deny("/projects"), allow("/projects/public")];
        assert!(!path_allowed(&rules, "/projects/internal/plan.md"));
        assert!(path_allowed(&rules, "/projects/public/site.html"));
    }
}
