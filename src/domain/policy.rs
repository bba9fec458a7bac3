// SPDX-License-Identifier: Apache-2.0

//! Opaque RBAC policy records forwarded by authorization parsers.

use crate::domain::config_tree::ConfigTree;
use serde::{Deserialize, Serialize};

/// An RBAC rule implied by an exporter's runtime requirements.
///
/// The rule's contents are defined by the authorization subsystem that
/// consumes it; this crate only carries sequences of policies from an
/// [`AuthzParser`](crate::ports::AuthzParser) to the caller and never
/// inspects or mutates them. The payload is kept as a [`ConfigTree`] so any
/// rule shape the authorization subsystem defines can pass through unchanged.
///
/// # Examples
///
/// ```
/// use expcfg::domain::{ConfigTree, DynamicRolePolicy};
///
/// let rule = ConfigTree::from_yaml("verbs: [get, list]\nresources: [pods]").unwrap();
/// let policy = DynamicRolePolicy::new(rule.clone());
/// assert_eq!(policy.rule(), &rule);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DynamicRolePolicy(ConfigTree);

impl DynamicRolePolicy {
    /// Wraps a rule payload produced by an authorization parser.
    pub fn new(rule: ConfigTree) -> Self {
        DynamicRolePolicy(rule)
    }

    /// Returns the opaque rule payload.
    pub fn rule(&self) -> &ConfigTree {
        &self.0
    }

    /// Consumes the policy and returns the rule payload.
    pub fn into_rule(self) -> ConfigTree {
        self.0
    }
}

impl From<ConfigTree> for DynamicRolePolicy {
    fn from(rule: ConfigTree) -> Self {
        DynamicRolePolicy(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_passes_through_unchanged() {
        let rule = ConfigTree::from_yaml("apiGroups: ['']\nresources: [nodes]").unwrap();
        let policy = DynamicRolePolicy::new(rule.clone());
        assert_eq!(policy.rule(), &rule);
        assert_eq!(policy.into_rule(), rule);
    }

    #[test]
    fn test_from_config_tree() {
        let policy = DynamicRolePolicy::from(ConfigTree::from("anything"));
        assert_eq!(policy.rule().as_str(), Some("anything"));
    }
}
