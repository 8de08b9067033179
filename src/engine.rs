use std::fmt;

use serde::Serialize;

use crate::policy::{Policy, domain, path};

/// Kind of resource an access check is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    File,
    Network,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::File => write!(f, "file"),
            ResourceType::Network => write!(f, "network"),
        }
    }
}

/// Result of a single access check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessDecision {
    pub allowed: bool,
    pub resource_type: ResourceType,
    /// The resource exactly as requested (for network checks this keeps any
    /// `:port` suffix that matching itself ignores)
    pub resource_path: String,
    /// Empty when the access is allowed
    pub reason: String,
}

impl AccessDecision {
    fn allow(resource_type: ResourceType, resource_path: &str) -> Self {
        Self {
            allowed: true,
            resource_type,
            resource_path: resource_path.to_string(),
            reason: String::new(),
        }
    }

    fn deny(resource_type: ResourceType, resource_path: &str, reason: &str) -> Self {
        Self {
            allowed: false,
            resource_type,
            resource_path: resource_path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Evaluates access requests against one policy.
///
/// Holds no state beyond the borrowed policy; every check is a pure function
/// of the policy and the requested resource, so one engine can be shared
/// freely across threads.
#[derive(Debug)]
pub struct PolicyEngine<'a> {
    policy: &'a Policy,
}

impl<'a> PolicyEngine<'a> {
    pub fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    /// Decide whether `path` may be accessed. First matching pattern wins.
    pub fn check_file_access(&self, path: &str) -> AccessDecision {
        if self.policy.allowed_file_paths.is_empty() {
            return AccessDecision::deny(
                ResourceType::File,
                path,
                "No file paths allowed in policy",
            );
        }

        for pattern in &self.policy.allowed_file_paths {
            if path::matches(path, pattern) {
                log::debug!("file {path} allowed by pattern {pattern}");
                return AccessDecision::allow(ResourceType::File, path);
            }
        }

        AccessDecision::deny(ResourceType::File, path, "Path not allowed")
    }

    /// Decide whether a connection to `target` (`host` or `host:port`) may be
    /// made. The port is discarded before matching, so patterns cannot
    /// discriminate by port.
    pub fn check_network_access(&self, target: &str) -> AccessDecision {
        if self.policy.allowed_domains.is_empty() {
            return AccessDecision::deny(
                ResourceType::Network,
                target,
                "No domains allowed in policy",
            );
        }

        let host = target.split_once(':').map_or(target, |(host, _)| host);

        for pattern in &self.policy.allowed_domains {
            if domain::matches(host, pattern) {
                log::debug!("network target {target} allowed by pattern {pattern}");
                return AccessDecision::allow(ResourceType::Network, target);
            }
        }

        AccessDecision::deny(ResourceType::Network, target, "Domain not allowed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(paths: &[&str], domains: &[&str]) -> Policy {
        Policy {
            name: "test".to_string(),
            allowed_file_paths: paths.iter().map(|s| s.to_string()).collect(),
            allowed_domains: domains.iter().map(|s| s.to_string()).collect(),
            strict: false,
        }
    }

    #[test]
    fn empty_path_list_denies_everything() {
        let policy = policy(&[], &[]);
        let engine = PolicyEngine::new(&policy);

        let decision = engine.check_file_access("/any/path");
        assert!(!decision.allowed);
        assert_eq!(decision.reason, "No file paths allowed in policy");
        assert_eq!(decision.resource_type, ResourceType::File);
        assert_eq!(decision.resource_path, "/any/path");
    }

    #[test]
    fn empty_domain_list_denies_everything() {
        let policy = policy(&[], &[]);
        let engine = PolicyEngine::new(&policy);

        let decision = engine.check_network_access("any.com");
        assert!(!decision.allowed);
        assert_eq!(decision.reason, "No domains allowed in policy");
        assert_eq!(decision.resource_type, ResourceType::Network);
    }

    #[test]
    fn first_matching_path_pattern_allows() {
        let policy = policy(&["/etc/*", "/home/user/**"], &[]);
        let engine = PolicyEngine::new(&policy);

        let decision = engine.check_file_access("/home/user/notes.txt");
        assert!(decision.allowed);
        assert!(decision.reason.is_empty());
    }

    #[test]
    fn unmatched_path_is_denied_with_reason() {
        let policy = policy(&["/home/user/*"], &[]);
        let engine = PolicyEngine::new(&policy);

        let decision = engine.check_file_access("/etc/passwd");
        assert!(!decision.allowed);
        assert_eq!(decision.reason, "Path not allowed");
    }

    #[test]
    fn port_is_ignored_when_matching_domains() {
        let policy = policy(&[], &["api.example.com"]);
        let engine = PolicyEngine::new(&policy);

        assert!(engine.check_network_access("api.example.com:443").allowed);
        assert!(engine.check_network_access("api.example.com:8080").allowed);
        assert!(!engine.check_network_access("evil.com:443").allowed);
    }

    #[test]
    fn decision_keeps_the_original_target() {
        let policy = policy(&[], &["api.example.com"]);
        let engine = PolicyEngine::new(&policy);

        let decision = engine.check_network_access("api.example.com:8080");
        assert_eq!(decision.resource_path, "api.example.com:8080");
    }

    #[test]
    fn unmatched_domain_is_denied_with_reason() {
        let policy = policy(&[], &["allowed.com"]);
        let engine = PolicyEngine::new(&policy);

        let decision = engine.check_network_access("evil.com");
        assert!(!decision.allowed);
        assert_eq!(decision.reason, "Domain not allowed");
    }

    #[test]
    fn combined_policy_scenario() {
        let policy = policy(&["/data/**"], &["api.example.com", "*.trusted.io"]);
        let engine = PolicyEngine::new(&policy);

        assert!(engine.check_file_access("/data/file.txt").allowed);
        assert!(!engine.check_file_access("/other/file.txt").allowed);
        assert!(engine.check_network_access("api.example.com").allowed);
        assert!(engine.check_network_access("app.trusted.io").allowed);
        assert!(!engine.check_network_access("evil.com").allowed);
    }

    #[test]
    fn strict_flag_does_not_change_matching() {
        let mut strict_policy = policy(&["/allowed/*"], &["allowed.com"]);
        strict_policy.strict = true;
        let engine = PolicyEngine::new(&strict_policy);

        assert!(engine.check_file_access("/allowed/file.txt").allowed);
        assert!(!engine.check_file_access("/unknown/path").allowed);
        assert!(engine.check_network_access("allowed.com").allowed);
        assert!(!engine.check_network_access("unknown.com").allowed);
    }

    #[test]
    fn decision_serializes_with_lowercase_resource_type() {
        let policy = policy(&[], &[]);
        let engine = PolicyEngine::new(&policy);

        let decision = engine.check_network_access("evil.com");
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["allowed"], false);
        assert_eq!(json["resource_type"], "network");
        assert_eq!(json["resource_path"], "evil.com");
        assert_eq!(json["reason"], "No domains allowed in policy");
    }
}
