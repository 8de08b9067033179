use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::MonbanError;

fn default_name() -> String {
    "default".to_string()
}

/// Declarative allow-list of file-path and network-domain patterns.
///
/// Every field is optional in the persisted record: a missing `name` defaults
/// to `"default"`, missing pattern lists default to empty (empty lists deny
/// everything), and `strict` defaults to `false`. A wrong-typed field fails
/// deserialization with an error naming the actual type found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default = "default_name")]
    pub name: String,
    /// Allowed file path patterns (`*`, `**`, `?` wildcards)
    #[serde(default)]
    pub allowed_file_paths: Vec<String>,
    /// Allowed domain patterns (`*.` subdomain wildcard, optional port suffix)
    #[serde(default)]
    pub allowed_domains: Vec<String>,
    /// Reserved; stored and round-tripped but not consulted by matching
    #[serde(default)]
    pub strict: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            name: default_name(),
            allowed_file_paths: Vec::new(),
            allowed_domains: Vec::new(),
            strict: false,
        }
    }
}

impl Policy {
    /// Create an empty policy with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Serialize to a 2-space-indented JSON object
    pub fn to_json(&self) -> String {
        // Serialize derives cannot fail on this struct
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialize from a JSON object, applying field defaults
    pub fn from_json(content: &str) -> Result<Self, MonbanError> {
        let policy = serde_json::from_str(content)?;
        Ok(policy)
    }

    /// Write the policy to a file as indented JSON
    pub fn save(&self, path: &Path) -> Result<(), MonbanError> {
        let mut content = self.to_json();
        content.push('\n');
        fs::write(path, content)?;
        Ok(())
    }

    /// Load a policy from a file
    pub fn load(path: &Path) -> Result<Self, MonbanError> {
        let content = fs::read_to_string(path)?;
        let policy: Policy =
            serde_json::from_str(&content).map_err(|source| MonbanError::PolicyParse {
                path: PathBuf::from(path),
                source,
            })?;
        log::debug!("loaded policy '{}' from {}", policy.name, path.display());
        Ok(policy)
    }
}
