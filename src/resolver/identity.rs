//! Resolution value objects.

use serde::{Deserialize, Serialize};

/// Canonical decomposition of a module specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Name of the matching registry in the pattern table.
    pub registry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Always non-empty.
    pub pkg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    /// In-package path, one entry per non-empty segment.
    #[serde(default)]
    pub module_path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Identity {
    /// Module path joined with `/`, without a leading slash.
    pub fn module_path_string(&self) -> String {
        self.module_path.join("/")
    }
}

/// A specifier no registry accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unresolved {
    pub original_url: String,
}

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(Identity),
    Unresolved(Unresolved),
}

impl Resolution {
    pub fn unresolved(original_url: impl Into<String>) -> Self {
        Resolution::Unresolved(Unresolved {
            original_url: original_url.into(),
        })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Resolution::Resolved(identity) => Some(identity),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn into_identity(self) -> Option<Identity> {
        match self {
            Resolution::Resolved(identity) => Some(identity),
            Resolution::Unresolved(_) => None,
        }
    }

    /// Registry name, if resolved.
    pub fn registry(&self) -> Option<&str> {
        self.identity().map(|identity| identity.registry.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_json_shape() {
        let resolution = Resolution::Resolved(Identity {
            registry: "deno.land/x".into(),
            org: None,
            pkg: "oak".into(),
            ver: Some("v10.0.0".into()),
            module_path: vec!["mod.ts".into()],
            query: None,
            hash: None,
        });
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "resolved",
                "registry": "deno.land/x",
                "pkg": "oak",
                "ver": "v10.0.0",
                "modulePath": ["mod.ts"]
            })
        );
    }

    #[test]
    fn test_unresolved_json_shape() {
        let resolution = Resolution::unresolved("https://example.org/a.ts");
        let json = serde_json::to_string(&resolution).unwrap();
        assert_eq!(json, r#"{"status":"unresolved","originalUrl":"https://example.org/a.ts"}"#);

        let back: Resolution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resolution);
        assert!(!back.is_resolved());
        assert_eq!(back.registry(), None);
    }

    #[test]
    fn test_module_path_string() {
        let identity = Identity {
            registry: "std".into(),
            org: None,
            pkg: "std".into(),
            ver: None,
            module_path: vec!["http".into(), "mod.ts".into()],
            query: None,
            hash: None,
        };
        assert_eq!(identity.module_path_string(), "http/mod.ts");
    }
}
