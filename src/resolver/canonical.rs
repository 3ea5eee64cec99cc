//! Canonicalization of raw captures into an [`Identity`].
//!
//! # Responsibilities
//! - Split the `mod` capture into non-empty segments
//! - Apply the registry's default version and fixed package
//! - Drop `org` for flat registries
//! - Pass query and fragment through as captured

use crate::pattern::RawMatch;
use crate::registry::{OrgShape, Registry};
use crate::resolver::identity::Identity;

/// Build the identity for a validated match.
pub fn canonicalize(registry: &Registry, raw: RawMatch) -> Identity {
    let RawMatch {
        mut captures,
        query,
        fragment,
    } = raw;

    let pkg = non_empty(captures.remove("pkg"))
        .or_else(|| registry.fixed_package().map(str::to_owned))
        .unwrap_or_default();
    let ver = non_empty(captures.remove("ver"))
        .or_else(|| registry.default_version().map(str::to_owned));
    let org = match registry.org_shape() {
        OrgShape::Flat => None,
        OrgShape::Namespaced => non_empty(captures.remove("org")),
    };
    let module_path = captures
        .get("mod")
        .map(|path| split_module_path(path))
        .unwrap_or_default();

    Identity {
        registry: registry.name().to_owned(),
        org,
        pkg,
        ver,
        module_path,
        query,
        hash: fragment,
    }
}

/// Split on `/`, dropping empty segments.
pub fn split_module_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{PatternTable, RegistrySpec};

    fn raw(pairs: &[(&str, &str)]) -> RawMatch {
        RawMatch {
            captures: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            ..RawMatch::default()
        }
    }

    #[test]
    fn test_split_module_path() {
        assert_eq!(split_module_path("http/mod.ts"), vec!["http", "mod.ts"]);
        assert_eq!(split_module_path("/a//b/"), vec!["a", "b"]);
        assert!(split_module_path("").is_empty());
    }

    #[test]
    fn test_flat_registry_drops_org() {
        let table = PatternTable::build(vec![
            RegistrySpec::new("flat").url("https://flat.example/:org/:pkg"),
        ])
        .unwrap();
        let identity =
            canonicalize(table.get("flat").unwrap(), raw(&[("org", "acme"), ("pkg", "a")]));
        assert_eq!(identity.org, None);
        assert_eq!(identity.pkg, "a");
        assert!(identity.module_path.is_empty());
    }

    #[test]
    fn test_namespaced_registry_keeps_org() {
        let table = PatternTable::build(vec![RegistrySpec::new("ns")
            .namespaced()
            .url("https://ns.example/:org(@[^/]+)?/:pkg")])
        .unwrap();
        let registry = table.get("ns").unwrap();

        let identity = canonicalize(registry, raw(&[("org", "@acme"), ("pkg", "a")]));
        assert_eq!(identity.org.as_deref(), Some("@acme"));

        let identity = canonicalize(registry, raw(&[("pkg", "a")]));
        assert_eq!(identity.org, None);
    }

    #[test]
    fn test_default_version_and_fixed_package() {
        let table = PatternTable::build(vec![RegistrySpec::new("lib")
            .fixed_package("lib")
            .default_version("latest")
            .url("https://lib.example/lib{@:ver}?/:mod*")])
        .unwrap();
        let registry = table.get("lib").unwrap();

        let identity = canonicalize(registry, raw(&[("mod", "a/b.ts")]));
        assert_eq!(identity.pkg, "lib");
        assert_eq!(identity.ver.as_deref(), Some("latest"));
        assert_eq!(identity.module_path, vec!["a", "b.ts"]);

        let identity = canonicalize(registry, raw(&[("ver", "1.2.3")]));
        assert_eq!(identity.ver.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_query_and_hash_pass_through() {
        let specs = vec![RegistrySpec::new("q").url("https://q.example/:pkg")];
        let table = PatternTable::build(specs).unwrap();
        let mut matched = raw(&[("pkg", "a")]);
        matched.query = Some("x=1".into());
        matched.fragment = Some("top".into());
        let identity = canonicalize(table.get("q").unwrap(), matched);
        assert_eq!(identity.query.as_deref(), Some("x=1"));
        assert_eq!(identity.hash.as_deref(), Some("top"));
    }
}
