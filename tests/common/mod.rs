//! Shared helpers for integration tests.

use std::sync::Arc;

use specifier_resolver::{Identity, PatternTable, Resolution, Resolver};

/// Resolver over the built-in table with the default policy.
pub fn builtin_resolver() -> Resolver {
    Resolver::new(Arc::new(PatternTable::builtin().expect("built-in table compiles")))
}

/// Resolve `url` and unwrap the identity.
pub fn resolved(resolver: &Resolver, url: &str) -> Identity {
    match resolver.resolve(url) {
        Resolution::Resolved(identity) => identity,
        Resolution::Unresolved(unresolved) => {
            panic!("expected {} to resolve", unresolved.original_url)
        }
    }
}

/// Identity with no query or hash.
#[allow(dead_code)]
pub fn identity(
    registry: &str,
    org: Option<&str>,
    pkg: &str,
    ver: Option<&str>,
    module_path: &[&str],
) -> Identity {
    Identity {
        registry: registry.to_string(),
        org: org.map(str::to_string),
        pkg: pkg.to_string(),
        ver: ver.map(str::to_string),
        module_path: module_path.iter().map(|s| s.to_string()).collect(),
        query: None,
        hash: None,
    }
}

/// A sample URL for one built-in matcher and the identity it resolves to.
#[allow(dead_code)]
pub struct MatcherSample {
    pub registry: &'static str,
    pub index: usize,
    pub url: &'static str,
    pub org: Option<&'static str>,
    pub pkg: &'static str,
    pub ver: Option<&'static str>,
    pub module_path: &'static [&'static str],
}

#[allow(dead_code)]
impl MatcherSample {
    pub fn expected(&self) -> Identity {
        identity(self.registry, self.org, self.pkg, self.ver, self.module_path)
    }
}

/// One sample per built-in matcher, in table order.
#[allow(dead_code)]
pub const MATCHER_SAMPLES: &[MatcherSample] = &[
    MatcherSample {
        registry: "deno.land/x",
        index: 0,
        url: "https://deno.land/x/oak@v10.0.0/mod.ts",
        org: None,
        pkg: "oak",
        ver: Some("v10.0.0"),
        module_path: &["mod.ts"],
    },
    MatcherSample {
        registry: "cdn.deno.land",
        index: 0,
        url: "https://cdn.deno.land/mimetypes/versions/v1.0.0/raw/mod.ts",
        org: None,
        pkg: "mimetypes",
        ver: Some("v1.0.0"),
        module_path: &["mod.ts"],
    },
    MatcherSample {
        registry: "std",
        index: 0,
        url: "https://deno.land/std@0.140.0/http/mod.ts",
        org: None,
        pkg: "std",
        ver: Some("0.140.0"),
        module_path: &["http", "mod.ts"],
    },
    MatcherSample {
        registry: "nest.land",
        index: 0,
        url: "https://x.nest.land/eggs@0.3.10/mod.ts",
        org: None,
        pkg: "eggs",
        ver: Some("0.3.10"),
        module_path: &["mod.ts"],
    },
    MatcherSample {
        registry: "crux.land",
        index: 0,
        url: "https://crux.land/router@0.0.5",
        org: None,
        pkg: "router",
        ver: Some("0.0.5"),
        module_path: &[],
    },
    MatcherSample {
        registry: "github.com",
        index: 0,
        url: "https://raw.githubusercontent.com/denoland/deno_std/main/http/mod.ts",
        org: Some("denoland"),
        pkg: "deno_std",
        ver: Some("main"),
        module_path: &["http", "mod.ts"],
    },
    MatcherSample {
        registry: "github.com",
        index: 1,
        url: "https://github.com/denoland/deno_std/raw/main/http/mod.ts",
        org: Some("denoland"),
        pkg: "deno_std",
        ver: Some("main"),
        module_path: &["http", "mod.ts"],
    },
    MatcherSample {
        registry: "gist.github.com",
        index: 0,
        url: "https://gist.githubusercontent.com/kitsonk/0a1b2c3d4e5f/raw/9f8e7d6/mod.ts",
        org: Some("kitsonk"),
        pkg: "0a1b2c3d4e5f",
        ver: Some("9f8e7d6"),
        module_path: &["mod.ts"],
    },
    MatcherSample {
        registry: "esm.sh",
        index: 0,
        url: "https://esm.sh/v92/preact@10.10.0/src/index.d.ts",
        org: None,
        pkg: "preact",
        ver: Some("10.10.0"),
        module_path: &["src", "index.d.ts"],
    },
    MatcherSample {
        registry: "esm.sh",
        index: 1,
        url: "https://cdn.esm.sh/@preact/signals@1.0.0",
        org: Some("@preact"),
        pkg: "signals",
        ver: Some("1.0.0"),
        module_path: &[],
    },
    MatcherSample {
        registry: "denopkg.com",
        index: 0,
        url: "https://denopkg.com/dinatra@0.15.0/mod.ts",
        org: None,
        pkg: "dinatra",
        ver: Some("0.15.0"),
        module_path: &["mod.ts"],
    },
    MatcherSample {
        registry: "denolib.com",
        index: 0,
        url: "https://denolib.com/@denolib/typeorm@v0.2.23/mod.ts",
        org: Some("@denolib"),
        pkg: "typeorm",
        ver: Some("v0.2.23"),
        module_path: &["mod.ts"],
    },
    MatcherSample {
        registry: "lib.deno.dev",
        index: 0,
        url: "https://lib.deno.dev/x/oak@v10/mod.ts",
        org: None,
        pkg: "oak",
        ver: Some("v10"),
        module_path: &["mod.ts"],
    },
    MatcherSample {
        registry: "pax.deno.dev",
        index: 0,
        url: "https://pax.deno.dev/windchime-yk/deno-util@v1.1.1/file.ts",
        org: Some("windchime-yk"),
        pkg: "deno-util",
        ver: Some("v1.1.1"),
        module_path: &["file.ts"],
    },
    MatcherSample {
        registry: "ghuc.cc",
        index: 0,
        url: "https://ghuc.cc/qwtel/kv-storage-interface/index.d.ts",
        org: Some("qwtel"),
        pkg: "kv-storage-interface",
        ver: None,
        module_path: &["index.d.ts"],
    },
    MatcherSample {
        registry: "ghc.deno.dev",
        index: 0,
        url: "https://ghc.deno.dev/tbjgolden/deno-htmlparser2@1f76cdf/htmlparser2/Parser.ts",
        org: Some("tbjgolden"),
        pkg: "deno-htmlparser2",
        ver: Some("1f76cdf"),
        module_path: &["htmlparser2", "Parser.ts"],
    },
    MatcherSample {
        registry: "jspm.dev",
        index: 0,
        url: "https://jspm.dev/@angular/compiler@11.0.5",
        org: Some("@angular"),
        pkg: "compiler",
        ver: Some("11.0.5"),
        module_path: &[],
    },
    MatcherSample {
        registry: "jspm.dev",
        index: 1,
        url: "https://dev.jspm.io/markdown-it@11.0.1",
        org: None,
        pkg: "markdown-it",
        ver: Some("11.0.1"),
        module_path: &[],
    },
    MatcherSample {
        registry: "skypack.dev",
        index: 0,
        url: "https://cdn.skypack.dev/-/@firebase/firestore@v3.4.3-A3UEhS17OZ2Vgra7HCZF/dist=es2019,mode=types/dist/index.d.ts",
        org: Some("@firebase"),
        pkg: "firestore",
        ver: Some("v3.4.3"),
        module_path: &["dist=es2019,mode=types", "dist", "index.d.ts"],
    },
    MatcherSample {
        registry: "skypack.dev",
        index: 1,
        url: "https://cdn.skypack.dev/preact@10.5.13",
        org: None,
        pkg: "preact",
        ver: Some("10.5.13"),
        module_path: &[],
    },
    MatcherSample {
        registry: "skypack.dev",
        index: 2,
        url: "https://cdn.shopstic.com/pin/ajv-formats@v2.1.1-vcFtNZ2SctUV93FmiL2Q/dist=es2020,mode=types/dist/index.d.ts",
        org: None,
        pkg: "ajv-formats",
        ver: Some("v2.1.1"),
        module_path: &["dist=es2020,mode=types", "dist", "index.d.ts"],
    },
    MatcherSample {
        registry: "skypack.dev",
        index: 3,
        url: "https://cdn.pika.dev/class-transformer@0.2.3",
        org: None,
        pkg: "class-transformer",
        ver: Some("0.2.3"),
        module_path: &[],
    },
    MatcherSample {
        registry: "jsdeliver.net",
        index: 0,
        url: "https://cdn.jsdelivr.net/npm/@angular/core@11.0.5/bundles/core.umd.js",
        org: Some("@angular"),
        pkg: "core",
        ver: Some("11.0.5"),
        module_path: &["bundles", "core.umd.js"],
    },
    MatcherSample {
        registry: "jsdeliver.net",
        index: 1,
        url: "https://cdn.jsdelivr.net/gh/denoland/deno_std@0.140.0/http/mod.ts",
        org: Some("denoland"),
        pkg: "deno_std",
        ver: Some("0.140.0"),
        module_path: &["http", "mod.ts"],
    },
    MatcherSample {
        registry: "unpkg.com",
        index: 0,
        url: "https://unpkg.com/@angular/core@11.0.5/index.d.ts",
        org: Some("@angular"),
        pkg: "core",
        ver: Some("11.0.5"),
        module_path: &["index.d.ts"],
    },
    MatcherSample {
        registry: "aws-api",
        index: 0,
        url: "https://aws-api.deno.dev/latest/services/sqs.ts",
        org: None,
        pkg: "sqs",
        ver: Some("latest"),
        module_path: &[],
    },
    MatcherSample {
        registry: "googleapis",
        index: 0,
        url: "https://googleapis.deno.dev/v1/calendar:v3.ts",
        org: None,
        pkg: "calendar",
        ver: Some("v3"),
        module_path: &[],
    },
];
