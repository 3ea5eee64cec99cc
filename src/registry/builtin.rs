//! Built-in registry definitions.
//!
//! Within a registry, shapes that a more general shape would also accept
//! are listed first: esm.sh build-pinned paths and skypack `/-/` pins.

use crate::pattern::ComponentTemplates;
use crate::registry::table::RegistrySpec;

/// Namespaced npm-style path: optional `@scope`, package, optional version.
const SCOPED_PACKAGE_PATH: &str = "/:org(@[^/]+)?/:pkg{@:ver}?/:mod*";

/// GitHub proxy path: owner, repository, optional ref.
const OWNER_REPO_PATH: &str = "/:org/:pkg{@:ver}?/:mod*";

/// jspm path: optional `npm:` scope, package, version, optional `!` build flag.
const JSPM_PATH: &str = "/:org((?:npm:)?@[^/]+)?/:pkg{@:ver([^!/]+)}?{(![^/]+)}?/:mod*";

/// Registry definitions in resolution order.
pub fn registries() -> Vec<RegistrySpec> {
    vec![
        RegistrySpec::new("deno.land/x").matcher(
            ComponentTemplates::new("https", "deno.land", "/x/:pkg{@:ver}?/:mod*")
                .query("*")
                .fragment("*"),
        ),
        // https://cdn.deno.land/mimetypes/versions/v1.0.0/raw/mod.ts
        RegistrySpec::new("cdn.deno.land")
            .url("https://cdn.deno.land/:pkg/versions/:ver/raw/:mod+"),
        RegistrySpec::new("std").fixed_package("std").matcher(
            ComponentTemplates::new("https", "deno.land", "/std{@:ver}?/:mod*")
                .query("*")
                .fragment("*"),
        ),
        RegistrySpec::new("nest.land").url("https://x.nest.land/:pkg@:ver/:mod*"),
        RegistrySpec::new("crux.land").url("https://crux.land/:pkg@:ver"),
        RegistrySpec::new("github.com")
            .namespaced()
            .matcher(
                ComponentTemplates::new(
                    "https",
                    "raw.githubusercontent.com",
                    "/:org/:pkg/:ver/:mod*",
                )
                .query("*"),
            )
            // https://github.com/denoland/deno_std/raw/main/http/mod.ts
            .url("https://github.com/:org/:pkg/raw/:ver/:mod*"),
        RegistrySpec::new("gist.github.com")
            .namespaced()
            .url("https://gist.githubusercontent.com/:org/:pkg/raw/:ver/:mod*"),
        RegistrySpec::new("esm.sh")
            .namespaced()
            // https://esm.sh/v92/preact@10.10.0/src/index.d.ts
            .matcher(
                ComponentTemplates::new(
                    "http{s}?",
                    "{cdn.}?esm.sh",
                    "/:api(stable|v[0-9]+)/:org(@[^/]+)?/:pkg{@:ver}?/:mod*",
                )
                .query("*"),
            )
            .matcher(
                ComponentTemplates::new("http{s}?", "{cdn.}?esm.sh", SCOPED_PACKAGE_PATH)
                    .query("*"),
            ),
        RegistrySpec::new("denopkg.com").namespaced().matcher(
            ComponentTemplates::new("https", "denopkg.com", SCOPED_PACKAGE_PATH)
                .query("*")
                .fragment("*"),
        ),
        RegistrySpec::new("denolib.com").namespaced().matcher(
            ComponentTemplates::new("https", "denolib.com", SCOPED_PACKAGE_PATH)
                .query("*")
                .fragment("*"),
        ),
        RegistrySpec::new("lib.deno.dev").matcher(
            ComponentTemplates::new("https", "lib.deno.dev", "/x/:pkg{@:ver}?/:mod*")
                .query("*")
                .fragment("*"),
        ),
        // https://pax.deno.dev/windchime-yk/deno-util@v1.1.1/file.ts
        RegistrySpec::new("pax.deno.dev")
            .namespaced()
            .url(format!("https://pax.deno.dev{OWNER_REPO_PATH}")),
        // https://ghuc.cc/qwtel/kv-storage-interface/index.d.ts
        RegistrySpec::new("ghuc.cc")
            .namespaced()
            .url(format!("https://ghuc.cc{OWNER_REPO_PATH}")),
        // https://ghc.deno.dev/tbjgolden/deno-htmlparser2@1f76cdf/htmlparser2/Parser.ts
        RegistrySpec::new("ghc.deno.dev")
            .namespaced()
            .url(format!("https://ghc.deno.dev{OWNER_REPO_PATH}")),
        RegistrySpec::new("jspm.dev")
            .namespaced()
            // https://jspm.dev/@angular/compiler@11.0.5
            .url(format!("https://jspm.dev{JSPM_PATH}"))
            // https://dev.jspm.io/markdown-it@11.0.1
            .url(format!("https://dev.jspm.io{JSPM_PATH}")),
        RegistrySpec::new("skypack.dev")
            .namespaced()
            // https://cdn.skypack.dev/-/@firebase/firestore@v3.4.3-A3UEhS17OZ2Vgra7HCZF/dist.ts
            .url("https://cdn.skypack.dev/-/:org(@[^/]+)?/:pkg@:ver([^-]+):build/:mod*")
            .matcher(
                ComponentTemplates::new("https", "cdn.skypack.dev", SCOPED_PACKAGE_PATH).query("*"),
            )
            // https://cdn.shopstic.com/pin/ajv-formats@v2.1.1-vcFtNZ2SctUV93FmiL2Q/dist.ts
            .matcher(
                ComponentTemplates::new(
                    "https",
                    "cdn.shopstic.com",
                    "/pin/:org(@[^/]+)?/:pkg{@:ver([^-/]+)}:build/:mod*",
                )
                .query("*"),
            )
            // https://cdn.pika.dev/class-transformer@0.2.3
            .matcher(
                ComponentTemplates::new("https", "cdn.pika.dev", SCOPED_PACKAGE_PATH).query("*"),
            ),
        RegistrySpec::new("jsdeliver.net")
            .namespaced()
            .url(format!("https://cdn.jsdelivr.net/npm{SCOPED_PACKAGE_PATH}"))
            .url(format!("https://cdn.jsdelivr.net/gh{OWNER_REPO_PATH}")),
        RegistrySpec::new("unpkg.com")
            .namespaced()
            .url(format!("https://unpkg.com{SCOPED_PACKAGE_PATH}")),
        // https://aws-api.deno.dev/latest/services/sqs.ts
        RegistrySpec::new("aws-api").matcher(
            ComponentTemplates::new("https", "aws-api.deno.dev", r"/:ver/services/:pkg{(\.ts)}")
                .query("*"),
        ),
        RegistrySpec::new("googleapis").matcher(
            ComponentTemplates::new(
                "https",
                "googleapis.deno.dev",
                r"/v1/:pkg([^:]+){(:)}:ver{(\.ts)}",
            )
            .query("*"),
        ),
    ]
}
