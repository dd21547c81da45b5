use std::fs;

use serde::Deserialize;

// Mirrors the required shape of `src/default_config.toml`. Every key must be
// present in the bundled default so `Config::compiled_default` never falls back.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(dead_code)]
struct DefaultConfig {
    paths: Paths,
    site: Site,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(dead_code)]
struct Paths {
    content: String,
    #[serde(rename = "static")]
    static_dir: String,
    template: String,
    output: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Site {
    base_path: String,
}

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={config_path}");

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("cannot read {config_path}: {e}"));

    let config: DefaultConfig = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("{config_path} does not match the site config shape: {e}"));

    if !config.site.base_path.starts_with('/') {
        panic!(
            "{config_path}: site.base_path must start with '/', got {:?}",
            config.site.base_path
        );
    }
}
