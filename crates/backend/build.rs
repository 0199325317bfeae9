use std::env;
use std::fs;
use std::path::Path;

/// Кладём config.toml рядом с бинарником (target/debug или target/release)
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let Some(workspace_root) = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
    else {
        return;
    };

    let source_config = workspace_root.join("config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found, the embedded site config will be used");
        return;
    }

    if let Err(e) = fs::copy(&source_config, target_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {}", e);
    }
}
