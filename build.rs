use anyhow::{Context, Result, bail};
use chrono::TimeZone;
use std::env;
use std::fs;
use std::process::Command;
use vergen_gitcl::{Emitter, GitclBuilder};

const LIB_NAME: &str = "mp4asc";
const LIB_MANIFEST: &str = "mp4asc/Cargo.toml";

fn main() -> Result<()> {
    emit_git_describe()?;

    let built = match env::var("SOURCE_DATE_EPOCH") {
        Ok(val) => chrono::Utc
            .timestamp_opt(val.parse::<i64>()?, 0)
            .single()
            .with_context(|| format!("SOURCE_DATE_EPOCH out of range: {val}"))?,
        Err(_) => chrono::Utc::now(),
    };
    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        built.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let lib_version = lib_version_from_metadata()
        .or_else(|_| lib_version_from_manifest())
        .unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=MP4ASC_VERSION={lib_version}");

    println!("cargo:rerun-if-changed={LIB_MANIFEST}");

    Ok(())
}

/// VERGEN_GIT_DESCRIBE, or "unknown" outside a git checkout.
fn emit_git_describe() -> Result<()> {
    let gitcl = GitclBuilder::default()
        .describe(true, true, Some("[0-9]*"))
        .build()?;

    let emitted = Emitter::default()
        .idempotent()
        .fail_on_error()
        .add_instructions(&gitcl)
        .and_then(|emitter| emitter.emit());

    if let Err(e) = emitted {
        eprintln!("git describe unavailable: {e:?}");
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
    }

    Ok(())
}

fn lib_version_from_metadata() -> Result<String> {
    let output = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()))
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()?;

    if !output.status.success() {
        bail!("cargo metadata failed");
    }

    let metadata: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    metadata["packages"]
        .as_array()
        .into_iter()
        .flatten()
        .find(|package| package["name"].as_str() == Some(LIB_NAME))
        .and_then(|package| package["version"].as_str())
        .map(str::to_string)
        .with_context(|| format!("{LIB_NAME} not found in cargo metadata"))
}

fn lib_version_from_manifest() -> Result<String> {
    let manifest = fs::read_to_string(LIB_MANIFEST)?;

    manifest
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("version"))
        .find_map(|line| line.split_once('='))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .with_context(|| format!("no version in {LIB_MANIFEST}"))
}
