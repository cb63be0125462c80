use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Embeds the short git revision so `drawingpad --version` can report it.
fn main() {
    let revision = git_short_hash().unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=DRAWINGPAD_GIT_HASH={revision}");
    println!("cargo:rerun-if-changed=build.rs");

    let git_dir = env::var_os("GIT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".git"));
    for tracked in ["HEAD", "refs", "packed-refs"] {
        let path = git_dir.join(tracked);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
