use chrono::Utc;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());

    // Modified tracked files only; untracked files don't mark a build dirty
    let dirty = Command::new("git")
        .args(["diff", "--quiet", "HEAD"])
        .status()
        .map(|s| !s.success())
        .unwrap_or(false);

    let build_hash = if dirty && hash != "unknown" {
        format!("{hash}-dirty-{}", Utc::now().format("%Y%m%d-%H%M%S"))
    } else {
        hash
    };

    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // .git lives at the workspace root, two levels up
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
