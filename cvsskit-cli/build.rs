// Build script to inject version information from git tags
//
// Falls back to CARGO_PKG_VERSION when git is unavailable, so builds
// from a source tarball still carry a sensible version string.

use std::process::Command;

fn main() {
    let version = get_git_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=CVSSKIT_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

fn get_git_version() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8(output.stdout).ok()?;
    let version = version.trim();

    if let Some(tagged) = version.strip_prefix('v') {
        // "v0.1.0" or "v0.1.0-5-gabc123": keep the version part
        match tagged.find('-') {
            Some(dash) => Some(tagged[..dash].to_string()),
            None => Some(tagged.to_string()),
        }
    } else {
        // Untagged commit: append the hash to the crate version
        Some(format!("{}-{}", env!("CARGO_PKG_VERSION"), version))
    }
}
