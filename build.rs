use std::process::Command;

// Embed the short commit hash so `tilewall --version` can identify
// non-release builds. An empty hash means "not built from a checkout".
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|out| out.status.success().then_some(out.stdout))
        .map(|stdout| String::from_utf8_lossy(&stdout).trim().to_string())
        .unwrap_or_default();

    println!("cargo:rustc-env=GIT_HASH={hash}");
}
