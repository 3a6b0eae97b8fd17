use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Git hash for the VERSION string; empty when not built from a checkout.
    let hash = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_default();

    println!("cargo:rustc-env=BUILD_VERSION={}", hash);
}
