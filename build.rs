//! Build script for clipscope
//!
//! Stamps the binary with its build date and git commit for the startup log.

use std::process::Command;

/// Trimmed stdout of `program args`, or "unknown" if it cannot be run
fn stamp(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    println!("cargo:rustc-env=BUILD_DATE={}", stamp("date", &["-u", "+%Y-%m-%dT%H:%MZ"]));
    println!("cargo:rustc-env=GIT_HASH={}", stamp("git", &["rev-parse", "--short", "HEAD"]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
