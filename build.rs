use std::process::Command;

/// Stamps the nearest release tag into `GIT_TAG` for the footer version label.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    else {
        return;
    };
    if !output.status.success() {
        return;
    }

    let tag = String::from_utf8_lossy(&output.stdout);
    let tag = tag.trim();
    if !tag.is_empty() {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
