//! Embeds build metadata into the binary.
//!
//! Dev builds carry the git SHA (via vergen) plus the build date; builds
//! with the `release` feature get the date only, so official version
//! strings stay clean.

use std::process::Command;

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn build_date() -> String {
    command_stdout("date", &["+%Y-%m-%d"]).unwrap_or_else(|| "unknown".to_string())
}

/// The "owner/repo" slug, taken from the origin remote when building from
/// a clone.
fn repo_slug() -> String {
    command_stdout("git", &["remote", "get-url", "origin"])
        .as_deref()
        .and_then(slug_from_remote)
        .unwrap_or_else(|| "simon/cuejump".to_string())
}

/// Extract "owner/repo" from an HTTPS or SSH remote URL.
fn slug_from_remote(url: &str) -> Option<String> {
    let url = url.trim_end_matches(".git");
    let hosts = ["github.com", "gitlab.com", "bitbucket.org"];
    let host = hosts.iter().find(|h| url.contains(*h))?;

    // HTTPS form first (host/owner/repo), SSH form second (host:owner/repo)
    let tail = url
        .split(&format!("{}/", host))
        .nth(1)
        .or_else(|| url.split(&format!("{}:", host)).nth(1))?;
    if tail.is_empty() {
        None
    } else {
        Some(tail.to_string())
    }
}

fn main() {
    println!("cargo:rustc-env=CUEJUMP_REPO_NAME={}", repo_slug());
    println!("cargo:rustc-env=CUEJUMP_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(|e| e.to_string())
        });

    // Outside a git checkout (release tarballs, vendored builds) fall back
    // to a placeholder instead of failing the build.
    if let Err(message) = emitted {
        println!("cargo:warning=git metadata unavailable: {}", message);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
