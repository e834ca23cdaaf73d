use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let status = match command_stdout("git", &["status", "--porcelain"]) {
        Some(output) if output.is_empty() => "clean".to_string(),
        Some(_) => "dirty".to_string(),
        None => "unknown".to_string(),
    };

    let metadata = [
        (
            "HASH",
            command_stdout("git", &["rev-parse", "--short", "HEAD"])
                .filter(|hash| !hash.is_empty())
                .unwrap_or_else(|| "unknown".into()),
        ),
        ("STATUS", status),
        (
            "TIMESTAMP",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ),
        (
            "TARGET",
            env::var("TARGET").unwrap_or_else(|_| "unknown-target".into()),
        ),
        (
            "PROFILE",
            env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".into()),
        ),
        (
            "RUSTC",
            command_stdout("rustc", &["--version"]).unwrap_or_else(|| "unknown".into()),
        ),
    ];

    for (key, value) in metadata {
        println!("cargo:rustc-env=OASIS_BUILD_{key}={value}");
    }
}

/// Trimmed stdout of a successful command, `None` when it fails or cannot run.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
