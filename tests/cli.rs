//! End-to-end runs of the `parlandim` binary.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};
use tempfile::TempDir;

fn parlandim(root: &Path, args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_parlandim"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("PARLANDIM_THEME")
        .env_remove("COLORFGBG")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn test_home_stdout_is_json() {
    let dir = TempDir::new().unwrap();
    let posts = dir.path().join("posts.json");
    fs::write(
        &posts,
        r#"[{"id": "1", "frontmatter": {"date": "2024-03-09", "title": "Olá"}}]"#,
    )
    .unwrap();

    let output = parlandim(dir.path(), &["home", "--posts", posts.to_str().unwrap()]);
    let cards: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(cards[0]["title"], "Olá");
    assert_eq!(cards[0]["date"], "09-03-2024");
    // the listing summary is logged, not printed
    assert!(String::from_utf8_lossy(&output.stderr).contains("Postagens recentes"));
}

#[test]
fn test_head_stdout_starts_with_title() {
    let dir = TempDir::new().unwrap();

    // no config, no image, no pathname: all three warnings fire
    let output = parlandim(dir.path(), &["head", "--title", "Home"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.starts_with("<title>Parlandim&lt;dev&gt; - Home</title>\n"));
    assert_eq!(stdout.lines().count(), 18);
    assert!(stdout.lines().all(|line| line.starts_with('<')));
    assert!(stderr.contains("not found, using defaults"));
    assert!(stderr.contains("no social image"));
}

#[test]
fn test_theme_toggle_prints_only_mode() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("parlandim.toml"), "[theme]\ndetector = \"dark\"\n").unwrap();

    let output = parlandim(dir.path(), &["theme", "toggle"]);

    assert_eq!(String::from_utf8(output.stdout).unwrap(), "light\n");
    let stored = fs::read_to_string(dir.path().join(".parlandim/storage.json")).unwrap();
    assert!(stored.contains(r#""theme": "light""#));
}
