#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::path::Path;

    const COLORS: &str = r##"
[[color]]
name = "Accent"
[[color.variant]]
devices = ["iphone"]
hex = "#FF9500"
[[color.variant]]
devices = ["ipad"]
appearances = ["dark"]
rgb = [10, 132, 255]
"##;

    fn write_manifest(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join("assets.toml");
        std::fs::write(&path, text).unwrap();
        path
    }

    fn cli() -> Command {
        Command::cargo_bin("kodegen_bundler_assets").unwrap()
    }

    #[test]
    fn test_validate_passes() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path(), COLORS);

        cli()
            .arg("validate")
            .arg(&manifest)
            .assert()
            .success()
            .stdout(predicate::str::contains("Accent.colorset"));
    }

    #[test]
    fn test_validate_reports_overlap() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(
            dir.path(),
            r##"
[[color]]
name = "Accent"
[[color.variant]]
devices = ["universal"]
hex = "#FF9500"
[[color.variant]]
devices = ["universal"]
hex = "#000000"
"##,
        );

        cli()
            .arg("validate")
            .arg(&manifest)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("overlap"));
    }

    #[test]
    fn test_generate_writes_catalog_and_bundle_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Assets.xcassets");
        let manifest = write_manifest(
            dir.path(),
            &format!(
                r#"{COLORS}
[info-plist]
platform = "mac"
defaults = true
bundle-name = "Demo"
display-name = "Demo"

[entitlements]
aps = "development"
"#
            ),
        );

        cli()
            .arg("generate")
            .arg(&manifest)
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        assert!(out.join("Accent.colorset/Contents.json").is_file());
        let plist = std::fs::read_to_string(dir.path().join("Info.plist")).unwrap();
        assert!(plist.contains("<key>CFBundleName</key>"));
        assert!(!plist.contains("LSRequiresIPhoneOS"));
        let entitlements = std::fs::read_to_string(dir.path().join("App.entitlements")).unwrap();
        assert!(entitlements.contains("aps-environment"));

        cli()
            .arg("generate")
            .arg(&manifest)
            .arg("--out")
            .arg(&out)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("already exists"));

        cli()
            .arg("generate")
            .arg(&manifest)
            .arg("--out")
            .arg(&out)
            .arg("--overwrite")
            .assert()
            .success();
    }

    #[test]
    fn test_missing_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();

        cli()
            .arg("validate")
            .arg(dir.path().join("missing.toml"))
            .assert()
            .code(1);
    }
}
