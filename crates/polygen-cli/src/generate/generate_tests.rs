#![allow(non_snake_case)]

use super::*;
use polygen::{Schema, TypeNode};
use std::fs;
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join(DEFAULT_MANIFEST);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

fn nullable_string_manifest(output: &Path) -> String {
    format!(
        r#"
[generator]
category = "nullable_references"
output_root = "{}"

[[roots]]
name = "root"
type = {{ nullable = {{ primitive = "string" }} }}
"#,
        output.display()
    )
}

// apply_overrides tests

#[test]
fn apply_overrides___no_flags___keeps_manifest_values() {
    let config = GeneratorConfig::default().with_category("nullable_references");

    let merged = apply_overrides(config.clone(), &GenerateArgs::default());

    assert_eq!(merged, config);
}

#[test]
fn apply_overrides___flags___replace_manifest_values() {
    let args = GenerateArgs {
        output: Some("out".into()),
        category: Some("scalars".into()),
        profiles: vec!["python".into()],
        ..Default::default()
    };

    let merged = apply_overrides(GeneratorConfig::default(), &args);

    assert_eq!(merged.output_root, "out");
    assert_eq!(merged.category, "scalars");
    assert_eq!(merged.profiles, vec![ProfileId::from("python")]);
}

// summarize tests

#[test]
fn summarize___successful_run___counts_artifacts() {
    let schema = Schema::new().with_root("root", TypeNode::nullable(TypeNode::primitive("string")));
    let config = GeneratorConfig::default().with_profiles(["java_jackson", "python"]);

    let summary = summarize(&polygen::generate(&schema, &config));

    assert!(summary.starts_with("2 artifact(s), 0 failure(s)"), "{summary}");
}

// run tests

#[test]
fn run___valid_manifest___writes_output_tree() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("generated");
    let manifest = write_manifest(&dir, &nullable_string_manifest(&out));

    run(GenerateArgs {
        manifest: Some(manifest),
        profiles: vec!["java_jackson".into()],
        log_level: Some(LogLevel::Off),
        ..Default::default()
    })
    .unwrap();

    let java = out.join("java_jackson/output/nullable_references/NotnullString.java");
    assert!(fs::read_to_string(java).unwrap().contains("public class NotnullString {"));
    assert!(!out.join("python").exists());
}

#[test]
fn run___unknown_profile___fails_after_writing_others() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("generated");
    let manifest = write_manifest(&dir, &nullable_string_manifest(&out));

    let result = run(GenerateArgs {
        manifest: Some(manifest),
        profiles: vec!["kotlin".into(), "python".into()],
        log_level: Some(LogLevel::Off),
        ..Default::default()
    });

    assert!(result.unwrap_err().to_string().contains("1 problem(s)"));
    assert!(out.join("python/output/nullable_references/__init__.py").exists());
}

#[test]
fn run___missing_manifest___fails() {
    let dir = TempDir::new().unwrap();

    let result = run(GenerateArgs {
        manifest: Some(dir.path().join("absent.toml").to_string_lossy().into_owned()),
        log_level: Some(LogLevel::Off),
        ..Default::default()
    });

    assert!(result.is_err());
}

#[test]
fn run___check_mode___reports_missing_fixture_without_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("generated");
    let fixtures = dir.path().join("fixtures");
    let manifest = write_manifest(&dir, &nullable_string_manifest(&out));

    let result = run(GenerateArgs {
        manifest: Some(manifest),
        profiles: vec!["python".into()],
        check: Some(fixtures.to_string_lossy().into_owned()),
        log_level: Some(LogLevel::Off),
        ..Default::default()
    });

    assert!(result.is_err());
    assert!(!out.exists());
}
