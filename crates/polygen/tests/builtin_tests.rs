//! Generation through the builtin profiles and emitters

use polygen::prelude::*;
use polygen_fixtures::FixtureHarness;
use std::path::PathBuf;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

#[test]
fn test_builtin_profiles_are_registered() {
    let ids: Vec<String> = builtin_profiles()
        .ids()
        .into_iter()
        .map(|id| id.to_string())
        .collect();

    assert_eq!(ids, vec!["java_jackson", "python"]);
}

#[test]
fn test_nullable_string_root_differs_per_profile() {
    let schema = Schema::new().with_root("root", TypeNode::nullable(TypeNode::primitive("string")));

    let report = polygen::generate(&schema, &GeneratorConfig::default());

    assert!(report.is_success(), "{:?}", report.failures);
    let files: Vec<(&str, &str)> = report
        .artifacts
        .iter()
        .map(|a| (a.profile.as_str(), a.file_name.as_str()))
        .collect();
    assert_eq!(
        files,
        vec![("java_jackson", "NotnullString.java"), ("python", "__init__.py")]
    );
}

#[test]
fn test_java_output_matches_golden_file() {
    let schema = Schema::new().with_root("root", TypeNode::nullable(TypeNode::primitive("string")));
    let config = GeneratorConfig::default()
        .with_profiles(["java_jackson"])
        .with_category("nullable_references");

    let report = polygen::generate(&schema, &config);

    let errors = FixtureHarness::new(fixtures_root()).check_all(&report.artifacts, &config.category);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn test_python_output_matches_golden_file() {
    let schema = Schema::new().with_root("root", TypeNode::nullable(TypeNode::primitive("string")));
    let config = GeneratorConfig::default()
        .with_profiles(["python"])
        .with_category("nullable_references");

    let report = polygen::generate(&schema, &config);

    assert!(report.is_success(), "{:?}", report.failures);
    let errors = FixtureHarness::new(fixtures_root()).check_all(&report.artifacts, &config.category);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn test_unknown_profile_is_reported_not_fatal() {
    let schema = Schema::new().with_root("root", TypeNode::primitive("string"));
    let config = GeneratorConfig::default().with_profiles(["kotlin", "python"]);

    let report = polygen::generate(&schema, &config);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].to_string(), "[kotlin] no emitter registered for profile `kotlin`");
    assert_eq!(report.artifacts.len(), 1);
}

#[test]
fn test_enum_with_array_field_generates_for_every_profile() {
    let schema = Schema::new()
        .with_enum(EnumDef::new("status", ["active", "closed"]))
        .unwrap()
        .with_record(
            RecordDef::new("ticket")
                .field(FieldDef::new("history", TypeNode::elements(TypeNode::named("status"))))
                .field(FieldDef::new(
                    "notes",
                    TypeNode::nullable(TypeNode::values(TypeNode::primitive("string"))),
                )),
        )
        .unwrap();

    let report = polygen::generate(&schema, &GeneratorConfig::default());

    assert!(report.is_success(), "{:?}", report.failures);
    let java = ProfileId::from("java_jackson");
    let status = report.artifact(&java, "Status").unwrap();
    assert!(status.contents.contains("public enum Status {"));
    let ticket = report.artifact(&java, "Ticket").unwrap();
    assert!(ticket.contents.contains("List<Status>"));
    assert!(ticket.contents.contains("Map<String, String>"));
    let python: Vec<&EmittedArtifact> = report.artifacts_for(&ProfileId::from("python")).collect();
    assert_eq!(python.len(), 1);
    assert!(python[0].contents.contains("class Status(Enum):"));
    assert!(python[0].contents.contains("history: \"List[Status]\""));
    assert!(python[0].contents.contains("notes: \"Optional[Dict[str, str]]\""));
}
