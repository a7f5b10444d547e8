//! Golden-file tests for the Java/Jackson backend
//!
//! Run with `POLYGEN_BLESS=1` to rewrite the fixtures after an intended
//! change to the output.

use polygen_core::{
    EmitterRegistry, GeneratorConfig, Generator, ProfileId, ProfileRegistry, Schema, TypeNode,
};
use polygen_fixtures::FixtureHarness;
use polygen_java::{JacksonEmitter, PROFILE_ID, jackson_profile};
use std::path::PathBuf;

const CATEGORY: &str = "nullable_references";

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

fn generate(schema: &Schema) -> polygen_core::GenerationReport {
    let profiles = ProfileRegistry::new().with(jackson_profile());
    let emitters = EmitterRegistry::new().with(JacksonEmitter::new("com.example"));
    let config = GeneratorConfig::default().with_category(CATEGORY);
    Generator::new(schema, &profiles, &emitters, &config).run()
}

#[test]
fn test_nullable_string_root_matches_golden_file() {
    let schema = Schema::new().with_root("root", TypeNode::nullable(TypeNode::primitive("string")));

    let report = generate(&schema);

    assert!(report.is_success(), "{:?}", report.failures);
    assert_eq!(report.artifacts.len(), 1);
    let harness = FixtureHarness::from_env(fixtures_root());
    if let Err(e) = harness.check(&report.artifacts[0], CATEGORY) {
        panic!("{e}");
    }
}

#[test]
fn test_golden_file_is_independent_of_root_name() {
    let schema = Schema::new().with_root(
        "whatever_the_caller_picked",
        TypeNode::nullable(TypeNode::primitive("string")),
    );

    let report = generate(&schema);

    let artifact = report
        .artifact(&ProfileId::from(PROFILE_ID), "NotnullString")
        .unwrap();
    assert!(
        FixtureHarness::new(fixtures_root())
            .check(artifact, CATEGORY)
            .is_ok()
    );
}

#[test]
fn test_record_field_wrapper_matches_root_wrapper() {
    let schema = Schema::new()
        .with_record(polygen_core::RecordDef::new("person").field(
            polygen_core::FieldDef::new("nickname", TypeNode::primitive("string")).optional(),
        ))
        .unwrap();

    let report = generate(&schema);

    let artifact = report
        .artifact(&ProfileId::from(PROFILE_ID), "NotnullString")
        .unwrap();
    assert!(
        FixtureHarness::new(fixtures_root())
            .check(artifact, CATEGORY)
            .is_ok()
    );
}
