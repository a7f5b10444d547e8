//! Definitions named like the library types generated code refers to

use polygen_core::{
    EmitterRegistry, FieldDef, GenerationReport, GeneratorConfig, Generator, ProfileId,
    ProfileRegistry, RecordDef, Schema, TypeNode,
};
use polygen_java::{JacksonEmitter, PROFILE_ID, jackson_profile};

fn generate(schema: &Schema) -> GenerationReport {
    let profiles = ProfileRegistry::new().with(jackson_profile());
    let emitters = EmitterRegistry::new().with(JacksonEmitter::new("com.example"));
    Generator::new(schema, &profiles, &emitters, &GeneratorConfig::default()).run()
}

#[test]
fn test_records_named_list_and_string_are_renamed() {
    let schema = Schema::new()
        .with_record(
            RecordDef::new("list")
                .field(FieldDef::new("items", TypeNode::elements(TypeNode::primitive("string")))),
        )
        .unwrap()
        .with_record(RecordDef::new("string"))
        .unwrap()
        .with_record(
            RecordDef::new("holder")
                .field(FieldDef::new("first", TypeNode::named("list")))
                .field(FieldDef::new("label", TypeNode::named("string"))),
        )
        .unwrap();

    let report = generate(&schema);

    assert!(report.is_success(), "{:?}", report.failures);
    let profile = ProfileId::from(PROFILE_ID);
    let files: Vec<&str> = report
        .artifacts
        .iter()
        .map(|a| a.file_name.as_str())
        .collect();
    assert_eq!(files, vec!["Holder.java", "List_.java", "String_.java"]);

    let list = report.artifact(&profile, "List_").unwrap();
    assert!(list.contents.contains("import java.util.List;"));
    assert!(list.contents.contains("public class List_ {"));
    assert!(list.contents.contains("List<String>"));

    let holder = report.artifact(&profile, "Holder").unwrap();
    assert!(holder.contents.contains("private List_ first;"), "{}", holder.contents);
    assert!(holder.contents.contains("private String_ label;"), "{}", holder.contents);
}
