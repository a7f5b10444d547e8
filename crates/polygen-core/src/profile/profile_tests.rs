#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn sample_profile() -> TargetProfile {
    TargetProfile::builder("sample", "Sample", "samplejson")
        .file_extension("smp")
        .naming(Case::Pascal, Case::Snake)
        .keywords(["type", "Type"])
        .primitive("string", TypeMapping::reference(TargetType::new("Str")))
        .primitive(
            "int32",
            TypeMapping::boxed(TargetType::new("i32"), TargetType::new("I32Box")),
        )
        .nullability_for_all_primitives(NullabilityPolicy::NativeOptional)
        .nullability(NullabilityKey::Named, NullabilityPolicy::NativeNullable)
        .optional_syntax(TypeTemplate::new("Maybe<{}>").with_import("std.Maybe"))
        .named_import("models.{}")
        .build()
}

#[test]
fn TargetProfile___builder___fills_policy_for_every_mapped_primitive() {
    let profile = sample_profile();

    assert_eq!(
        profile.policy(&NullabilityKey::primitive("string")),
        Some(NullabilityPolicy::NativeOptional)
    );
    assert_eq!(
        profile.policy(&NullabilityKey::primitive("int32")),
        Some(NullabilityPolicy::NativeOptional)
    );
    assert_eq!(profile.policy(&NullabilityKey::primitive("boolean")), None);
}

#[test]
fn TargetProfile___require_mapping___unknown_primitive_fails() {
    let profile = sample_profile();

    let err = profile.require_mapping("decimal").unwrap_err();

    assert_eq!(
        err,
        GenError::UnsupportedPrimitive {
            primitive: "decimal".into(),
            profile: "sample".into(),
        }
    );
}

#[test]
fn TargetProfile___names___apply_case_and_avoid_keywords() {
    let profile = sample_profile();

    assert_eq!(profile.type_name("user_profile"), "UserProfile");
    assert_eq!(profile.field_name("displayName"), "display_name");
    assert_eq!(profile.field_name("type"), "type_");
    assert_eq!(profile.type_name("type"), "Type_");
}

#[test]
fn TargetProfile___file_name___uses_extension() {
    assert_eq!(sample_profile().file_name("NotnullString"), "NotnullString.smp");
}

#[test]
fn TargetProfile___named_type___expands_import_template() {
    let ty = sample_profile().named_type("address");

    assert_eq!(ty.expr, "Address");
    assert_eq!(ty.imports, vec!["models.Address".to_string()]);
}

#[test]
fn TypeTemplate___apply___wraps_expr_and_merges_imports() {
    let syntax = TypeTemplate::new("Optional[{}]").with_import("typing.Optional");
    let inner = TargetType::new("datetime").with_import("datetime.datetime");

    let ty = syntax.apply(&inner);

    assert_eq!(ty.expr, "Optional[datetime]");
    assert_eq!(
        ty.imports,
        vec!["datetime.datetime".to_string(), "typing.Optional".to_string()]
    );
}

#[test]
fn TargetType___with_import___deduplicates() {
    let ty = TargetType::new("X").with_import("a.X").with_import("a.X");

    assert_eq!(ty.imports.len(), 1);
}

#[test]
fn ProfileRegistry___require_unknown___returns_unsupported_target() {
    let registry = ProfileRegistry::new().with(sample_profile());

    let err = registry.require(&ProfileId::from("kotlin")).unwrap_err();

    assert!(err.is_recoverable());
    assert_eq!(
        err,
        GenError::UnsupportedTarget {
            profile: "kotlin".into()
        }
    );
}

#[test]
fn ProfileRegistry___ids___are_sorted() {
    let registry = ProfileRegistry::new()
        .with(TargetProfile::builder("zz", "Z", "z").build())
        .with(sample_profile())
        .with(TargetProfile::builder("aa", "A", "a").build());

    assert_eq!(
        registry.ids(),
        vec![
            ProfileId::from("aa"),
            ProfileId::from("sample"),
            ProfileId::from("zz")
        ]
    );
}

#[test]
fn TargetProfile___variant_name___screams_and_keeps_identifiers_valid() {
    let profile = sample_profile();

    assert_eq!(profile.variant_name("in-progress"), "IN_PROGRESS");
    assert_eq!(profile.variant_name("2fa"), "V2FA");
    assert_eq!(profile.variant_name("light blue"), "LIGHT_BLUE");
    assert_eq!(profile.variant_name("a.b"), "A_B");
    assert_eq!(profile.variant_name(""), "EMPTY");
}

#[test_case("1_", "V1")]
#[test_case("_private_", "PRIVATE")]
#[test_case("-x-", "X")]
#[test_case("__", "EMPTY")]
#[test_case("a__b", "A__B")]
fn TargetProfile___variant_name___never_wrapped_in_underscores(value: &str, expected: &str) {
    let name = sample_profile().variant_name(value);

    assert_eq!(name, expected);
    assert!(!(name.starts_with('_') && name.ends_with('_')));
}

#[test]
fn TargetProfile___type_name___suffixes_reserved_type_names() {
    let profile = TargetProfile::builder("reserving", "R", "r")
        .keywords(["class"])
        .reserved_type_names(["List", "String"])
        .build();

    assert_eq!(profile.type_name("list"), "List_");
    assert_eq!(profile.type_name("string"), "String_");
    assert_eq!(profile.type_name("class"), "Class");
    assert_eq!(profile.type_name("string_list"), "StringList");
    assert_eq!(profile.field_name("list"), "list");
}

#[test]
fn TargetProfile___container_syntax___absent_unless_configured() {
    let bare = sample_profile();
    let listy = TargetProfile::builder("listy", "L", "l")
        .elements_syntax(TypeTemplate::new("List<{}>").with_import("java.util.List"))
        .build();

    assert!(bare.elements_syntax().is_none());
    assert!(bare.values_syntax().is_none());
    assert_eq!(
        listy.elements_syntax().map(|t| t.template.as_str()),
        Some("List<{}>")
    );
}
