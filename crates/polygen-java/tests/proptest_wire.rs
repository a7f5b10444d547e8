//! Property-based tests for wire transparency of Jackson wrappers
//!
//! A `Notnull<Kind>` wrapper must serialize as the bare value it holds and
//! accept the bare value back, so a field typed by the wrapper has the same
//! JSON shape as the unwrapped kind. Values are drawn from each kind's own
//! domain, and the wire model rejects values of the wrong type.

use polygen_core::{FieldSpec, PRIMITIVE_KINDS, ResolvedRepresentation, Resolver, TypeNode};
use polygen_java::wire::{self, Instance, WireError};
use polygen_java::{JacksonEmitter, JavaClass, jackson_profile, map_primitive};
use proptest::prelude::*;
use serde_json::{Value, json};

fn wrapper_class(kind: &str) -> JavaClass {
    let profile = jackson_profile();
    let repr = Resolver::new()
        .resolve(&TypeNode::nullable(TypeNode::primitive(kind)), &profile)
        .unwrap();
    let ResolvedRepresentation::WrapperClass { inner, .. } = &repr else {
        panic!("expected wrapper, got {repr:?}");
    };
    let field = FieldSpec::new("value", ResolvedRepresentation::Direct(inner.clone()));
    JacksonEmitter::new("com.example").value_class(repr.type_expr(), &field)
}

fn assert_round_trip(kind: &str, wire_value: Value) -> Result<(), TestCaseError> {
    let class = wrapper_class(kind);

    let instance = wire::read(&class, &wire_value).unwrap();
    let written = wire::write(&class, &instance);

    prop_assert_eq!(written, wire_value);
    Ok(())
}

fn arb_timestamp() -> impl Strategy<Value = String> {
    (1970u32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}Z"),
    )
}

proptest! {
    /// Property: any string deserialized into the wrapper serializes back unchanged
    #[test]
    fn proptest_string_wrapper_round_trips(text in ".*") {
        assert_round_trip("string", Value::String(text))?;
    }

    #[test]
    fn proptest_boolean_wrapper_round_trips(flag in any::<bool>()) {
        assert_round_trip("boolean", json!(flag))?;
    }

    #[test]
    fn proptest_int8_wrapper_round_trips(n in any::<i8>()) {
        assert_round_trip("int8", json!(n))?;
    }

    #[test]
    fn proptest_uint8_wrapper_round_trips(n in any::<u8>()) {
        assert_round_trip("uint8", json!(n))?;
    }

    #[test]
    fn proptest_int16_wrapper_round_trips(n in any::<i16>()) {
        assert_round_trip("int16", json!(n))?;
    }

    #[test]
    fn proptest_uint16_wrapper_round_trips(n in any::<u16>()) {
        assert_round_trip("uint16", json!(n))?;
    }

    #[test]
    fn proptest_int32_wrapper_round_trips(n in any::<i32>()) {
        assert_round_trip("int32", json!(n))?;
    }

    #[test]
    fn proptest_uint32_wrapper_round_trips(n in any::<u32>()) {
        assert_round_trip("uint32", json!(n))?;
    }

    #[test]
    fn proptest_float32_wrapper_round_trips(x in any::<f32>().prop_filter("finite", |x| x.is_finite())) {
        assert_round_trip("float32", json!(x))?;
    }

    #[test]
    fn proptest_float64_wrapper_round_trips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        assert_round_trip("float64", json!(x))?;
    }

    #[test]
    fn proptest_timestamp_wrapper_round_trips(stamp in arb_timestamp()) {
        assert_round_trip("timestamp", json!(stamp))?;
    }

    /// Property: the wrapper never introduces an object envelope
    #[test]
    fn proptest_wrapper_output_is_not_an_object(text in ".*") {
        let class = wrapper_class("string");
        let mut instance = Instance::default();
        instance.fields.insert("value".into(), json!(text.clone()));

        let written = wire::write(&class, &instance);

        prop_assert!(!written.is_object());
        prop_assert_eq!(written, json!(text));
    }

    /// Property: a numeric wrapper refuses strings instead of holding them
    #[test]
    fn proptest_int32_wrapper_rejects_strings(text in ".*") {
        let class = wrapper_class("int32");

        let result = wire::read(&class, &Value::String(text));

        let is_type_mismatch = matches!(result, Err(WireError::TypeMismatch { .. }));
        prop_assert!(is_type_mismatch);
    }
}

#[test]
fn test_wrapper_field_holds_boxed_type_for_every_kind() {
    for kind in PRIMITIVE_KINDS {
        let class = wrapper_class(kind);
        let jvm = map_primitive(kind).unwrap();

        let field = class.value_field().unwrap();

        assert_eq!(field.type_, jvm.boxed, "kind `{kind}`");
        assert_eq!(class.creator().unwrap().params[0].0, jvm.boxed);
    }
}

#[test]
fn test_wrapper_round_trips_null() {
    for kind in PRIMITIVE_KINDS {
        let class = wrapper_class(kind);

        let instance = wire::read(&class, &Value::Null).unwrap();

        assert_eq!(wire::write(&class, &instance), Value::Null);
    }
}

#[test]
fn test_narrow_wrapper_rejects_out_of_range_numbers() {
    let class = wrapper_class("int8");

    assert!(wire::read(&class, &json!(127)).is_ok());
    assert!(wire::read(&class, &json!(128)).is_err());
}
