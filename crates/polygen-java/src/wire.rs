//! A model of how Jackson maps a generated class to and from JSON.
//!
//! Only the annotations this backend emits are modelled:
//!
//! - a `@JsonValue` field makes the class serialize as that field's value;
//! - a one-argument `@JsonCreator` constructor makes it deserialize from a
//!   bare value (delegating mode);
//! - otherwise a class reads and writes an object of its `@JsonProperty`
//!   fields, and `@JsonInclude(NON_NULL)` fields are omitted while null;
//! - `@JsonIgnoreProperties(ignoreUnknown = true)` skips unknown properties.
//!
//! Reading checks each value against the declared Java type the way Jackson's
//! standard deserializers do: numbers must fit the target width, JVM
//! primitives reject null, and classes this model does not know accept any
//! value.
//!
//! It lets tests check wire transparency of emitted classes without a JVM.

use crate::model::{Annotation, JavaClass, JavaField};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Error raised while mapping a value through a class.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// A property-based class was given something other than an object
    #[error("`{class}` expects a JSON object")]
    NotAnObject { class: String },

    /// The object carries a property with no matching field
    #[error("unrecognized field `{property}` for `{class}`")]
    UnknownProperty { class: String, property: String },

    /// A value does not fit the declared type of its field
    #[error("cannot read `{value}` into `{class}.{field}` of type `{java_type}`")]
    TypeMismatch {
        class: String,
        field: String,
        java_type: String,
        value: Value,
    },
}

/// Whether Jackson would bind `value` to a field of `java_type`.
pub fn accepts(java_type: &str, value: &Value) -> bool {
    let base = java_type.split('<').next().unwrap_or(java_type);
    let signed = |min: i64, max: i64| value.as_i64().is_some_and(|n| (min..=max).contains(&n));

    match (base, value) {
        ("boolean" | "byte" | "short" | "int" | "long" | "float" | "double", Value::Null) => {
            false
        }
        (_, Value::Null) => true,
        ("boolean" | "Boolean", v) => v.is_boolean(),
        ("byte" | "Byte", _) => signed(i8::MIN.into(), i8::MAX.into()),
        ("short" | "Short", _) => signed(i16::MIN.into(), i16::MAX.into()),
        ("int" | "Integer", _) => signed(i32::MIN.into(), i32::MAX.into()),
        ("long" | "Long", _) => value.is_i64(),
        ("float" | "Float" | "double" | "Double", v) => v.is_number(),
        ("String" | "OffsetDateTime", v) => v.is_string(),
        ("List", v) => v.is_array(),
        ("Map", v) => v.is_object(),
        _ => true,
    }
}

fn check(class: &JavaClass, field: &JavaField, value: &Value) -> Result<(), WireError> {
    if accepts(&field.type_, value) {
        Ok(())
    } else {
        Err(WireError::TypeMismatch {
            class: class.name.clone(),
            field: field.name.clone(),
            java_type: field.type_.clone(),
            value: value.clone(),
        })
    }
}

/// Field values of one instance, keyed by Java field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    pub fields: BTreeMap<String, Value>,
}

impl Instance {
    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&Value::Null)
    }
}

/// Deserialize `wire` into an instance of `class`.
pub fn read(class: &JavaClass, wire: &Value) -> Result<Instance, WireError> {
    if let Some(creator) = class.creator()
        && let [(_, param)] = creator.params.as_slice()
    {
        if let Some(field) = class.fields.iter().find(|f| &f.name == param) {
            check(class, field, wire)?;
        }
        let mut instance = Instance::default();
        instance.fields.insert(param.clone(), wire.clone());
        return Ok(instance);
    }

    let Value::Object(object) = wire else {
        return Err(WireError::NotAnObject {
            class: class.name.clone(),
        });
    };

    let ignore_unknown = class.annotations.contains(&Annotation::JsonIgnoreUnknown);
    let mut instance = Instance::default();
    for (property, value) in object {
        let Some(field) = class.fields.iter().find(|f| f.property_name() == property) else {
            if ignore_unknown {
                continue;
            }
            return Err(WireError::UnknownProperty {
                class: class.name.clone(),
                property: property.clone(),
            });
        };
        check(class, field, value)?;
        instance.fields.insert(field.name.clone(), value.clone());
    }
    Ok(instance)
}

/// Serialize an instance of `class`.
pub fn write(class: &JavaClass, instance: &Instance) -> Value {
    if let Some(field) = class.value_field() {
        return instance.get(&field.name).clone();
    }

    let mut object = Map::new();
    for field in &class.fields {
        let value = instance.get(&field.name);
        if value.is_null() && field.has(&Annotation::JsonIncludeNonNull) {
            continue;
        }
        object.insert(field.property_name().to_string(), value.clone());
    }
    Value::Object(object)
}
