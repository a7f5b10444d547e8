//! JVM type mappings and the `java_jackson` profile.
//!
//! # Type Mappings
//!
//! | Kind | Java (direct) | Java (nullable) |
//! |------|---------------|-----------------|
//! | `boolean` | `boolean` | `Boolean` |
//! | `string` | `String` | `String` |
//! | `timestamp` | `OffsetDateTime` | `OffsetDateTime` |
//! | `int8` | `byte` | `Byte` |
//! | `uint8` | `short` | `Short` |
//! | `int16` | `short` | `Short` |
//! | `uint16` | `int` | `Integer` |
//! | `int32` | `int` | `Integer` |
//! | `uint32` | `long` | `Long` |
//! | `float32` | `float` | `Float` |
//! | `float64` | `double` | `Double` |
//!
//! Unsigned kinds widen to the next signed type so every value fits.
//! Every nullable primitive becomes a `Notnull<Kind>` wrapper class; nullable
//! references to records and enums use the class itself, which admits null.
//! Arrays are `List<T>` and maps `Map<String, T>` over the boxed item type;
//! both are references, so their nullable form is the same type.

use polygen_core::naming::Case;
use polygen_core::{
    NullabilityKey, NullabilityPolicy, TargetProfile, TargetType, TypeMapping, TypeTemplate,
};

/// Id of the Java/Jackson profile.
pub const PROFILE_ID: &str = "java_jackson";

/// Reserved words a generated identifier must not collide with.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// Types generated files refer to by simple name: `java.lang` types the
/// mappings use, the imported collection and time types, and the Jackson
/// annotations. A class with one of these names would shadow or clash with
/// the import.
pub const JAVA_RESERVED_TYPES: &[&str] = &[
    "Boolean", "Byte", "Character", "Double", "Float", "Integer", "Long", "Object", "Short",
    "String", "List", "Map", "OffsetDateTime", "JsonCreator", "JsonIgnoreProperties",
    "JsonInclude", "JsonProperty", "JsonValue",
];

/// Represents a JVM type with both primitive and boxed forms.
#[derive(Debug, Clone, PartialEq)]
pub struct JvmType {
    /// The primitive type name (e.g., "int", "boolean") or reference type name.
    pub primitive: String,
    /// The boxed/nullable type name (e.g., "Integer", "Boolean").
    pub boxed: String,
    /// Fully qualified import, for types outside `java.lang`.
    pub import: Option<String>,
}

impl JvmType {
    /// A reference type; its direct form already admits null.
    pub fn reference(name: &str) -> Self {
        Self {
            primitive: name.to_string(),
            boxed: name.to_string(),
            import: None,
        }
    }

    /// A JVM primitive and its box.
    pub fn primitive(primitive: &str, boxed: &str) -> Self {
        Self {
            primitive: primitive.to_string(),
            boxed: boxed.to_string(),
            import: None,
        }
    }

    pub fn imported(mut self, import: &str) -> Self {
        self.import = Some(import.to_string());
        self
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive != self.boxed
    }

    /// Convert into the profile's mapping.
    pub fn mapping(&self) -> TypeMapping {
        let with_import = |name: &str| {
            let ty = TargetType::new(name);
            match &self.import {
                Some(import) => ty.with_import(import.clone()),
                None => ty,
            }
        };
        TypeMapping::boxed(with_import(&self.primitive), with_import(&self.boxed))
    }
}

/// Map a primitive kind to its JVM type.
pub fn map_primitive(kind: &str) -> Option<JvmType> {
    let ty = match kind {
        "boolean" => JvmType::primitive("boolean", "Boolean"),
        "string" => JvmType::reference("String"),
        "timestamp" => JvmType::reference("OffsetDateTime").imported("java.time.OffsetDateTime"),
        "int8" => JvmType::primitive("byte", "Byte"),
        "uint8" | "int16" => JvmType::primitive("short", "Short"),
        "uint16" | "int32" => JvmType::primitive("int", "Integer"),
        "uint32" => JvmType::primitive("long", "Long"),
        "float32" => JvmType::primitive("float", "Float"),
        "float64" => JvmType::primitive("double", "Double"),
        _ => return None,
    };
    Some(ty)
}

/// Build the `java_jackson` profile.
pub fn jackson_profile() -> TargetProfile {
    let mut builder = TargetProfile::builder(PROFILE_ID, "Java", "Jackson")
        .file_extension("java")
        .naming(Case::Pascal, Case::Camel)
        .variant_naming(Case::ScreamingSnake)
        .keywords(JAVA_KEYWORDS.iter().copied())
        .reserved_type_names(JAVA_RESERVED_TYPES.iter().copied());

    for kind in polygen_core::PRIMITIVE_KINDS {
        if let Some(ty) = map_primitive(kind) {
            builder = builder.primitive(kind, ty.mapping());
        }
    }

    builder
        .nullability_for_all_primitives(NullabilityPolicy::WrapperClass)
        .nullability(NullabilityKey::Named, NullabilityPolicy::NativeNullable)
        .nullability(NullabilityKey::Elements, NullabilityPolicy::NativeNullable)
        .nullability(NullabilityKey::Values, NullabilityPolicy::NativeNullable)
        .elements_syntax(TypeTemplate::new("List<{}>").with_import("java.util.List"))
        .values_syntax(TypeTemplate::new("Map<String, {}>").with_import("java.util.Map"))
        .build()
}
