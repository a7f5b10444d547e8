//! The `python` profile.
//!
//! | Kind | Python |
//! |------|--------|
//! | `boolean` | `bool` |
//! | `string` | `str` |
//! | `timestamp` | `datetime` |
//! | integer kinds | `int` |
//! | `float32`, `float64` | `float` |
//!
//! Every nullable type becomes `Optional[T]`, arrays `List[T]` and maps
//! `Dict[str, T]`. Records are referenced by bare name: they share one module,
//! so a definition named like a preamble import is renamed.

use crate::imports::PREAMBLE_IMPORTS;
use polygen_core::naming::Case;
use polygen_core::{
    NullabilityKey, NullabilityPolicy, TargetProfile, TargetType, TypeMapping, TypeTemplate,
};

/// Id of the Python profile.
pub const PROFILE_ID: &str = "python";

/// Reserved words and builtins a generated identifier must not shadow.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield", "bool", "dict", "float", "int", "list", "str", "type",
];

/// Python type of a primitive kind.
pub fn map_primitive(kind: &str) -> Option<TargetType> {
    let ty = match kind {
        "boolean" => TargetType::new("bool"),
        "string" => TargetType::new("str"),
        "timestamp" => TargetType::new("datetime").with_import("datetime.datetime"),
        "int8" | "uint8" | "int16" | "uint16" | "int32" | "uint32" => TargetType::new("int"),
        "float32" | "float64" => TargetType::new("float"),
        _ => return None,
    };
    Some(ty)
}

/// Build the `python` profile.
pub fn python_profile() -> TargetProfile {
    let mut builder = TargetProfile::builder(PROFILE_ID, "Python", "dataclasses")
        .file_extension("py")
        .naming(Case::Pascal, Case::Snake)
        .keywords(PYTHON_KEYWORDS.iter().copied())
        .reserved_type_names(PREAMBLE_IMPORTS.iter().filter_map(|path| path.rsplit('.').next()))
        .variant_naming(Case::ScreamingSnake);

    for kind in polygen_core::PRIMITIVE_KINDS {
        if let Some(ty) = map_primitive(kind) {
            builder = builder.primitive(kind, TypeMapping::reference(ty));
        }
    }

    builder
        .nullability_for_all_primitives(NullabilityPolicy::NativeOptional)
        .nullability(NullabilityKey::Named, NullabilityPolicy::NativeOptional)
        .nullability(NullabilityKey::Elements, NullabilityPolicy::NativeOptional)
        .nullability(NullabilityKey::Values, NullabilityPolicy::NativeOptional)
        .optional_syntax(TypeTemplate::new("Optional[{}]").with_import("typing.Optional"))
        .elements_syntax(TypeTemplate::new("List[{}]").with_import("typing.List"))
        .values_syntax(TypeTemplate::new("Dict[str, {}]").with_import("typing.Dict"))
        .build()
}
