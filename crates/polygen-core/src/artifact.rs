//! Emission inputs and outputs.

use crate::profile::ProfileId;
use crate::resolver::ResolvedRepresentation;
use std::path::PathBuf;

/// Directory between the profile id and the caller-supplied category.
pub const OUTPUT_DIR: &str = "output";

/// A field ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Target-language field name.
    pub name: String,

    /// Name on the wire.
    pub json_name: String,

    pub description: String,

    /// Whether the property may be absent on the wire.
    pub optional: bool,

    pub representation: ResolvedRepresentation,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, representation: ResolvedRepresentation) -> Self {
        let name = name.into();
        Self {
            json_name: name.clone(),
            name,
            description: String::new(),
            optional: false,
            representation,
        }
    }

    pub fn json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = json_name.into();
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Type expression the field is declared with.
    pub fn type_expr(&self) -> &str {
        self.representation.type_expr()
    }
}

/// An enum value ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    /// Target-language constant name.
    pub name: String,

    /// The string on the wire.
    pub value: String,

    pub description: String,
}

impl VariantSpec {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: String::new(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Rendered source text for one declared symbol.
///
/// Handed to the writer (or the fixture harness) as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArtifact {
    pub profile: ProfileId,

    /// Declared class/struct name.
    pub symbol: String,

    /// `<Symbol>.<ext>`.
    pub file_name: String,

    pub contents: String,
}

impl EmittedArtifact {
    /// Path below the output root: `<profile-id>/output/<category>/<file>`.
    pub fn relative_path(&self, category: &str) -> PathBuf {
        PathBuf::from(self.profile.as_str())
            .join(OUTPUT_DIR)
            .join(category)
            .join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::profile::TargetType;

    #[test]
    fn EmittedArtifact___relative_path___follows_output_convention() {
        let artifact = EmittedArtifact {
            profile: ProfileId::from("java_jackson"),
            symbol: "NotnullString".into(),
            file_name: "NotnullString.java".into(),
            contents: String::new(),
        };

        let path = artifact.relative_path("nullable_references");

        assert_eq!(
            path,
            PathBuf::from("java_jackson/output/nullable_references/NotnullString.java")
        );
    }

    #[test]
    fn FieldSpec___new___defaults_json_name_to_name() {
        let field = FieldSpec::new(
            "value",
            ResolvedRepresentation::Direct(TargetType::new("String")),
        );

        assert_eq!(field.json_name, "value");
        assert!(!field.optional);
        assert_eq!(field.type_expr(), "String");
    }
}
