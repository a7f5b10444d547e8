//! Dataclass emitter for the `python` profile.

use crate::dataclass::{self, PyClass, PyEnum, PyField, PyMember, Shape, WRAPPED_VALUE_DOC};
use crate::imports::ImportSet;
use crate::profile::PROFILE_ID;
use polygen_core::{
    EmittedArtifact, Emitter, FieldSpec, FilePartitioning, GenError, GenResult, ProfileId,
    ResolvedRepresentation, VariantSpec, single_value_field,
};

/// Name of the module every class of a run is bundled into.
pub const MODULE_FILE: &str = "__init__.py";

/// Renders each class on its own, then bundles them into one package module.
#[derive(Debug, Clone)]
pub struct DataclassEmitter {
    profile: ProfileId,
    preamble: ImportSet,
}

impl DataclassEmitter {
    pub fn new() -> Self {
        Self {
            profile: ProfileId::from(PROFILE_ID),
            preamble: ImportSet::preamble(),
        }
    }

    /// Types are referenced through the module preamble only, so an import
    /// outside it would leave a name undefined.
    fn py_field(&self, symbol: &str, spec: &FieldSpec) -> GenResult<PyField> {
        let imports = spec.representation.imports();
        if !self.preamble.covers(imports.iter().map(String::as_str)) {
            return Err(GenError::emission(
                symbol,
                format!(
                    "field `{}` needs imports outside the module preamble: {}",
                    spec.name,
                    imports.join(", ")
                ),
            ));
        }

        Ok(PyField {
            name: spec.name.clone(),
            json_name: spec.json_name.clone(),
            annotation: spec.type_expr().to_string(),
            description: spec.description.clone(),
            optional: spec.optional,
        })
    }

    fn artifact(&self, symbol: &str, contents: String) -> EmittedArtifact {
        EmittedArtifact {
            profile: self.profile.clone(),
            symbol: symbol.to_string(),
            file_name: format!("{symbol}.py"),
            contents,
        }
    }
}

impl Default for DataclassEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for DataclassEmitter {
    fn profile_id(&self) -> &ProfileId {
        &self.profile
    }

    fn partitioning(&self) -> FilePartitioning {
        FilePartitioning::SingleFile(MODULE_FILE.to_string())
    }

    /// The class description comes from the field; the attribute itself is
    /// documented as the wrapped value.
    fn emit(
        &self,
        name: &str,
        representation: &ResolvedRepresentation,
        fields: &[FieldSpec],
    ) -> GenResult<EmittedArtifact> {
        let spec = single_value_field(name, representation, fields)?;
        tracing::debug!(
            symbol = name,
            representation = representation.kind(),
            "emitting python value class"
        );

        let field = PyField {
            description: WRAPPED_VALUE_DOC.to_string(),
            ..self.py_field(name, spec)?
        };
        let class = PyClass::new(name, Shape::Transparent)
            .described(spec.description.clone())
            .field(field);

        Ok(self.artifact(name, class.render()))
    }

    /// `from_json` reads declared keys only, so unknown properties are
    /// ignored whether or not the record is `additional`.
    fn emit_record(
        &self,
        name: &str,
        description: &str,
        _additional: bool,
        fields: &[FieldSpec],
    ) -> GenResult<EmittedArtifact> {
        tracing::debug!(symbol = name, fields = fields.len(), "emitting python record");

        let mut class = PyClass::new(name, Shape::Record).described(description);
        for spec in fields {
            class = class.field(self.py_field(name, spec)?);
        }

        Ok(self.artifact(name, class.render()))
    }

    fn emit_enum(
        &self,
        name: &str,
        description: &str,
        variants: &[VariantSpec],
    ) -> GenResult<EmittedArtifact> {
        tracing::debug!(symbol = name, variants = variants.len(), "emitting python enum");

        let class = variants.iter().fold(
            PyEnum::new(name).described(description),
            |class, variant| {
                class.member(PyMember {
                    name: variant.name.clone(),
                    value: variant.value.clone(),
                    description: variant.description.clone(),
                })
            },
        );

        Ok(self.artifact(name, class.render()))
    }

    fn bundle(&self, parts: &[EmittedArtifact]) -> GenResult<EmittedArtifact> {
        let contents = dataclass::module(parts.iter().map(|part| part.contents.as_str()));

        Ok(EmittedArtifact {
            profile: self.profile.clone(),
            symbol: "__init__".to_string(),
            file_name: MODULE_FILE.to_string(),
            contents,
        })
    }
}
