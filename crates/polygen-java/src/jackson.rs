//! Jackson emitter for the `java_jackson` profile.

use crate::jvm_types::PROFILE_ID;
use crate::model::{
    Annotation, JavaClass, JavaConstructor, JavaEnum, JavaEnumConstant, JavaField,
};
use polygen_core::{
    EmittedArtifact, Emitter, FieldSpec, GenResult, ProfileId, ResolvedRepresentation,
    VariantSpec, single_value_field,
};

/// Renders Jackson-annotated Java classes, one file per class.
#[derive(Debug, Clone)]
pub struct JacksonEmitter {
    profile: ProfileId,
    package: String,
}

impl JacksonEmitter {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            profile: ProfileId::from(PROFILE_ID),
            package: package.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// A single-value class whose wire form is the bare value.
    ///
    /// The field is the serialization entry point and the one-argument
    /// constructor the deserialization entry point.
    pub fn value_class(&self, name: &str, field: &FieldSpec) -> JavaClass {
        let value = JavaField::new(field.type_expr(), field.name.clone())
            .annotated(Annotation::JsonValue);

        JavaClass::new(self.package.clone(), name)
            .described(field.description.clone())
            .import(field.representation.imports().iter().cloned())
            .constructor(JavaConstructor::empty())
            .constructor(JavaConstructor::assigning(&value).annotated(Annotation::JsonCreator))
            .field(value)
    }

    /// A bean with one `@JsonProperty` field per property.
    pub fn record_class(
        &self,
        name: &str,
        description: &str,
        additional: bool,
        fields: &[FieldSpec],
    ) -> JavaClass {
        let mut class = JavaClass::new(self.package.clone(), name)
            .described(description)
            .constructor(JavaConstructor::empty());
        if additional {
            class = class.annotated(Annotation::JsonIgnoreUnknown);
        }

        for spec in fields {
            let mut field = JavaField::new(spec.type_expr(), spec.name.clone())
                .annotated(Annotation::JsonProperty(spec.json_name.clone()))
                .documented(&spec.description);
            if spec.optional {
                field = field.annotated(Annotation::JsonIncludeNonNull);
            }
            class = class
                .import(spec.representation.imports().iter().cloned())
                .field(field);
        }

        class
    }

    /// An enum with one `@JsonProperty` constant per value.
    pub fn enum_class(
        &self,
        name: &str,
        description: &str,
        variants: &[VariantSpec],
    ) -> JavaEnum {
        variants.iter().fold(
            JavaEnum::new(self.package.clone(), name).described(description),
            |enum_, variant| {
                enum_.constant(
                    JavaEnumConstant::new(variant.name.clone(), variant.value.clone())
                        .documented(&variant.description),
                )
            },
        )
    }

    fn artifact(&self, name: &str, contents: String) -> EmittedArtifact {
        EmittedArtifact {
            profile: self.profile.clone(),
            symbol: name.to_string(),
            file_name: format!("{name}.java"),
            contents,
        }
    }
}

impl Emitter for JacksonEmitter {
    fn profile_id(&self) -> &ProfileId {
        &self.profile
    }

    fn emit(
        &self,
        name: &str,
        representation: &ResolvedRepresentation,
        fields: &[FieldSpec],
    ) -> GenResult<EmittedArtifact> {
        let field = single_value_field(name, representation, fields)?;
        tracing::debug!(
            symbol = name,
            representation = representation.kind(),
            "emitting java value class"
        );
        Ok(self.artifact(name, self.value_class(name, field).render()))
    }

    fn emit_record(
        &self,
        name: &str,
        description: &str,
        additional: bool,
        fields: &[FieldSpec],
    ) -> GenResult<EmittedArtifact> {
        tracing::debug!(symbol = name, fields = fields.len(), "emitting java record");
        let class = self.record_class(name, description, additional, fields);
        Ok(self.artifact(name, class.render()))
    }

    fn emit_enum(
        &self,
        name: &str,
        description: &str,
        variants: &[VariantSpec],
    ) -> GenResult<EmittedArtifact> {
        tracing::debug!(symbol = name, variants = variants.len(), "emitting java enum");
        Ok(self.artifact(name, self.enum_class(name, description, variants).render()))
    }
}
