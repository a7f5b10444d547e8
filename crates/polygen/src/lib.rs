//! # polygen
//!
//! Schema-driven code generation where every target decides for itself how a
//! nullable type is represented.
//!
//! A language-neutral [`Schema`] is resolved once per target profile: under
//! `java_jackson` a nullable `string` becomes a wire-transparent
//! `NotnullString` wrapper class, under `python` it becomes `Optional[str]`.
//! Schemas may also declare string enums, arrays (`elements`) and string-keyed
//! maps (`values`).
//!
//! ## Quick Start
//!
//! ```
//! use polygen::prelude::*;
//!
//! let schema = Schema::new()
//!     .with_root("root", TypeNode::nullable(TypeNode::primitive("string")));
//! let config = GeneratorConfig::default().with_profiles(["java_jackson"]);
//!
//! let report = polygen::generate(&schema, &config);
//!
//! assert!(report.is_success());
//! assert_eq!(report.artifacts[0].file_name, "NotnullString.java");
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`polygen_core`] - Type IR, resolver, emitter contract and generator
//! - [`polygen_java`] - Java/Jackson backend
//! - [`polygen_python`] - Python/dataclasses backend

use once_cell::sync::Lazy;

pub use polygen_core::{
    Definition, EmittedArtifact, Emitter, EmitterRegistry, EnumDef, EnumVariant, Failure,
    FieldDef, FieldSpec, FilePartitioning, GenError, GenResult, GenerationReport, Generator,
    GeneratorConfig, NullabilityKey, NullabilityPolicy, OUTPUT_DIR, PRIMITIVE_KINDS, ProfileId,
    ProfileRegistry, RecordDef, ResolvedRepresentation, Resolver, RootDef, Schema, TargetProfile,
    TargetType, TypeMapping, TypeNode, TypeTemplate, VariantSpec,
};
pub use polygen_core::{config, ir, naming, profile, resolver};
pub use polygen_java::{JacksonEmitter, jackson_profile};
pub use polygen_python::{DataclassEmitter, python_profile};

static BUILTIN_PROFILES: Lazy<ProfileRegistry> = Lazy::new(|| {
    ProfileRegistry::new()
        .with(jackson_profile())
        .with(python_profile())
});

/// Every profile shipped with polygen.
pub fn builtin_profiles() -> &'static ProfileRegistry {
    &BUILTIN_PROFILES
}

/// An emitter for each builtin profile, configured from `config`.
pub fn builtin_emitters(config: &GeneratorConfig) -> EmitterRegistry {
    EmitterRegistry::new()
        .with(JacksonEmitter::new(config.package.clone()))
        .with(DataclassEmitter::new())
}

/// Generate `schema` with the builtin profiles and emitters.
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> GenerationReport {
    let emitters = builtin_emitters(config);
    tracing::debug!(
        profiles = ?config.profiles,
        package = %config.package,
        "generating with builtin targets"
    );
    Generator::new(schema, builtin_profiles(), &emitters, config).run()
}

/// Prelude module for convenient imports.
///
/// Use `use polygen::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        EmittedArtifact, EnumDef, FieldDef, GenError, GenerationReport, Generator,
        GeneratorConfig, NullabilityPolicy, ProfileId, RecordDef, ResolvedRepresentation, Schema,
        TypeNode, builtin_emitters, builtin_profiles,
    };
}
