//! polygen-core - Type IR, nullability resolution and emitter contracts
//!
//! This crate holds everything that is independent of a target language:
//! - [`TypeNode`] and the record/enum/root definitions of an input [`Schema`]
//! - [`TargetProfile`] tables describing a (language, library) pair
//! - [`Resolver`] for choosing how a nullable type is represented
//! - [`Emitter`] trait implemented by each backend
//! - [`Generator`] driving a run and collecting a [`GenerationReport`]

pub mod artifact;
pub mod config;
pub mod emitter;
mod error;
pub mod generator;
pub mod ir;
pub mod naming;
pub mod profile;
pub mod resolver;
pub mod symbols;

pub use artifact::{EmittedArtifact, FieldSpec, OUTPUT_DIR, VariantSpec};
pub use config::GeneratorConfig;
pub use emitter::{Emitter, EmitterRegistry, FilePartitioning, single_value_field};
pub use error::{GenError, GenResult};
pub use generator::{Failure, GenerationReport, Generator};
pub use ir::{EnumDef, EnumVariant, FieldDef, RecordDef, RootDef, Schema, TypeNode};
pub use profile::{
    NullabilityKey, NullabilityPolicy, ProfileId, ProfileRegistry, TargetProfile,
    TargetProfileBuilder, TargetType, TypeMapping, TypeTemplate,
};
pub use resolver::{ResolvedRepresentation, Resolver, ResolverStats};
pub use symbols::{Definition, DefinitionId, SymbolTable};

/// Primitive kinds every builtin profile maps.
pub const PRIMITIVE_KINDS: [&str; 11] = [
    "boolean",
    "string",
    "timestamp",
    "int8",
    "uint8",
    "int16",
    "uint16",
    "int32",
    "uint32",
    "float32",
    "float64",
];

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EmittedArtifact, Emitter, EmitterRegistry, EnumDef, FieldDef, FieldSpec, GenError,
        GenResult, GenerationReport, Generator, GeneratorConfig, NullabilityPolicy, ProfileId,
        ProfileRegistry, RecordDef, ResolvedRepresentation, Resolver, Schema, TargetProfile,
        TypeNode,
    };
}
