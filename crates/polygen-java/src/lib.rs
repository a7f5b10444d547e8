//! polygen-java - Java/Jackson backend
//!
//! - [`jackson_profile`] builds the `java_jackson` [`TargetProfile`](polygen_core::TargetProfile)
//! - [`JacksonEmitter`] renders resolved types into Java source
//! - [`model`] is the class model the emitter renders from
//! - [`wire`] models Jackson's mapping of that class to and from JSON

mod jackson;
pub mod jvm_types;
pub mod model;
pub mod wire;

pub use jackson::JacksonEmitter;
pub use jvm_types::{
    JAVA_KEYWORDS, JAVA_RESERVED_TYPES, JvmType, PROFILE_ID, jackson_profile, map_primitive,
};
pub use model::{Annotation, JavaClass, JavaConstructor, JavaEnum, JavaEnumConstant, JavaField};
