//! polygen-python - Python/dataclasses backend
//!
//! - [`python_profile`] builds the `python` [`TargetProfile`](polygen_core::TargetProfile)
//! - [`DataclassEmitter`] renders resolved types into `@dataclass` and `Enum`
//!   classes, bundled into one `__init__.py` per run

pub mod dataclass;
mod emitter;
pub mod imports;
mod profile;

pub use dataclass::{PyClass, PyEnum, PyField, PyMember, Shape};
pub use emitter::{DataclassEmitter, MODULE_FILE};
pub use imports::ImportSet;
pub use profile::{PROFILE_ID, PYTHON_KEYWORDS, map_primitive, python_profile};
