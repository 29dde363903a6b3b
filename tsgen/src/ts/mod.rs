//! TypeScript declaration emitters.
//!
//! Pure string-producing functions over in-memory descriptors: the type
//! mapper, the model emitter, and the enum emitter. No I/O happens here;
//! callers assemble the returned fragments into an artifact.

pub mod annotations;
pub mod enums;
pub mod model;
pub mod type_map;

pub use annotations::TypeAnnotation;
pub use enums::enum_declaration;
pub use model::model_declaration;
pub use type_map::{scalar_type, CustomType};
