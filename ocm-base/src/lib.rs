#[macro_use]
mod macros;

pub mod codec;
pub mod field_set;
pub mod list;
pub mod object;

// re-export types
pub use codec::CodecError;
pub use field_set::FieldSet;
pub use list::{List, ListBuilder};
pub use object::{Attribute, BuildError, Buildable, ObjectType};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
