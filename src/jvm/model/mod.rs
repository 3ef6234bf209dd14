//! Tree model of a class file
//!
//! Nodes are plain data owned by the caller. Lists that a class file may omit entirely (eg. the
//! `MethodParameters` attribute or annotations) are `Option<Vec<_>>` so that "missing" and
//! "present but empty" stay distinguishable.

mod annotation;
mod attribute;
mod class;
mod code;
mod field;
mod method;
mod type_reference;

pub use annotation::*;
pub use attribute::*;
pub use class::*;
pub use code::*;
pub use field::*;
pub use method::*;
pub use type_reference::*;
