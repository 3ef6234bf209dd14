//! Resolution of label identities
//!
//! Labels are compared by index ([`LabelIndexLookup`]) and rendered by name
//! ([`LabelNameLookup`]). The two are independent: overriding the names never changes the
//! outcome of a comparison.

mod filter;
mod index;
mod names;

pub use filter::*;
pub use index::*;
pub use names::*;
