//! JVM class tree model
//!
//! ### Simple example
//!
//! Consider the following Java class:
//!
//! ```java,ignore,no_run
//! public class A {
//!     int m() {
//!         return 1;
//!     }
//! }
//! ```
//!
//! The analogous tree can be built as follows:
//!
//! ```
//! use jvm_assert::jvm::model::{ClassNode, Instruction, MethodNode};
//! use jvm_assert::jvm::{opcodes, ClassAccessFlags, Label};
//!
//! let access = ClassAccessFlags::PUBLIC.bits();
//! let mut class = ClassNode::new(52, access, "A", Some("java/lang/Object"));
//!
//! let start = Label::new();
//! let mut method = MethodNode::new(0, "m", "()I");
//! method.instructions = vec![
//!     Instruction::Label(start),
//!     Instruction::LineNumber { line: 3, start },
//!     Instruction::Plain(opcodes::ICONST_1),
//!     Instruction::Plain(opcodes::IRETURN),
//! ];
//! method.max_stack = 1;
//! method.max_locals = 1;
//! class.methods.push(method);
//! ```

mod access;
mod access_flags;
mod descriptors;
mod label;
pub mod model;
pub mod opcodes;

pub use access::*;
pub use access_flags::*;
pub use descriptors::*;
pub use label::*;
