//! Structural equality of nodes, with a crumb trail to the first difference
//!
//! ### Simple example
//!
//! ```
//! use jvm_assert::assert::{assert_that_method, AssertOption};
//! use jvm_assert::jvm::model::{Instruction, MethodNode};
//! use jvm_assert::jvm::{opcodes, Label};
//!
//! fn build(constant: u8) -> MethodNode {
//!     let start = Label::new();
//!     let mut method = MethodNode::new(0, "m", "()I");
//!     method.instructions = vec![
//!         Instruction::Label(start),
//!         Instruction::Plain(constant),
//!         Instruction::Plain(opcodes::IRETURN),
//!     ];
//!     method
//! }
//!
//! // Labels differ in identity, but sit at the same positions
//! assert_that_method(&build(opcodes::ICONST_1)).is_equal_to(&build(opcodes::ICONST_1));
//!
//! let err = assert_that_method(&build(opcodes::ICONST_1))
//!     .check(&build(opcodes::ICONST_2))
//!     .unwrap_err();
//! assert!(err.to_string().starts_with("[Method: m()I > Has equal instructions] \n"));
//!
//! assert_that_method(&build(opcodes::ICONST_1))
//!     .add_option(AssertOption::IgnoreInstructions)
//!     .is_equal_to(&build(opcodes::ICONST_2));
//! ```

mod annotations;
mod code;
mod crumbs;
mod errors;
mod fields;
mod iterable;
mod members;
mod node;
mod options;
mod settings;

pub use code::check_instructions;
pub use crumbs::*;
pub use errors::*;
pub use fields::ShowValue;
pub use iterable::*;
pub use node::*;
pub use options::*;
pub use settings::*;

use crate::compare::NodeOrd;
use crate::context::Context;
use crate::jvm::model::{
    AnnotationNode, Attribute, ClassNode, FieldNode, InnerClassNode, Instruction,
    LocalVariableNode, MethodNode, ParameterNode, TryCatchBlockNode, TypeAnnotationNode,
    TypeReference,
};
use crate::jvm::{AccessNode, Label};
use crate::repr::Textify;

/// Node kind which can be checked for structural equality
///
/// Checks are fail-fast: the first difference is returned, with the crumbs leading to it.
pub trait StructuralEq: NodeOrd + Textify + 'static {
    fn check_equal(
        &self,
        expected: &Self,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure>;
}

/// Title of a node in a crumb trail (eg. `Method: m()I`)
pub fn describe<T: Textify + 'static>(node: &T, ctx: &Context<'_>) -> String {
    format!("{}: {}", T::kind_name(), ctx.simplified_repr_of(node))
}

pub fn assert_that_class(actual: &ClassNode) -> NodeAssert<'_, ClassNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_method(actual: &MethodNode) -> NodeAssert<'_, MethodNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_field(actual: &FieldNode) -> NodeAssert<'_, FieldNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_annotation(actual: &AnnotationNode) -> NodeAssert<'_, AnnotationNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_type_annotation(
    actual: &TypeAnnotationNode,
) -> NodeAssert<'_, TypeAnnotationNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_type_reference(actual: &TypeReference) -> NodeAssert<'_, TypeReference> {
    NodeAssert::new(actual)
}

pub fn assert_that_try_catch_block(
    actual: &TryCatchBlockNode,
) -> NodeAssert<'_, TryCatchBlockNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_local_variable(actual: &LocalVariableNode) -> NodeAssert<'_, LocalVariableNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_parameter(actual: &ParameterNode) -> NodeAssert<'_, ParameterNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_inner_class(actual: &InnerClassNode) -> NodeAssert<'_, InnerClassNode> {
    NodeAssert::new(actual)
}

pub fn assert_that_attribute(actual: &Attribute) -> NodeAssert<'_, Attribute> {
    NodeAssert::new(actual)
}

pub fn assert_that_access(actual: &AccessNode) -> NodeAssert<'_, AccessNode> {
    NodeAssert::new(actual)
}

/// A single instruction has no label context, so without a lookup its labels are unresolved and
/// match any other label
pub fn assert_that_instruction(actual: &Instruction) -> NodeAssert<'_, Instruction> {
    NodeAssert::new(actual)
}

pub fn assert_that_instructions(actual: &[Instruction]) -> InstructionsAssert<'_> {
    InstructionsAssert::new(actual)
}

pub fn assert_that_label(actual: &Label) -> NodeAssert<'_, Label> {
    NodeAssert::new(actual)
}

/// Classes, matched up by name for one-by-one comparisons
pub fn assert_that_classes(actual: &[ClassNode]) -> IterableAssert<'_, ClassNode> {
    IterableAssert::new(Some(actual)).with_key_extractor(|class: &ClassNode| class.name.clone())
}

/// Methods, matched up by name and descriptor for one-by-one comparisons
pub fn assert_that_methods(actual: &[MethodNode]) -> IterableAssert<'_, MethodNode> {
    IterableAssert::new(Some(actual)).with_key_extractor(MethodNode::declaration)
}

/// Fields, matched up by name for one-by-one comparisons
pub fn assert_that_fields(actual: &[FieldNode]) -> IterableAssert<'_, FieldNode> {
    IterableAssert::new(Some(actual)).with_key_extractor(|field: &FieldNode| field.name.clone())
}

/// Annotations, matched up by type for one-by-one comparisons
pub fn assert_that_annotations(actual: &[AnnotationNode]) -> IterableAssert<'_, AnnotationNode> {
    IterableAssert::new(Some(actual))
        .with_key_extractor(|annotation: &AnnotationNode| annotation.desc.clone())
}

/// Any list of nodes, `None` standing for a missing list
pub fn assert_that_iterable<T: StructuralEq>(actual: Option<&[T]>) -> IterableAssert<'_, T> {
    IterableAssert::new(actual)
}
