//! Assertions for comparing in-memory class file trees
//!
//! Two trees are compared field by field and the first difference is reported with the path
//! leading to it, for instance
//!
//! ```text
//! [Class: class A > Has equal methods > Method: m()I > Has equal instructions]
//! Instruction at index 1 differs
//! ```
//!
//! Labels have no value of their own, so instructions that refer to them are compared by the
//! position of the label within its method. Independently built method bodies with the same
//! shape therefore compare equal.

pub mod assert;
pub mod compare;
pub mod context;
pub mod jvm;
pub mod labels;
pub mod repr;

pub use assert::{
    assert_that_access, assert_that_annotation, assert_that_annotations, assert_that_attribute,
    assert_that_class, assert_that_classes, assert_that_field, assert_that_fields,
    assert_that_inner_class, assert_that_instruction, assert_that_instructions,
    assert_that_iterable, assert_that_label, assert_that_local_variable, assert_that_method,
    assert_that_methods, assert_that_parameter, assert_that_try_catch_block,
    assert_that_type_annotation, assert_that_type_reference, AssertOption, AssertOptions, Error,
    MethodsComparisonMode,
};
