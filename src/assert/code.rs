use super::fields::{check_any_order, check_leaf, check_unless, check_value};
use super::{AssertOption, AssertionFailure, Crumbs, StructuralEq};
use crate::compare::NodeOrd;
use crate::context::Context;
use crate::jvm::model::{Instruction, LocalVariableNode, TryCatchBlockNode};
use crate::jvm::Label;
use itertools::Itertools;

impl StructuralEq for Label {
    fn check_equal(
        &self,
        expected: &Label,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_leaf(self, expected, ctx, crumbs)
    }
}

impl StructuralEq for Instruction {
    fn check_equal(
        &self,
        expected: &Instruction,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_leaf(self, expected, ctx, crumbs)
    }
}

/// One instruction per line, labels flush left
fn instruction_stream(instructions: &[Instruction], ctx: &Context<'_>) -> String {
    instructions
        .iter()
        .map(|instruction| match instruction {
            Instruction::Label(_) => format!("  {}", ctx.repr_of(instruction)),
            _ => format!("    {}", ctx.repr_of(instruction)),
        })
        .join("\n")
}

/// Instruction lists, compared in order under the labels resolved in the context
///
/// The first difference is reported together with both complete lists.
pub fn check_instructions(
    actual: &[Instruction],
    expected: &[Instruction],
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let comparator = Instruction::comparator_name();
    let streams = || {
        format!(
            "expected:\n{}\n but was:\n{}",
            instruction_stream(expected, ctx),
            instruction_stream(actual, ctx)
        )
    };

    if actual.len() != expected.len() {
        let message = format!(
            "Expected {} instructions but was {}\n{}",
            expected.len(),
            actual.len(),
            streams()
        );
        return Err(crumbs.fail_using(message, comparator));
    }
    let first_difference = actual
        .iter()
        .zip(expected)
        .position(|(a, e)| a.node_cmp(e, ctx).is_ne());
    match first_difference {
        None => Ok(()),
        Some(index) => {
            let message = format!("Instruction at index {} differs\n{}", index, streams());
            Err(crumbs.fail_using(message, comparator))
        }
    }
}

impl StructuralEq for TryCatchBlockNode {
    fn check_equal(
        &self,
        expected: &TryCatchBlockNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        use AssertOption::*;
        self.start.check_equal(&expected.start, ctx, &crumbs.field("start"))?;
        self.end.check_equal(&expected.end, ctx, &crumbs.field("end"))?;
        self.handler
            .check_equal(&expected.handler, ctx, &crumbs.field("handler"))?;
        check_value(&self.catch_type, &expected.catch_type, &crumbs.field("type"))?;
        check_unless(ctx, IgnoreVisibleTypeAnnotations, || {
            check_any_order(
                self.visible_type_annotations.as_deref(),
                expected.visible_type_annotations.as_deref(),
                ctx,
                &crumbs.field("visible type annotations"),
            )
        })?;
        check_unless(ctx, IgnoreInvisibleTypeAnnotations, || {
            check_any_order(
                self.invisible_type_annotations.as_deref(),
                expected.invisible_type_annotations.as_deref(),
                ctx,
                &crumbs.field("invisible type annotations"),
            )
        })
    }
}

impl StructuralEq for LocalVariableNode {
    fn check_equal(
        &self,
        expected: &LocalVariableNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_value(&self.name, &expected.name, &crumbs.field("name"))?;
        check_value(&self.desc, &expected.desc, &crumbs.field("descriptor"))?;
        check_value(&self.signature, &expected.signature, &crumbs.field("signature"))?;
        self.start.check_equal(&expected.start, ctx, &crumbs.field("start"))?;
        self.end.check_equal(&expected.end, ctx, &crumbs.field("end"))?;
        check_value(&self.index, &expected.index, &crumbs.field("index"))
    }
}
