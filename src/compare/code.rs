use super::{compare_optional_list, compare_ordered, nulls_first, unless, NodeOrd};
use crate::assert::AssertOption;
use crate::context::Context;
use crate::jvm::model::{
    ConstantValue, FrameValue, Handle, Instruction, LocalVariableNode, TryCatchBlockNode,
};
use crate::jvm::Label;
use std::cmp::Ordering;

/// Labels are ordered by their index; labels without one sort first and are all equal
impl NodeOrd for Label {
    fn comparator_name() -> &'static str {
        "LabelNodeComparator"
    }

    fn node_cmp(&self, other: &Label, ctx: &Context<'_>) -> Ordering {
        let a = ctx.label_index(self);
        let b = ctx.label_index(other);
        nulls_first(a.as_ref(), b.as_ref(), |a, b| a.cmp(b))
    }
}

impl NodeOrd for Handle {
    fn comparator_name() -> &'static str {
        "HandleComparator"
    }

    fn node_cmp(&self, other: &Handle, _ctx: &Context<'_>) -> Ordering {
        self.tag
            .cmp(&other.tag)
            .then_with(|| self.owner.cmp(&other.owner))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.desc.cmp(&other.desc))
            .then_with(|| self.is_interface.cmp(&other.is_interface))
    }
}

impl NodeOrd for ConstantValue {
    fn comparator_name() -> &'static str {
        "ConstantValueComparator"
    }

    fn node_cmp(&self, other: &ConstantValue, ctx: &Context<'_>) -> Ordering {
        use ConstantValue::*;
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Long(a), Long(b)) => a.cmp(b),
            (Double(a), Double(b)) => a.total_cmp(b),
            (String(a), String(b)) | (Type(a), Type(b)) => a.cmp(b),
            (ConstantValue::Handle(a), ConstantValue::Handle(b)) => a.node_cmp(b, ctx),
            (a, b) => a.variant_index().cmp(&b.variant_index()),
        }
    }
}

impl NodeOrd for FrameValue {
    fn comparator_name() -> &'static str {
        "FrameValueComparator"
    }

    fn node_cmp(&self, other: &FrameValue, ctx: &Context<'_>) -> Ordering {
        match (self, other) {
            (FrameValue::Object(a), FrameValue::Object(b)) => a.cmp(b),
            (FrameValue::Uninitialized(a), FrameValue::Uninitialized(b)) => a.node_cmp(b, ctx),
            (a, b) => a.variant_index().cmp(&b.variant_index()),
        }
    }
}

impl NodeOrd for Instruction {
    fn comparator_name() -> &'static str {
        "InstructionComparator"
    }

    /// Shape first, then opcode, then operands
    fn node_cmp(&self, other: &Instruction, ctx: &Context<'_>) -> Ordering {
        let by_shape = self.variant_index().cmp(&other.variant_index());
        if by_shape.is_ne() {
            return by_shape;
        }
        let by_opcode = self.opcode().cmp(&other.opcode());
        if by_opcode.is_ne() {
            return by_opcode;
        }

        use Instruction::*;
        match (self, other) {
            (Plain(_), Plain(_)) => Ordering::Equal,
            (Int(_, a), Int(_, b)) => a.cmp(b),
            (Var(_, a), Var(_, b)) => a.cmp(b),
            (Type(_, a), Type(_, b)) => a.cmp(b),
            (
                Field {
                    owner, name, desc, ..
                },
                Field {
                    owner: other_owner,
                    name: other_name,
                    desc: other_desc,
                    ..
                },
            ) => owner
                .cmp(other_owner)
                .then_with(|| name.cmp(other_name))
                .then_with(|| desc.cmp(other_desc)),
            (
                Method {
                    owner,
                    name,
                    desc,
                    is_interface,
                    ..
                },
                Method {
                    owner: other_owner,
                    name: other_name,
                    desc: other_desc,
                    is_interface: other_is_interface,
                    ..
                },
            ) => owner
                .cmp(other_owner)
                .then_with(|| name.cmp(other_name))
                .then_with(|| desc.cmp(other_desc))
                .then_with(|| is_interface.cmp(other_is_interface)),
            (
                InvokeDynamic {
                    name,
                    desc,
                    bootstrap,
                    arguments,
                },
                InvokeDynamic {
                    name: other_name,
                    desc: other_desc,
                    bootstrap: other_bootstrap,
                    arguments: other_arguments,
                },
            ) => name
                .cmp(other_name)
                .then_with(|| desc.cmp(other_desc))
                .then_with(|| bootstrap.node_cmp(other_bootstrap, ctx))
                .then_with(|| compare_ordered(arguments, other_arguments, ctx)),
            (Jump(_, a), Jump(_, b)) | (Instruction::Label(a), Instruction::Label(b)) => {
                a.node_cmp(b, ctx)
            }
            (Ldc(a), Ldc(b)) => a.node_cmp(b, ctx),
            (
                Iinc { var, increment },
                Iinc {
                    var: other_var,
                    increment: other_increment,
                },
            ) => var
                .cmp(other_var)
                .then_with(|| increment.cmp(other_increment)),
            (
                TableSwitch {
                    min,
                    max,
                    default,
                    labels,
                },
                TableSwitch {
                    min: other_min,
                    max: other_max,
                    default: other_default,
                    labels: other_labels,
                },
            ) => min
                .cmp(other_min)
                .then_with(|| max.cmp(other_max))
                .then_with(|| default.node_cmp(other_default, ctx))
                .then_with(|| compare_ordered(labels, other_labels, ctx)),
            (
                LookupSwitch {
                    default,
                    keys,
                    labels,
                },
                LookupSwitch {
                    default: other_default,
                    keys: other_keys,
                    labels: other_labels,
                },
            ) => default
                .node_cmp(other_default, ctx)
                .then_with(|| keys.cmp(other_keys))
                .then_with(|| compare_ordered(labels, other_labels, ctx)),
            (
                MultiANewArray { desc, dimensions },
                MultiANewArray {
                    desc: other_desc,
                    dimensions: other_dimensions,
                },
            ) => desc
                .cmp(other_desc)
                .then_with(|| dimensions.cmp(other_dimensions)),
            (
                Frame {
                    kind,
                    locals,
                    stack,
                },
                Frame {
                    kind: other_kind,
                    locals: other_locals,
                    stack: other_stack,
                },
            ) => kind
                .cmp(other_kind)
                .then_with(|| compare_ordered(locals, other_locals, ctx))
                .then_with(|| compare_ordered(stack, other_stack, ctx)),
            (
                LineNumber { line, start },
                LineNumber {
                    line: other_line,
                    start: other_start,
                },
            ) => line
                .cmp(other_line)
                .then_with(|| start.node_cmp(other_start, ctx)),
            _ => Ordering::Equal,
        }
    }
}

impl NodeOrd for TryCatchBlockNode {
    fn comparator_name() -> &'static str {
        "TryCatchBlockNodeComparator"
    }

    fn node_cmp(&self, other: &TryCatchBlockNode, ctx: &Context<'_>) -> Ordering {
        self.start
            .node_cmp(&other.start, ctx)
            .then_with(|| self.end.node_cmp(&other.end, ctx))
            .then_with(|| self.handler.node_cmp(&other.handler, ctx))
            .then_with(|| {
                nulls_first(self.catch_type.as_ref(), other.catch_type.as_ref(), |a, b| a.cmp(b))
            })
            .then_with(|| {
                unless(ctx, AssertOption::IgnoreVisibleTypeAnnotations, || {
                    compare_optional_list(
                        self.visible_type_annotations.as_deref(),
                        other.visible_type_annotations.as_deref(),
                        false,
                        ctx,
                    )
                })
            })
            .then_with(|| {
                unless(ctx, AssertOption::IgnoreInvisibleTypeAnnotations, || {
                    compare_optional_list(
                        self.invisible_type_annotations.as_deref(),
                        other.invisible_type_annotations.as_deref(),
                        false,
                        ctx,
                    )
                })
            })
    }
}

impl NodeOrd for LocalVariableNode {
    fn comparator_name() -> &'static str {
        "LocalVariableNodeComparator"
    }

    fn node_cmp(&self, other: &LocalVariableNode, ctx: &Context<'_>) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.desc.cmp(&other.desc))
            .then_with(|| {
                nulls_first(self.signature.as_ref(), other.signature.as_ref(), |a, b| a.cmp(b))
            })
            .then_with(|| self.start.node_cmp(&other.start, ctx))
            .then_with(|| self.end.node_cmp(&other.end, ctx))
            .then_with(|| self.index.cmp(&other.index))
    }
}
