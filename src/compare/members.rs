use super::{
    compare_optional, compare_optional_list, compare_ordered, compare_ordered_by,
    compare_unordered, nulls_first, unless, Comparator, NodeOrd,
};
use crate::assert::{AssertOption, MethodsComparisonMode};
use crate::context::Context;
use crate::jvm::model::{
    AnnotationNode, Attribute, ClassNode, FieldNode, InnerClassNode, LocalVariableNode,
    MethodNode, ParameterNode, TryCatchBlockNode, TypeAnnotationNode,
};
use crate::jvm::AccessNode;
use std::cmp::Ordering;

impl NodeOrd for String {
    fn comparator_name() -> &'static str {
        "StringComparator"
    }

    fn node_cmp(&self, other: &String, _ctx: &Context<'_>) -> Ordering {
        self.cmp(other)
    }
}

/// By symbolic names in canonical order, so bits which mean nothing for the kind never count
impl NodeOrd for AccessNode {
    fn comparator_name() -> &'static str {
        "AccessNodeComparator"
    }

    fn node_cmp(&self, other: &AccessNode, _ctx: &Context<'_>) -> Ordering {
        self.symbolic_names().cmp(&other.symbolic_names())
    }
}

impl NodeOrd for ParameterNode {
    fn comparator_name() -> &'static str {
        "ParameterNodeComparator"
    }

    fn node_cmp(&self, other: &ParameterNode, ctx: &Context<'_>) -> Ordering {
        nulls_first(self.name.as_ref(), other.name.as_ref(), |a, b| a.cmp(b))
            .then_with(|| {
                AccessNode::for_parameter(self.access)
                    .node_cmp(&AccessNode::for_parameter(other.access), ctx)
            })
    }
}

impl NodeOrd for InnerClassNode {
    fn comparator_name() -> &'static str {
        "InnerClassNodeComparator"
    }

    fn node_cmp(&self, other: &InnerClassNode, ctx: &Context<'_>) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| {
                nulls_first(self.outer_name.as_ref(), other.outer_name.as_ref(), |a, b| a.cmp(b))
            })
            .then_with(|| {
                nulls_first(self.inner_name.as_ref(), other.inner_name.as_ref(), |a, b| a.cmp(b))
            })
            .then_with(|| {
                AccessNode::for_inner_class(self.access)
                    .node_cmp(&AccessNode::for_inner_class(other.access), ctx)
            })
    }
}

/// The part that classes, fields, and methods have in common
pub(crate) struct Entity<'n> {
    pub name: &'n str,
    pub access: AccessNode,
    pub signature: Option<&'n String>,
    pub visible_annotations: Option<&'n [AnnotationNode]>,
    pub invisible_annotations: Option<&'n [AnnotationNode]>,
    pub visible_type_annotations: Option<&'n [TypeAnnotationNode]>,
    pub invisible_type_annotations: Option<&'n [TypeAnnotationNode]>,
    pub attributes: Option<&'n [Attribute]>,
}

macro_rules! entity {
    ($node:expr, $access:expr) => {
        Entity {
            name: &$node.name,
            access: $access,
            signature: $node.signature.as_ref(),
            visible_annotations: $node.visible_annotations.as_deref(),
            invisible_annotations: $node.invisible_annotations.as_deref(),
            visible_type_annotations: $node.visible_type_annotations.as_deref(),
            invisible_type_annotations: $node.invisible_type_annotations.as_deref(),
            attributes: $node.attributes.as_deref(),
        }
    };
}

impl<'n> Entity<'n> {
    pub fn of_class(class: &'n ClassNode) -> Entity<'n> {
        entity!(class, AccessNode::for_class(class.access))
    }

    pub fn of_method(method: &'n MethodNode) -> Entity<'n> {
        entity!(method, AccessNode::for_method(method.access))
    }

    pub fn of_field(field: &'n FieldNode) -> Entity<'n> {
        entity!(field, AccessNode::for_field(field.access))
    }

    fn node_cmp(&self, other: &Entity<'_>, ctx: &Context<'_>) -> Ordering {
        use AssertOption::*;
        unless(ctx, IgnoreName, || self.name.cmp(other.name))
            .then_with(|| unless(ctx, IgnoreAccess, || self.access.node_cmp(&other.access, ctx)))
            .then_with(|| {
                unless(ctx, IgnoreSignature, || {
                    nulls_first(self.signature, other.signature, |a, b| a.cmp(b))
                })
            })
            .then_with(|| self.annotations_cmp(other, ctx))
    }

    /// Annotations, type annotations and attributes
    fn annotations_cmp(&self, other: &Entity<'_>, ctx: &Context<'_>) -> Ordering {
        use AssertOption::*;
        unless(ctx, IgnoreVisibleAnnotations, || {
            compare_optional_list(self.visible_annotations, other.visible_annotations, false, ctx)
        })
        .then_with(|| {
            unless(ctx, IgnoreInvisibleAnnotations, || {
                compare_optional_list(
                    self.invisible_annotations,
                    other.invisible_annotations,
                    false,
                    ctx,
                )
            })
        })
        .then_with(|| {
            unless(ctx, IgnoreVisibleTypeAnnotations, || {
                compare_optional_list(
                    self.visible_type_annotations,
                    other.visible_type_annotations,
                    false,
                    ctx,
                )
            })
        })
        .then_with(|| {
            unless(ctx, IgnoreInvisibleTypeAnnotations, || {
                compare_optional_list(
                    self.invisible_type_annotations,
                    other.invisible_type_annotations,
                    false,
                    ctx,
                )
            })
        })
        .then_with(|| {
            unless(ctx, IgnoreAttributes, || {
                compare_optional_list(self.attributes, other.attributes, false, ctx)
            })
        })
    }
}

fn optional_string_cmp(a: &Option<String>, b: &Option<String>) -> Ordering {
    nulls_first(a.as_ref(), b.as_ref(), |a, b| a.cmp(b))
}

impl NodeOrd for FieldNode {
    fn comparator_name() -> &'static str {
        "FieldNodeComparator"
    }

    fn node_cmp(&self, other: &FieldNode, ctx: &Context<'_>) -> Ordering {
        use AssertOption::*;
        let (entity, other_entity) = (Entity::of_field(self), Entity::of_field(other));
        unless(ctx, IgnoreName, || self.name.cmp(&other.name))
            .then_with(|| unless(ctx, IgnoreDescriptor, || self.desc.cmp(&other.desc)))
            .then_with(|| entity.node_cmp(&other_entity, ctx))
            .then_with(|| {
                unless(ctx, IgnoreValue, || {
                    compare_optional(self.value.as_ref(), other.value.as_ref(), ctx)
                })
            })
    }
}

/// Try-catch blocks and local variables are compared without labels once line numbers are gone
pub(crate) fn range_comparators(
    ctx: &Context<'_>,
) -> (Comparator<TryCatchBlockNode>, Comparator<LocalVariableNode>) {
    if ctx.has_option(AssertOption::IgnoreLineNumbers) {
        (Comparator::ignoring_labels(), Comparator::ignoring_labels())
    } else {
        (Comparator::natural(), Comparator::natural())
    }
}

fn parameter_annotations_cmp(
    a: &Option<Vec<Option<Vec<AnnotationNode>>>>,
    b: &Option<Vec<Option<Vec<AnnotationNode>>>>,
    ctx: &Context<'_>,
) -> Ordering {
    nulls_first(a.as_deref(), b.as_deref(), |a, b| {
        compare_ordered_by(a, b, |a, b| {
            compare_optional_list(a.as_deref(), b.as_deref(), false, ctx)
        })
    })
}

/// Fields of the two methods which depend on labels, assuming the labels are already paired up
fn method_body_cmp(a: &MethodNode, b: &MethodNode, ctx: &Context<'_>) -> Ordering {
    use AssertOption::*;
    let (try_catch_blocks, local_variables) = range_comparators(ctx);
    unless(ctx, IgnoreInstructions, || {
        compare_ordered(&a.instructions, &b.instructions, ctx)
    })
    .then_with(|| {
        unless(ctx, IgnoreTryCatchBlocks, || {
            super::compare_unordered_by(&a.try_catch_blocks, &b.try_catch_blocks, |x, y| {
                try_catch_blocks.compare(x, y, ctx)
            })
        })
    })
    .then_with(|| unless(ctx, IgnoreMaxLocals, || a.max_locals.cmp(&b.max_locals)))
    .then_with(|| unless(ctx, IgnoreMaxStack, || a.max_stack.cmp(&b.max_stack)))
    .then_with(|| {
        unless(ctx, IgnoreLocalVariables, || {
            nulls_first(a.local_variables.as_deref(), b.local_variables.as_deref(), |x, y| {
                super::compare_unordered_by(x, y, |x, y| local_variables.compare(x, y, ctx))
            })
        })
    })
    .then_with(|| {
        unless(ctx, IgnoreVisibleLocalVariableAnnotations, || {
            compare_optional_list(
                a.visible_local_variable_annotations.as_deref(),
                b.visible_local_variable_annotations.as_deref(),
                false,
                ctx,
            )
        })
    })
    .then_with(|| {
        unless(ctx, IgnoreInvisibleLocalVariableAnnotations, || {
            compare_optional_list(
                a.invisible_local_variable_annotations.as_deref(),
                b.invisible_local_variable_annotations.as_deref(),
                false,
                ctx,
            )
        })
    })
}

impl NodeOrd for MethodNode {
    fn comparator_name() -> &'static str {
        "MethodNodeComparator"
    }

    fn node_cmp(&self, other: &MethodNode, ctx: &Context<'_>) -> Ordering {
        use AssertOption::*;
        let (a, b) = (ctx.method_view(self), ctx.method_view(other));
        let (entity, other_entity) = (Entity::of_method(&a), Entity::of_method(&b));

        unless(ctx, IgnoreName, || a.name.cmp(&b.name))
            .then_with(|| unless(ctx, IgnoreDescriptor, || a.desc.cmp(&b.desc)))
            .then_with(|| entity.node_cmp(&other_entity, ctx))
            .then_with(|| {
                unless(ctx, IgnoreExceptions, || {
                    compare_unordered(&a.exceptions, &b.exceptions, ctx)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreParameters, || {
                    compare_optional_list(
                        a.parameters.as_deref(),
                        b.parameters.as_deref(),
                        true,
                        ctx,
                    )
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreVisibleAnnotableParameterCount, || {
                    a.visible_annotable_parameter_count
                        .cmp(&b.visible_annotable_parameter_count)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreInvisibleAnnotableParameterCount, || {
                    a.invisible_annotable_parameter_count
                        .cmp(&b.invisible_annotable_parameter_count)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreVisibleParameterAnnotations, || {
                    parameter_annotations_cmp(
                        &a.visible_parameter_annotations,
                        &b.visible_parameter_annotations,
                        ctx,
                    )
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreInvisibleParameterAnnotations, || {
                    parameter_annotations_cmp(
                        &a.invisible_parameter_annotations,
                        &b.invisible_parameter_annotations,
                        ctx,
                    )
                })
            })
            .then_with(|| {
                ctx.for_instruction_pair(&a.instructions, &b.instructions, |ctx| {
                    method_body_cmp(&a, &b, ctx)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreAnnotationDefault, || {
                    compare_optional(
                        a.annotation_default.as_ref(),
                        b.annotation_default.as_ref(),
                        ctx,
                    )
                })
            })
    }
}

/// Methods reduced to what the comparison mode looks at
pub(crate) fn method_declarations(methods: &[MethodNode]) -> Vec<String> {
    methods.iter().map(MethodNode::declaration).collect()
}

impl NodeOrd for ClassNode {
    fn comparator_name() -> &'static str {
        "ClassNodeComparator"
    }

    fn node_cmp(&self, other: &ClassNode, ctx: &Context<'_>) -> Ordering {
        use AssertOption::*;
        let (entity, other_entity) = (Entity::of_class(self), Entity::of_class(other));
        entity
            .node_cmp(&other_entity, ctx)
            .then_with(|| unless(ctx, IgnoreVersion, || self.version.cmp(&other.version)))
            .then_with(|| {
                unless(ctx, IgnoreSuperName, || {
                    optional_string_cmp(&self.super_name, &other.super_name)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreInterfaces, || {
                    compare_unordered(&self.interfaces, &other.interfaces, ctx)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreSourceFile, || {
                    optional_string_cmp(&self.source_file, &other.source_file)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreSourceDebug, || {
                    optional_string_cmp(&self.source_debug, &other.source_debug)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreOuterClass, || {
                    optional_string_cmp(&self.outer_class, &other.outer_class)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreOuterMethod, || {
                    optional_string_cmp(&self.outer_method, &other.outer_method)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreOuterMethodDescriptor, || {
                    optional_string_cmp(&self.outer_method_desc, &other.outer_method_desc)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreInnerClasses, || {
                    compare_unordered(&self.inner_classes, &other.inner_classes, ctx)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreNestHostClass, || {
                    optional_string_cmp(&self.nest_host_class, &other.nest_host_class)
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreNestMembers, || {
                    compare_optional_list(
                        self.nest_members.as_deref(),
                        other.nest_members.as_deref(),
                        false,
                        ctx,
                    )
                })
            })
            .then_with(|| {
                unless(ctx, IgnorePermittedSubclasses, || {
                    compare_optional_list(
                        self.permitted_subclasses.as_deref(),
                        other.permitted_subclasses.as_deref(),
                        false,
                        ctx,
                    )
                })
            })
            .then_with(|| {
                unless(ctx, IgnoreFields, || compare_unordered(&self.fields, &other.fields, ctx))
            })
            .then_with(|| {
                unless(ctx, IgnoreMethods, || match ctx.settings().methods_comparison_mode {
                    MethodsComparisonMode::DeclarationsOnly => compare_unordered(
                        &method_declarations(&self.methods),
                        &method_declarations(&other.methods),
                        ctx,
                    ),
                    _ => compare_unordered(&self.methods, &other.methods, ctx),
                })
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert::Settings;
    use crate::jvm::model::Instruction;
    use crate::jvm::{opcodes, Label};
    use crate::labels::LabelIndexMap;
    use crate::repr::Representation;

    fn method(label: Label, constant: u8) -> MethodNode {
        let mut method = MethodNode::new(0, "m", "()I");
        method.instructions = vec![
            Instruction::Label(label),
            Instruction::Plain(constant),
            Instruction::Jump(opcodes::GOTO, label),
        ];
        method
    }

    #[test]
    fn methods_with_distinct_labels() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        let a = method(Label::new(), opcodes::ICONST_1);
        let b = method(Label::new(), opcodes::ICONST_1);
        let c = method(Label::new(), opcodes::ICONST_2);
        assert_eq!(a.node_cmp(&b, &ctx), Ordering::Equal);
        assert_eq!(a.node_cmp(&c, &ctx), Ordering::Less);
        assert_eq!(c.node_cmp(&a, &ctx), Ordering::Greater);
    }

    #[test]
    fn ignored_fields_do_not_count() {
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let a = FieldNode::new(0x0001, "x", "I");
        let b = FieldNode::new(0x0002, "y", "I");

        let settings = Settings::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);
        assert_ne!(a.node_cmp(&b, &ctx), Ordering::Equal);

        let settings = Settings {
            options: [AssertOption::IgnoreName, AssertOption::IgnoreAccess]
                .into_iter()
                .collect(),
            ..Settings::new()
        };
        let ctx = Context::new(&settings, &labels, false, None, &representation);
        assert_eq!(a.node_cmp(&b, &ctx), Ordering::Equal);
    }

    #[test]
    fn declarations_only_mode() {
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let mut a = ClassNode::new(52, 0x0021, "A", Some("java/lang/Object"));
        a.methods.push(method(Label::new(), opcodes::ICONST_1));
        let mut b = a.clone();
        b.methods[0] = method(Label::new(), opcodes::ICONST_2);

        let settings = Settings::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);
        assert_ne!(a.node_cmp(&b, &ctx), Ordering::Equal);

        let settings = Settings {
            methods_comparison_mode: MethodsComparisonMode::DeclarationsOnly,
            ..Settings::new()
        };
        let ctx = Context::new(&settings, &labels, false, None, &representation);
        assert_eq!(a.node_cmp(&b, &ctx), Ordering::Equal);
    }
}
