use super::fields::{
    check_any_order, check_leaf, check_optional, check_unless, check_value, mismatch, ShowValue,
};
use super::{
    contains_exactly_in_any_order, contains_exactly_in_order, contains_exactly_one_by_one,
    AssertOption, AssertionFailure, Crumbs, MethodsComparisonMode, StructuralEq,
};
use crate::compare::{method_declarations, range_comparators, Comparator, Entity};
use crate::context::Context;
use crate::jvm::model::{
    AnnotationNode, Attribute, ClassNode, ConstantValue, FieldNode, InnerClassNode, MethodNode,
    ParameterNode,
};
use crate::jvm::AccessNode;
use itertools::Itertools;

impl StructuralEq for String {
    fn check_equal(
        &self,
        expected: &String,
        _ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_value(self, expected, crumbs)
    }
}

/// Equal if the same symbolic names are set, whatever the raw masks
impl StructuralEq for AccessNode {
    fn check_equal(
        &self,
        expected: &AccessNode,
        _ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        let (actual_names, expected_names) = (self.symbolic_names(), expected.symbolic_names());
        if actual_names == expected_names {
            return Ok(());
        }

        let quoted = |names: &[&str]| format!("[{}]", names.iter().map(|n| n.show()).join(", "));
        let missing = |names: &[&'static str], from: &[&str]| -> Vec<&'static str> {
            names.iter().copied().filter(|name| !from.contains(name)).collect()
        };
        let not_found = missing(&expected_names, &actual_names);
        let not_expected = missing(&actual_names, &expected_names);

        let mut message = format!(
            "Expecting actual:\n  {}\nto contain exactly in any order:\n  {}",
            quoted(&actual_names),
            quoted(&expected_names)
        );
        if !not_found.is_empty() {
            message.push_str(&format!("\nnames not found: {}", quoted(&not_found)));
        }
        if !not_expected.is_empty() {
            message.push_str(&format!("\nnames not expected: {}", quoted(&not_expected)));
        }
        Err(crumbs.fail(message))
    }
}

impl StructuralEq for ConstantValue {
    fn check_equal(
        &self,
        expected: &ConstantValue,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_leaf(self, expected, ctx, crumbs)
    }
}

impl StructuralEq for ParameterNode {
    fn check_equal(
        &self,
        expected: &ParameterNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_value(&self.name, &expected.name, &crumbs.field("name"))?;
        AccessNode::for_parameter(self.access).check_equal(
            &AccessNode::for_parameter(expected.access),
            ctx,
            &crumbs.field("access"),
        )
    }
}

impl StructuralEq for InnerClassNode {
    fn check_equal(
        &self,
        expected: &InnerClassNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_value(&self.name, &expected.name, &crumbs.field("name"))?;
        check_value(&self.outer_name, &expected.outer_name, &crumbs.field("outer name"))?;
        check_value(&self.inner_name, &expected.inner_name, &crumbs.field("inner name"))?;
        AccessNode::for_inner_class(self.access).check_equal(
            &AccessNode::for_inner_class(expected.access),
            ctx,
            &crumbs.field("access"),
        )
    }
}

impl StructuralEq for Attribute {
    fn check_equal(
        &self,
        expected: &Attribute,
        _ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_value(&self.kind, &expected.kind, &crumbs.field("type"))?;
        check_value(&self.content, &expected.content, &crumbs.field("content"))
    }
}

/// Name, access, signature, annotations, type annotations, attributes
fn check_entity(
    actual: &Entity<'_>,
    expected: &Entity<'_>,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    use AssertOption::*;
    check_unless(ctx, IgnoreName, || {
        check_value(actual.name, expected.name, &crumbs.field("name"))
    })?;
    check_unless(ctx, IgnoreAccess, || {
        actual
            .access
            .check_equal(&expected.access, ctx, &crumbs.field("access"))
    })?;
    check_unless(ctx, IgnoreSignature, || {
        check_value(
            &actual.signature.cloned(),
            &expected.signature.cloned(),
            &crumbs.field("signature"),
        )
    })?;
    check_unless(ctx, IgnoreVisibleAnnotations, || {
        check_any_order(
            actual.visible_annotations,
            expected.visible_annotations,
            ctx,
            &crumbs.field("visible annotations"),
        )
    })?;
    check_unless(ctx, IgnoreInvisibleAnnotations, || {
        check_any_order(
            actual.invisible_annotations,
            expected.invisible_annotations,
            ctx,
            &crumbs.field("invisible annotations"),
        )
    })?;
    check_unless(ctx, IgnoreVisibleTypeAnnotations, || {
        check_any_order(
            actual.visible_type_annotations,
            expected.visible_type_annotations,
            ctx,
            &crumbs.field("visible type annotations"),
        )
    })?;
    check_unless(ctx, IgnoreInvisibleTypeAnnotations, || {
        check_any_order(
            actual.invisible_type_annotations,
            expected.invisible_type_annotations,
            ctx,
            &crumbs.field("invisible type annotations"),
        )
    })?;
    check_unless(ctx, IgnoreAttributes, || {
        check_any_order(
            actual.attributes,
            expected.attributes,
            ctx,
            &crumbs.field("attributes"),
        )
    })
}

impl StructuralEq for FieldNode {
    fn check_equal(
        &self,
        expected: &FieldNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        use AssertOption::*;
        check_entity(&Entity::of_field(self), &Entity::of_field(expected), ctx, crumbs)?;
        check_unless(ctx, IgnoreDescriptor, || {
            check_value(&self.desc, &expected.desc, &crumbs.field("descriptor"))
        })?;
        check_unless(ctx, IgnoreValue, || {
            check_optional(
                self.value.as_ref(),
                expected.value.as_ref(),
                ctx,
                &crumbs.field("value"),
            )
        })
    }
}

fn show_parameter_annotations(
    annotations: &Option<Vec<Option<Vec<AnnotationNode>>>>,
    ctx: &Context<'_>,
) -> String {
    match annotations {
        Some(annotations) => format!(
            "[{}]",
            annotations
                .iter()
                .map(|annotations| ctx.simplified_list_of(annotations.as_deref()))
                .join(", ")
        ),
        None => String::from("null"),
    }
}

/// Per-parameter annotation lists, each compared in any order
fn check_parameter_annotations(
    actual: &Option<Vec<Option<Vec<AnnotationNode>>>>,
    expected: &Option<Vec<Option<Vec<AnnotationNode>>>>,
    visibility: &str,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let field = format!("{} parameter annotations", visibility);
    match (actual, expected) {
        (None, None) => Ok(()),
        (Some(actual_lists), Some(expected_lists))
            if actual_lists.len() == expected_lists.len() =>
        {
            for (index, (a, e)) in actual_lists.iter().zip(expected_lists).enumerate() {
                let crumbs = crumbs.push(format!("Has equal {} at index {}", field, index));
                check_any_order(a.as_deref(), e.as_deref(), ctx, &crumbs)?;
            }
            Ok(())
        }
        _ => Err(crumbs.field(&field).fail(mismatch(
            &show_parameter_annotations(expected, ctx),
            &show_parameter_annotations(actual, ctx),
        ))),
    }
}

/// Everything that depends on labels, once both methods' labels are resolved
fn check_method_body(
    actual: &MethodNode,
    expected: &MethodNode,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    use AssertOption::*;
    let (try_catch_blocks, local_variables) = range_comparators(ctx);

    check_unless(ctx, IgnoreInstructions, || {
        super::check_instructions(
            &actual.instructions,
            &expected.instructions,
            ctx,
            &crumbs.field("instructions"),
        )
    })?;
    check_unless(ctx, IgnoreTryCatchBlocks, || {
        contains_exactly_in_any_order(
            Some(&actual.try_catch_blocks[..]),
            Some(&expected.try_catch_blocks[..]),
            &try_catch_blocks,
            ctx,
            &crumbs.field("try catch blocks"),
        )
    })?;
    check_unless(ctx, IgnoreMaxLocals, || {
        check_value(&actual.max_locals, &expected.max_locals, &crumbs.field("max locals"))
    })?;
    check_unless(ctx, IgnoreMaxStack, || {
        check_value(&actual.max_stack, &expected.max_stack, &crumbs.field("max stack"))
    })?;
    check_unless(ctx, IgnoreLocalVariables, || {
        contains_exactly_in_any_order(
            actual.local_variables.as_deref(),
            expected.local_variables.as_deref(),
            &local_variables,
            ctx,
            &crumbs.field("local variables"),
        )
    })?;
    check_unless(ctx, IgnoreVisibleLocalVariableAnnotations, || {
        check_any_order(
            actual.visible_local_variable_annotations.as_deref(),
            expected.visible_local_variable_annotations.as_deref(),
            ctx,
            &crumbs.field("visible local variable annotations"),
        )
    })?;
    check_unless(ctx, IgnoreInvisibleLocalVariableAnnotations, || {
        check_any_order(
            actual.invisible_local_variable_annotations.as_deref(),
            expected.invisible_local_variable_annotations.as_deref(),
            ctx,
            &crumbs.field("invisible local variable annotations"),
        )
    })
}

impl StructuralEq for MethodNode {
    fn check_equal(
        &self,
        expected: &MethodNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        use AssertOption::*;
        let (actual, expected) = (ctx.method_view(self), ctx.method_view(expected));

        check_entity(&Entity::of_method(&actual), &Entity::of_method(&expected), ctx, crumbs)?;
        check_unless(ctx, IgnoreDescriptor, || {
            check_value(&actual.desc, &expected.desc, &crumbs.field("descriptor"))
        })?;
        check_unless(ctx, IgnoreExceptions, || {
            check_any_order(
                Some(&actual.exceptions[..]),
                Some(&expected.exceptions[..]),
                ctx,
                &crumbs.field("exceptions"),
            )
        })?;
        check_unless(ctx, IgnoreParameters, || {
            contains_exactly_in_order(
                actual.parameters.as_deref(),
                expected.parameters.as_deref(),
                ctx,
                &crumbs.field("parameters"),
            )
        })?;
        check_unless(ctx, IgnoreVisibleAnnotableParameterCount, || {
            check_value(
                &actual.visible_annotable_parameter_count,
                &expected.visible_annotable_parameter_count,
                &crumbs.field("visible annotable parameter count"),
            )
        })?;
        check_unless(ctx, IgnoreInvisibleAnnotableParameterCount, || {
            check_value(
                &actual.invisible_annotable_parameter_count,
                &expected.invisible_annotable_parameter_count,
                &crumbs.field("invisible annotable parameter count"),
            )
        })?;
        check_unless(ctx, IgnoreVisibleParameterAnnotations, || {
            check_parameter_annotations(
                &actual.visible_parameter_annotations,
                &expected.visible_parameter_annotations,
                "visible",
                ctx,
                crumbs,
            )
        })?;
        check_unless(ctx, IgnoreInvisibleParameterAnnotations, || {
            check_parameter_annotations(
                &actual.invisible_parameter_annotations,
                &expected.invisible_parameter_annotations,
                "invisible",
                ctx,
                crumbs,
            )
        })?;

        ctx.for_instruction_pair(&actual.instructions, &expected.instructions, |ctx| {
            check_method_body(&actual, &expected, ctx, crumbs)
        })?;

        check_unless(ctx, IgnoreAnnotationDefault, || {
            check_optional(
                actual.annotation_default.as_ref(),
                expected.annotation_default.as_ref(),
                ctx,
                &crumbs.field("annotation default"),
            )
        })
    }
}

/// Fields are matched up by name, unless names are ignored
fn check_fields(
    actual: &ClassNode,
    expected: &ClassNode,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let crumbs = crumbs.field("fields");
    if ctx.has_option(AssertOption::IgnoreName) {
        check_any_order(Some(&actual.fields[..]), Some(&expected.fields[..]), ctx, &crumbs)
    } else {
        contains_exactly_one_by_one(
            Some(&actual.fields[..]),
            Some(&expected.fields[..]),
            &|field: &FieldNode| field.name.clone(),
            ctx,
            &crumbs,
        )
    }
}

fn check_methods(
    actual: &ClassNode,
    expected: &ClassNode,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let crumbs = crumbs.field("methods");
    let mode = ctx.settings().methods_comparison_mode;
    log::debug!("Comparing methods of {} in {} mode", actual.name, mode);

    let declarations_ignored =
        ctx.has_option(AssertOption::IgnoreName) || ctx.has_option(AssertOption::IgnoreDescriptor);
    match mode {
        MethodsComparisonMode::DeclarationsOnly => {
            let actual_declarations = method_declarations(&actual.methods);
            let expected_declarations = method_declarations(&expected.methods);
            check_any_order(
                Some(&actual_declarations[..]),
                Some(&expected_declarations[..]),
                ctx,
                &crumbs,
            )
        }
        MethodsComparisonMode::OneByOne if !declarations_ignored => contains_exactly_one_by_one(
            Some(&actual.methods[..]),
            Some(&expected.methods[..]),
            &MethodNode::declaration,
            ctx,
            &crumbs,
        ),
        _ => contains_exactly_in_any_order(
            Some(&actual.methods[..]),
            Some(&expected.methods[..]),
            &Comparator::natural(),
            ctx,
            &crumbs,
        ),
    }
}

impl StructuralEq for ClassNode {
    fn check_equal(
        &self,
        expected: &ClassNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        use AssertOption::*;
        check_entity(&Entity::of_class(self), &Entity::of_class(expected), ctx, crumbs)?;
        check_unless(ctx, IgnoreVersion, || {
            check_value(&self.version, &expected.version, &crumbs.field("version"))
        })?;
        check_unless(ctx, IgnoreSuperName, || {
            check_value(&self.super_name, &expected.super_name, &crumbs.field("super name"))
        })?;
        check_unless(ctx, IgnoreInterfaces, || {
            check_any_order(
                Some(&self.interfaces[..]),
                Some(&expected.interfaces[..]),
                ctx,
                &crumbs.field("interfaces"),
            )
        })?;
        check_unless(ctx, IgnoreSourceFile, || {
            check_value(&self.source_file, &expected.source_file, &crumbs.field("source file"))
        })?;
        check_unless(ctx, IgnoreSourceDebug, || {
            check_value(&self.source_debug, &expected.source_debug, &crumbs.field("source debug"))
        })?;
        check_unless(ctx, IgnoreOuterClass, || {
            check_value(&self.outer_class, &expected.outer_class, &crumbs.field("outer class"))
        })?;
        check_unless(ctx, IgnoreOuterMethod, || {
            check_value(&self.outer_method, &expected.outer_method, &crumbs.field("outer method"))
        })?;
        check_unless(ctx, IgnoreOuterMethodDescriptor, || {
            check_value(
                &self.outer_method_desc,
                &expected.outer_method_desc,
                &crumbs.field("outer method descriptor"),
            )
        })?;
        check_unless(ctx, IgnoreInnerClasses, || {
            check_any_order(
                Some(&self.inner_classes[..]),
                Some(&expected.inner_classes[..]),
                ctx,
                &crumbs.field("inner classes"),
            )
        })?;
        check_unless(ctx, IgnoreNestHostClass, || {
            check_value(
                &self.nest_host_class,
                &expected.nest_host_class,
                &crumbs.field("nest host class"),
            )
        })?;
        check_unless(ctx, IgnoreNestMembers, || {
            check_any_order(
                self.nest_members.as_deref(),
                expected.nest_members.as_deref(),
                ctx,
                &crumbs.field("nest members"),
            )
        })?;
        check_unless(ctx, IgnorePermittedSubclasses, || {
            check_any_order(
                self.permitted_subclasses.as_deref(),
                expected.permitted_subclasses.as_deref(),
                ctx,
                &crumbs.field("permitted subclasses"),
            )
        })?;
        check_unless(ctx, IgnoreFields, || check_fields(self, expected, ctx, crumbs))?;
        check_unless(ctx, IgnoreMethods, || check_methods(self, expected, ctx, crumbs))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert::Settings;
    use crate::jvm::model::AnnotationValue;
    use crate::labels::LabelIndexMap;
    use crate::repr::Representation;

    #[test]
    fn access_difference() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        let actual = ClassNode::new(52, 1025, "A", Some("java/lang/Object"));
        let expected = ClassNode::new(52, 1040, "A", Some("java/lang/Object"));
        let failure = actual
            .check_equal(&expected, &ctx, &Crumbs::root("Class: class A"))
            .unwrap_err();
        assert_eq!(failure.path(), "Class: class A > Has equal access");
        assert!(failure
            .message
            .ends_with("\nnames not found: [\"final\"]\nnames not expected: [\"public\"]"));
    }

    #[test]
    fn access_bits_without_meaning() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        // `0x0020` is `synchronized` on a method but means nothing on a field
        let actual = FieldNode::new(0x0001, "x", "I");
        let expected = FieldNode::new(0x0021, "x", "I");
        assert!(actual
            .check_equal(&expected, &ctx, &Crumbs::root("Field: int x"))
            .is_ok());

        let actual = MethodNode::new(0x0001, "m", "()V");
        let expected = MethodNode::new(0x0021, "m", "()V");
        let failure = actual
            .check_equal(&expected, &ctx, &Crumbs::root("Method: m()V"))
            .unwrap_err();
        assert_eq!(failure.path(), "Method: m()V > Has equal access");
        assert!(failure.message.ends_with("\nnames not found: [\"synchronized\"]"));
    }

    #[test]
    fn parameter_annotations_per_index() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        let mut actual = MethodNode::new(0, "m", "(II)V");
        actual.visible_parameter_annotations =
            Some(vec![None, Some(vec![AnnotationNode::new("La/NonNull;")])]);
        let mut expected = actual.clone();
        expected.visible_parameter_annotations = Some(vec![
            None,
            Some(vec![
                AnnotationNode::new("La/NonNull;")
                    .with_value("value", AnnotationValue::Boolean(true)),
            ]),
        ]);

        let failure = actual
            .check_equal(&expected, &ctx, &Crumbs::root("Method: m(II)V"))
            .unwrap_err();
        assert_eq!(
            failure.path(),
            "Method: m(II)V > Has equal visible parameter annotations at index 1"
        );
        assert!(failure.message.contains("elements not found: [@a.NonNull]"));
    }

    #[test]
    fn field_value() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        let mut actual = FieldNode::new(0x0019, "MAX", "J");
        actual.value = Some(ConstantValue::Long(10));
        let mut expected = actual.clone();
        expected.value = None;

        let failure = actual
            .check_equal(&expected, &ctx, &Crumbs::root("Field: long MAX"))
            .unwrap_err();
        assert_eq!(failure.path(), "Field: long MAX > Has equal value");
        assert_eq!(failure.message, "expected: null\n but was: 10L");
    }
}
