use super::fields::{
    check_leaf, check_leaf_using, check_unless, check_value, mismatch, ShowValue,
};
use super::{AssertOption, AssertionFailure, Crumbs, StructuralEq};
use crate::compare::{compare_ordered, compare_ordered_by, sorted_values, NodeOrd};
use crate::context::Context;
use crate::jvm::model::{
    AnnotationNode, AnnotationValue, LocalVariableAnnotationNode, TypeAnnotationNode,
    TypeReference,
};
use crate::jvm::Label;
use crate::labels::label_name;
use crate::repr::Textify;
use itertools::Itertools;

impl StructuralEq for AnnotationValue {
    fn check_equal(
        &self,
        expected: &AnnotationValue,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_leaf(self, expected, ctx, crumbs)
    }
}

fn show_values(annotation: &AnnotationNode, ctx: &Context<'_>) -> String {
    let names = ctx.names();
    let values = sorted_values(annotation)
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value.textify(&names)))
        .join(", ");
    format!("{{{}}}", values)
}

impl StructuralEq for AnnotationNode {
    fn check_equal(
        &self,
        expected: &AnnotationNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_value(&self.desc, &expected.desc, &crumbs.field("descriptor"))?;
        check_unless(ctx, AssertOption::IgnoreAnnotationValues, || {
            let (actual_values, expected_values) = (sorted_values(self), sorted_values(expected));
            let ordering = compare_ordered_by(&actual_values, &expected_values, |a, b| {
                a.0.cmp(&b.0).then_with(|| a.1.node_cmp(&b.1, ctx))
            });
            if ordering.is_eq() {
                Ok(())
            } else {
                Err(crumbs.field("values").fail(mismatch(
                    &show_values(expected, ctx),
                    &show_values(self, ctx),
                )))
            }
        })
    }
}

impl StructuralEq for TypeReference {
    fn check_equal(
        &self,
        expected: &TypeReference,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        check_leaf_using(self, expected, ctx, crumbs)
    }
}

impl StructuralEq for TypeAnnotationNode {
    fn check_equal(
        &self,
        expected: &TypeAnnotationNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        self.annotation.check_equal(&expected.annotation, ctx, crumbs)?;
        self.type_ref
            .check_equal(&expected.type_ref, ctx, &crumbs.field("type reference"))?;
        check_value(&self.type_path, &expected.type_path, &crumbs.field("type path"))
    }
}

/// Label lists compared position by position
pub(crate) fn check_labels(
    actual: &[Label],
    expected: &[Label],
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    if compare_ordered(actual, expected, ctx).is_eq() {
        return Ok(());
    }
    let names = ctx.names();
    let show = |labels: &[Label]| {
        format!("[{}]", labels.iter().map(|l| label_name(&names, l)).join(", "))
    };
    Err(crumbs.fail(mismatch(&show(expected), &show(actual))))
}

impl StructuralEq for LocalVariableAnnotationNode {
    fn check_equal(
        &self,
        expected: &LocalVariableAnnotationNode,
        ctx: &Context<'_>,
        crumbs: &Crumbs,
    ) -> Result<(), AssertionFailure> {
        self.type_annotation
            .check_equal(&expected.type_annotation, ctx, crumbs)?;
        check_labels(&self.start, &expected.start, ctx, &crumbs.field("start"))?;
        check_labels(&self.end, &expected.end, ctx, &crumbs.field("end"))?;
        if self.index != expected.index {
            return Err(crumbs
                .field("index")
                .fail(mismatch(&expected.index.show(), &self.index.show())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert::Settings;
    use crate::labels::LabelIndexMap;
    use crate::repr::Representation;

    #[test]
    fn annotation_values_differ() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        let actual =
            AnnotationNode::new("La/Retry;").with_value("times", AnnotationValue::Int(3));
        let expected =
            AnnotationNode::new("La/Retry;").with_value("times", AnnotationValue::Int(5));
        let failure = actual
            .check_equal(&expected, &ctx, &Crumbs::root("Annotation: @a.Retry"))
            .unwrap_err();
        assert_eq!(failure.path(), "Annotation: @a.Retry > Has equal values");
        assert_eq!(failure.message, "expected: {times=5}\n but was: {times=3}");

        let settings = Settings {
            options: [AssertOption::IgnoreAnnotationValues].into_iter().collect(),
            ..Settings::new()
        };
        let ctx = Context::new(&settings, &labels, false, None, &representation);
        assert!(actual
            .check_equal(&expected, &ctx, &Crumbs::root("Annotation: @a.Retry"))
            .is_ok());
    }

    #[test]
    fn type_reference_differs() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        let parameter = TypeReference::with_type_parameter(TypeReference::CLASS_TYPE_PARAMETER, 0);
        let actual = TypeAnnotationNode::new(parameter.0, None, "La/NonNull;");
        let field = TypeReference::new(TypeReference::FIELD);
        let expected = TypeAnnotationNode::new(field.0, None, "La/NonNull;");
        let failure = actual
            .check_equal(&expected, &ctx, &Crumbs::root("Type annotation: @a.NonNull"))
            .unwrap_err();
        assert_eq!(
            failure.to_string(),
            [
                "[Type annotation: @a.NonNull > Has equal type reference] ",
                "expected: field",
                " but was: class_type_parameter=0",
                "when comparing values using TypeReferenceComparator",
            ]
            .join("\n")
        );
    }
}
