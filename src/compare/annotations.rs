use super::{compare_ordered, compare_ordered_by, nulls_first, unless, NodeOrd};
use crate::assert::AssertOption;
use crate::context::Context;
use crate::jvm::model::{
    AnnotationNode, AnnotationValue, Attribute, LocalVariableAnnotationNode, TypeAnnotationNode,
    TypeReference,
};
use std::cmp::Ordering;

impl NodeOrd for AnnotationValue {
    fn comparator_name() -> &'static str {
        "AnnotationValueComparator"
    }

    fn node_cmp(&self, other: &AnnotationValue, ctx: &Context<'_>) -> Ordering {
        use AnnotationValue::*;
        match (self, other) {
            (Byte(a), Byte(b)) => a.cmp(b),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Char(a), Char(b)) => a.cmp(b),
            (Short(a), Short(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Long(a), Long(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Double(a), Double(b)) => a.total_cmp(b),
            (String(a), String(b)) | (Type(a), Type(b)) => a.cmp(b),
            (
                Enum { desc, value },
                Enum {
                    desc: other_desc,
                    value: other_value,
                },
            ) => desc.cmp(other_desc).then_with(|| value.cmp(other_value)),
            (Annotation(a), Annotation(b)) => a.node_cmp(b, ctx),
            (Array(a), Array(b)) => compare_ordered(a, b, ctx),
            (a, b) => a.variant_index().cmp(&b.variant_index()),
        }
    }
}

/// Values of the annotation ordered by element name
///
/// Element values are a map in the class file, so their order carries no meaning.
pub(crate) fn sorted_values(annotation: &AnnotationNode) -> Vec<&(String, AnnotationValue)> {
    let mut values: Vec<_> = annotation.values.iter().collect();
    values.sort_by(|a, b| a.0.cmp(&b.0));
    values
}

impl NodeOrd for AnnotationNode {
    fn comparator_name() -> &'static str {
        "AnnotationNodeComparator"
    }

    fn node_cmp(&self, other: &AnnotationNode, ctx: &Context<'_>) -> Ordering {
        self.desc.cmp(&other.desc).then_with(|| {
            unless(ctx, AssertOption::IgnoreAnnotationValues, || {
                compare_ordered_by(&sorted_values(self), &sorted_values(other), |a, b| {
                    a.0.cmp(&b.0).then_with(|| a.1.node_cmp(&b.1, ctx))
                })
            })
        })
    }
}

/// By packed value, so the sort decides first
impl NodeOrd for TypeReference {
    fn comparator_name() -> &'static str {
        "TypeReferenceComparator"
    }

    fn node_cmp(&self, other: &TypeReference, _ctx: &Context<'_>) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl NodeOrd for TypeAnnotationNode {
    fn comparator_name() -> &'static str {
        "TypeAnnotationNodeComparator"
    }

    fn node_cmp(&self, other: &TypeAnnotationNode, ctx: &Context<'_>) -> Ordering {
        self.annotation
            .node_cmp(&other.annotation, ctx)
            .then_with(|| self.type_ref.node_cmp(&other.type_ref, ctx))
            .then_with(|| {
                nulls_first(self.type_path.as_ref(), other.type_path.as_ref(), |a, b| a.cmp(b))
            })
    }
}

impl NodeOrd for LocalVariableAnnotationNode {
    fn comparator_name() -> &'static str {
        "LocalVariableAnnotationNodeComparator"
    }

    fn node_cmp(&self, other: &LocalVariableAnnotationNode, ctx: &Context<'_>) -> Ordering {
        self.type_annotation
            .node_cmp(&other.type_annotation, ctx)
            .then_with(|| compare_ordered(&self.start, &other.start, ctx))
            .then_with(|| compare_ordered(&self.end, &other.end, ctx))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl NodeOrd for Attribute {
    fn comparator_name() -> &'static str {
        "AttributeComparator"
    }

    fn node_cmp(&self, other: &Attribute, _ctx: &Context<'_>) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.content.cmp(&other.content))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert::Settings;
    use crate::labels::LabelIndexMap;
    use crate::repr::Representation;

    #[test]
    fn value_order_is_irrelevant() {
        let settings = Settings::new();
        let representation = Representation::new();
        let labels = LabelIndexMap::new();
        let ctx = Context::new(&settings, &labels, false, None, &representation);

        let a = AnnotationNode::new("LA;")
            .with_value("x", AnnotationValue::Int(1))
            .with_value("y", AnnotationValue::Float(2.0));
        let b = AnnotationNode::new("LA;")
            .with_value("y", AnnotationValue::Float(2.0))
            .with_value("x", AnnotationValue::Int(1));
        assert_eq!(a.node_cmp(&b, &ctx), Ordering::Equal);

        let c = AnnotationNode::new("LA;").with_value("x", AnnotationValue::Long(1));
        assert_ne!(a.node_cmp(&c, &ctx), Ordering::Equal);

        let settings = Settings {
            options: [AssertOption::IgnoreAnnotationValues].into_iter().collect(),
            ..Settings::new()
        };
        let ctx = Context::new(&settings, &labels, false, None, &representation);
        assert_eq!(a.node_cmp(&c, &ctx), Ordering::Equal);
    }
}
