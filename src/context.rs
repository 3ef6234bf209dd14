use crate::assert::{AssertOption, Settings};
use crate::jvm::model::{Instruction, MethodNode};
use crate::jvm::Label;
use crate::labels::{
    filter_line_numbers, paired_label_index, IgnoringLabelIndexLookup, IndexedLabelNames,
    LabelIndexLookup, LabelNameLookup,
};
use crate::repr::{Representation, Textify};
use std::borrow::Cow;

static IGNORING_LABELS: IgnoringLabelIndexLookup = IgnoringLabelIndexLookup(0);

/// Everything a comparison needs to know besides the two nodes
///
/// A context is never modified. Nested comparisons that need a different label lookup derive a
/// new context which borrows from the current one.
#[derive(Copy, Clone)]
pub struct Context<'a> {
    settings: &'a Settings,
    labels: &'a dyn LabelIndexLookup,

    /// The label lookup was chosen by the caller and must not be replaced by per-method ones
    fixed_labels: bool,
    names: Option<&'a dyn LabelNameLookup>,
    representation: &'a Representation,
}

impl<'a> Context<'a> {
    pub fn new(
        settings: &'a Settings,
        labels: &'a dyn LabelIndexLookup,
        fixed_labels: bool,
        names: Option<&'a dyn LabelNameLookup>,
        representation: &'a Representation,
    ) -> Context<'a> {
        Context {
            settings,
            labels,
            fixed_labels,
            names,
            representation,
        }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn has_option(&self, option: AssertOption) -> bool {
        self.settings.has_option(option)
    }

    pub fn representation(&self) -> &'a Representation {
        self.representation
    }

    /// Position of the label under the current lookup
    pub fn label_index(&self, label: &Label) -> Option<usize> {
        self.labels.find(label)
    }

    /// Names for rendering labels: the caller's names, then `L<index>`
    pub fn names(&self) -> impl LabelNameLookup + 'a {
        self.names.merge(IndexedLabelNames(self.labels))
    }

    /// Context in which all labels are equal
    pub fn ignoring_labels(&self) -> Context<'a> {
        Context {
            labels: &IGNORING_LABELS,
            fixed_labels: true,
            ..*self
        }
    }

    /// Run `f` with the labels of both instruction lists resolved
    ///
    /// The new lookup falls back to the current one, so labels from outside the lists keep
    /// resolving. Nothing is built if the caller fixed the lookup.
    pub fn for_instruction_pair<R>(
        &self,
        actual: &[Instruction],
        expected: &[Instruction],
        f: impl FnOnce(&Context<'_>) -> R,
    ) -> R {
        if self.fixed_labels {
            return f(self);
        }
        let mut lookup = paired_label_index(actual, expected);
        lookup.add(self.labels);
        let context = Context {
            settings: self.settings,
            labels: &lookup,
            fixed_labels: self.fixed_labels,
            names: self.names,
            representation: self.representation,
        };
        f(&context)
    }

    /// The method as it should be compared, without line numbers if those are ignored
    pub fn method_view<'m>(&self, method: &'m MethodNode) -> Cow<'m, MethodNode> {
        if self.has_option(AssertOption::IgnoreLineNumbers) {
            Cow::Owned(filter_line_numbers(method))
        } else {
            Cow::Borrowed(method)
        }
    }

    /// Full representation under the active representation and label names
    pub fn repr_of<T: Textify + 'static>(&self, node: &T) -> String {
        self.representation.to_string_of(node, &self.names())
    }

    pub fn simplified_repr_of<T: Textify + 'static>(&self, node: &T) -> String {
        self.representation
            .to_simplified_string_of(node, &self.names())
    }

    /// `[a, b]` of simplified representations, or `null` for a missing list
    pub fn simplified_list_of<T: Textify + 'static>(&self, nodes: Option<&[T]>) -> String {
        match nodes {
            Some(nodes) => self.representation.to_simplified_list(nodes, &self.names()),
            None => String::from("null"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::opcodes;
    use crate::labels::LabelIndexMap;

    #[test]
    fn pair_lookup_falls_back_to_parent() {
        let settings = Settings::new();
        let representation = Representation::new();
        let outside = Label::new();
        let mut parent = LabelIndexMap::new();
        parent.put_all([(outside, 7)]);
        let context = Context::new(&settings, &parent, false, None, &representation);

        let (a, e) = (Label::new(), Label::new());
        let actual = vec![Instruction::Label(a), Instruction::Plain(opcodes::RETURN)];
        let expected = vec![Instruction::Label(e), Instruction::Plain(opcodes::RETURN)];
        context.for_instruction_pair(&actual, &expected, |context| {
            assert_eq!(context.label_index(&a), Some(0));
            assert_eq!(context.label_index(&e), Some(0));
            assert_eq!(context.label_index(&outside), Some(7));
        });
        assert_eq!(context.label_index(&a), None);
    }

    #[test]
    fn fixed_lookup_is_kept() {
        let settings = Settings::new();
        let representation = Representation::new();
        let fixed = LabelIndexMap::new();
        let context = Context::new(&settings, &fixed, true, None, &representation);

        let label = Label::new();
        let instructions = vec![Instruction::Label(label)];
        context.for_instruction_pair(&instructions, &instructions, |context| {
            assert_eq!(context.label_index(&label), None);
        });
        assert_eq!(context.ignoring_labels().label_index(&label), Some(0));
    }
}
