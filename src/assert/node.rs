use super::fields::mismatch;
use super::{
    check_instructions, contains_exactly_in_any_order, contains_exactly_in_order,
    contains_exactly_in_order_using, contains_exactly_one_by_one, describe, AssertOption,
    ConfigurationError, Crumbs, Error, MethodsComparisonMode, Settings, StructuralEq,
};
use crate::compare::Comparator;
use crate::context::Context;
use crate::jvm::model::{ClassNode, Instruction};
use crate::labels::{
    filter_line_numbers_insns, instruction_anchors, LabelIndexLookup, LabelIndexMap,
    LabelNameLookup,
};
use crate::repr::Representation;
use std::rc::Rc;

/// Configuration shared by all assertion builders
#[derive(Clone, Default)]
pub struct AssertSetup<'a> {
    settings: Settings,
    label_index_lookup: Option<&'a dyn LabelIndexLookup>,
    label_name_lookup: Option<&'a dyn LabelNameLookup>,
    representation: Representation,
    description: Option<String>,
}

impl<'a> AssertSetup<'a> {
    /// Run `f` in a fresh context for these settings
    fn run<R>(&self, f: impl FnOnce(&Context<'_>) -> R) -> R {
        let empty = LabelIndexMap::new();
        let (labels, fixed): (&dyn LabelIndexLookup, bool) = match self.label_index_lookup {
            Some(lookup) => (lookup, true),
            None => (&empty, false),
        };
        let ctx = Context::new(
            &self.settings,
            labels,
            fixed,
            self.label_name_lookup,
            &self.representation,
        );
        f(&ctx)
    }

    /// Root of the crumb trail: the description if there is one, else `describe`
    fn root_crumbs(&self, describe: impl FnOnce() -> Option<String>) -> Crumbs {
        match self.description.clone().or_else(describe) {
            Some(root) => Crumbs::root(root),
            None => Crumbs::default(),
        }
    }
}

macro_rules! setup_methods {
    ($lifetime:lifetime) => {
        pub fn add_option(mut self, option: AssertOption) -> Self {
            self.setup.settings.options.insert(option);
            self
        }

        pub fn add_options(mut self, options: impl IntoIterator<Item = AssertOption>) -> Self {
            self.setup.settings.options.extend(options);
            self
        }

        /// Drop line numbers before comparing, along with labels nothing else refers to
        pub fn ignore_line_numbers(self) -> Self {
            self.add_option(AssertOption::IgnoreLineNumbers)
        }

        /// Resolve labels with this lookup only, instead of pairing them up per method
        pub fn use_label_index_lookup(mut self, lookup: &$lifetime dyn LabelIndexLookup) -> Self {
            self.setup.label_index_lookup = Some(lookup);
            self
        }

        /// Names to show labels with in failure messages
        pub fn use_label_name_lookup(mut self, lookup: &$lifetime dyn LabelNameLookup) -> Self {
            self.setup.label_name_lookup = Some(lookup);
            self
        }

        pub fn with_representation(mut self, representation: Representation) -> Self {
            self.setup.representation = representation;
            self
        }

        /// Replace the root of the crumb trail
        pub fn described_as(mut self, description: impl Into<String>) -> Self {
            self.setup.description = Some(description.into());
            self
        }
    };
}

/// Assertion on a single node
pub struct NodeAssert<'a, T: StructuralEq> {
    actual: &'a T,
    setup: AssertSetup<'a>,
    comparator: Option<Comparator<T>>,
}

impl<'a, T: StructuralEq> NodeAssert<'a, T> {
    pub fn new(actual: &'a T) -> NodeAssert<'a, T> {
        NodeAssert {
            actual,
            setup: AssertSetup::default(),
            comparator: None,
        }
    }

    setup_methods!('a);

    /// Decide equality with this comparator alone, instead of structural equality
    pub fn using_comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn check(&self, expected: &T) -> Result<(), Error> {
        self.setup.run(|ctx| {
            let crumbs = self.setup.root_crumbs(|| Some(describe(self.actual, ctx)));
            match &self.comparator {
                Some(comparator) => {
                    if comparator.compare(self.actual, expected, ctx).is_eq() {
                        Ok(())
                    } else {
                        let message = mismatch(&ctx.repr_of(expected), &ctx.repr_of(self.actual));
                        Err(crumbs.fail_using(message, comparator.name()).into())
                    }
                }
                None => Ok(self.actual.check_equal(expected, ctx, &crumbs)?),
            }
        })
    }

    /// Panics with the failure message if the nodes differ
    pub fn is_equal_to(&self, expected: &T) {
        if let Err(err) = self.check(expected) {
            panic!("{}", err);
        }
    }
}

impl<'a> NodeAssert<'a, ClassNode> {
    pub fn set_methods_comparison_mode(mut self, mode: MethodsComparisonMode) -> Self {
        self.setup.settings.methods_comparison_mode = mode;
        self
    }
}

/// Assertion on a whole instruction list
///
/// Labels of both lists are paired up by position before comparing.
pub struct InstructionsAssert<'a> {
    actual: &'a [Instruction],
    setup: AssertSetup<'a>,
}

impl<'a> InstructionsAssert<'a> {
    pub fn new(actual: &'a [Instruction]) -> InstructionsAssert<'a> {
        InstructionsAssert {
            actual,
            setup: AssertSetup::default(),
        }
    }

    setup_methods!('a);

    pub fn check(&self, expected: &[Instruction]) -> Result<(), Error> {
        let ignore_line_numbers = self.setup.settings.has_option(AssertOption::IgnoreLineNumbers);
        let (actual, expected) = if ignore_line_numbers {
            (
                filter_line_numbers_insns(self.actual, &instruction_anchors(self.actual)),
                filter_line_numbers_insns(expected, &instruction_anchors(expected)),
            )
        } else {
            (self.actual.to_vec(), expected.to_vec())
        };

        self.setup.run(|ctx| {
            let crumbs = self.setup.root_crumbs(|| None);
            ctx.for_instruction_pair(&actual, &expected, |ctx| {
                check_instructions(&actual, &expected, ctx, &crumbs)
            })
            .map_err(Error::from)
        })
    }

    pub fn is_equal_to(&self, expected: &[Instruction]) {
        if let Err(err) = self.check(expected) {
            panic!("{}", err);
        }
    }
}

/// Extracts the key elements get paired up by in one-by-one comparisons
pub type KeyExtractor<T> = Rc<dyn Fn(&T) -> String>;

/// Assertion on a list of nodes
pub struct IterableAssert<'a, T: StructuralEq> {
    actual: Option<&'a [T]>,
    setup: AssertSetup<'a>,
    comparator: Option<Comparator<T>>,
    key_extractor: Option<KeyExtractor<T>>,
}

impl<'a, T: StructuralEq> IterableAssert<'a, T> {
    pub fn new(actual: Option<&'a [T]>) -> IterableAssert<'a, T> {
        IterableAssert {
            actual,
            setup: AssertSetup::default(),
            comparator: None,
            key_extractor: None,
        }
    }

    setup_methods!('a);

    /// Order used to match up elements in any-order comparisons
    pub fn using_element_comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn with_key_extractor(mut self, key: impl Fn(&T) -> String + 'static) -> Self {
        self.key_extractor = Some(Rc::new(key));
        self
    }

    /// Same elements (under the element comparator) in any order
    pub fn contains_exactly_in_any_order_elements_of(&self, expected: &[T]) -> Result<(), Error> {
        let comparator = self.comparator.clone().unwrap_or_else(Comparator::natural);
        self.setup.run(|ctx| {
            let crumbs = self.setup.root_crumbs(|| None);
            contains_exactly_in_any_order(self.actual, Some(expected), &comparator, ctx, &crumbs)
                .map_err(Error::from)
        })
    }

    /// Elements paired up by key in any order, then every pair checked for structural equality
    pub fn contains_exactly_in_any_order_compare_one_by_one_elements_of(
        &self,
        expected: &[T],
    ) -> Result<(), Error> {
        let key = self
            .key_extractor
            .clone()
            .ok_or(ConfigurationError::MissingKeyExtractor)?;
        self.setup.run(|ctx| {
            let crumbs = self.setup.root_crumbs(|| None);
            contains_exactly_one_by_one(self.actual, Some(expected), &*key, ctx, &crumbs)
                .map_err(Error::from)
        })
    }

    /// Equal elements at the same positions
    ///
    /// With an element comparator, elements only have to compare as equal under it.
    pub fn contains_exactly_elements_of(&self, expected: &[T]) -> Result<(), Error> {
        self.setup.run(|ctx| {
            let crumbs = self.setup.root_crumbs(|| None);
            let result = match &self.comparator {
                Some(comparator) => contains_exactly_in_order_using(
                    self.actual,
                    Some(expected),
                    comparator,
                    ctx,
                    &crumbs,
                ),
                None => contains_exactly_in_order(self.actual, Some(expected), ctx, &crumbs),
            };
            result.map_err(Error::from)
        })
    }

    /// Panics with the failure message unless [`Self::contains_exactly_elements_of`] passes
    pub fn is_equal_to(&self, expected: &[T]) {
        if let Err(err) = self.contains_exactly_elements_of(expected) {
            panic!("{}", err);
        }
    }
}

impl<'a> IterableAssert<'a, ClassNode> {
    pub fn set_methods_comparison_mode(mut self, mode: MethodsComparisonMode) -> Self {
        self.setup.settings.methods_comparison_mode = mode;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::model::FieldNode;

    #[test]
    fn custom_comparator_decides() {
        let actual = FieldNode::new(0x0001, "x", "I");
        let expected = FieldNode::new(0x0001, "y", "I");
        let by_descriptor = Comparator::new(
            "DescriptorComparator",
            |a: &FieldNode, b: &FieldNode, _: &Context<'_>| a.desc.cmp(&b.desc),
        );
        NodeAssert::new(&actual)
            .using_comparator(by_descriptor)
            .is_equal_to(&expected);

        let by_name = Comparator::new(
            "NameComparator",
            |a: &FieldNode, b: &FieldNode, _: &Context<'_>| a.name.cmp(&b.name),
        );
        let err = NodeAssert::new(&actual)
            .using_comparator(by_name)
            .check(&expected)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "[Field: int x] \nexpected: [1: public] int y\n but was: [1: public] int x\nwhen comparing values using NameComparator"
        );
    }

    #[test]
    fn missing_key_extractor() {
        let fields = vec![FieldNode::new(0, "x", "I")];
        match IterableAssert::new(Some(&fields[..]))
            .contains_exactly_in_any_order_compare_one_by_one_elements_of(&fields)
        {
            Err(Error::Configuration(ConfigurationError::MissingKeyExtractor)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn description_replaces_root() {
        let actual = FieldNode::new(0, "x", "I");
        let expected = FieldNode::new(0, "x", "J");
        let err = NodeAssert::new(&actual)
            .described_as("counter")
            .check(&expected)
            .unwrap_err();
        assert!(err.to_string().starts_with("[counter > Has equal descriptor] \n"));
    }
}
