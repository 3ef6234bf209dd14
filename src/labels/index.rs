use crate::jvm::model::Instruction;
use crate::jvm::Label;
use std::collections::HashMap;

/// Resolves a label to a stable position
///
/// Labels only have identity, so two independently built instruction lists can only be compared
/// by first mapping their labels onto something both sides agree on.
pub trait LabelIndexLookup {
    /// Index of the label, if it is known
    fn find(&self, label: &Label) -> Option<usize>;
}

impl<T: LabelIndexLookup + ?Sized> LabelIndexLookup for &T {
    fn find(&self, label: &Label) -> Option<usize> {
        (**self).find(label)
    }
}

impl<T: LabelIndexLookup + ?Sized> LabelIndexLookup for Box<T> {
    fn find(&self, label: &Label) -> Option<usize> {
        (**self).find(label)
    }
}

/// Mutable label index map, with chained fallback lookups
///
/// The fallbacks are consulted in the order they were added, but only after the map itself has
/// no entry for a label.
#[derive(Default)]
pub struct LabelIndexMap<'a> {
    indices: HashMap<Label, usize>,
    fallbacks: Vec<Box<dyn LabelIndexLookup + 'a>>,
}

impl<'a> LabelIndexMap<'a> {
    pub fn new() -> LabelIndexMap<'a> {
        LabelIndexMap::default()
    }

    /// Insert all the entries, overwriting existing ones
    pub fn put_all(&mut self, indices: impl IntoIterator<Item = (Label, usize)>) -> &mut Self {
        self.indices.extend(indices);
        self
    }

    /// Insert the entry unless the label already has an index, either in the map or through one
    /// of the fallbacks
    ///
    /// Returns whether the entry was inserted.
    pub fn put_if_unknown(&mut self, label: Label, index: usize) -> bool {
        if self.find(&label).is_some() {
            return false;
        }
        self.indices.insert(label, index);
        true
    }

    /// Chain a lookup to be consulted when this map has no entry
    pub fn add(&mut self, fallback: impl LabelIndexLookup + 'a) -> &mut Self {
        self.fallbacks.push(Box::new(fallback));
        self
    }

    /// Copy over the entries of another map for labels that have no index yet
    ///
    /// Fallbacks of the other map are not carried over.
    pub fn merge_with(&mut self, other: &LabelIndexMap<'_>) -> &mut Self {
        for (label, index) in &other.indices {
            self.put_if_unknown(*label, *index);
        }
        self
    }

    /// Number of labels with an index in the map itself (fallbacks aren't counted)
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<'a> LabelIndexLookup for LabelIndexMap<'a> {
    fn find(&self, label: &Label) -> Option<usize> {
        self.indices
            .get(label)
            .copied()
            .or_else(|| self.fallbacks.iter().find_map(|fallback| fallback.find(label)))
    }
}

/// Lookup which maps every label to the same index
///
/// Comparing under this lookup makes all labels equal, which is what is wanted when the label
/// topology is known to differ between the two sides (eg. after removing line numbers).
#[derive(Copy, Clone, Debug, Default)]
pub struct IgnoringLabelIndexLookup(pub usize);

impl LabelIndexLookup for IgnoringLabelIndexLookup {
    fn find(&self, _label: &Label) -> Option<usize> {
        Some(self.0)
    }
}

/// Index of every label, which is its ordinal among the label instructions of the list
///
/// A label placed more than once keeps its first position.
pub fn label_indices(instructions: &[Instruction]) -> Vec<(Label, usize)> {
    let mut seen = HashMap::new();
    let mut ordinal = 0;
    let mut indices = vec![];
    for instruction in instructions {
        if let Instruction::Label(label) = instruction {
            if seen.insert(*label, ordinal).is_none() {
                indices.push((*label, ordinal));
            }
            ordinal += 1;
        }
    }
    indices
}

/// Build the shared lookup for comparing two instruction lists
///
/// Each side is numbered on its own, so the k-th label of the actual list and the k-th label of
/// the expected list get the same index. Labels shared by both lists keep their actual index.
pub fn paired_label_index<'a>(
    actual: &[Instruction],
    expected: &[Instruction],
) -> LabelIndexMap<'a> {
    let mut lookup = LabelIndexMap::new();
    lookup.put_all(label_indices(actual));
    for (label, index) in label_indices(expected) {
        lookup.put_if_unknown(label, index);
    }
    log::debug!(
        "Resolved {} labels for an instruction list pair",
        lookup.len()
    );
    lookup
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::opcodes;

    #[test]
    fn ordinals_among_labels() {
        let (l0, l1) = (Label::new(), Label::new());
        let instructions = vec![
            Instruction::Label(l0),
            Instruction::Plain(opcodes::ICONST_1),
            Instruction::Jump(opcodes::GOTO, l1),
            Instruction::Label(l1),
            Instruction::Plain(opcodes::IRETURN),
        ];
        assert_eq!(label_indices(&instructions), vec![(l0, 0), (l1, 1)]);
    }

    #[test]
    fn paired_lists_share_positions() {
        let (a0, a1, e0, e1) = (Label::new(), Label::new(), Label::new(), Label::new());
        let actual = vec![Instruction::Label(a0), Instruction::Label(a1)];
        let expected = vec![Instruction::Label(e0), Instruction::Label(e1)];
        let lookup = paired_label_index(&actual, &expected);
        assert_eq!(lookup.find(&a0), lookup.find(&e0));
        assert_eq!(lookup.find(&a1), lookup.find(&e1));
        assert_ne!(lookup.find(&a0), lookup.find(&a1));
    }

    #[test]
    fn put_if_unknown_keeps_first() {
        let label = Label::new();
        let mut lookup = LabelIndexMap::new();
        assert!(lookup.put_if_unknown(label, 3));
        assert!(!lookup.put_if_unknown(label, 7));
        assert_eq!(lookup.find(&label), Some(3));
    }

    #[test]
    fn put_if_unknown_consults_fallbacks() {
        let (resolved, fresh) = (Label::new(), Label::new());
        let mut fallback = LabelIndexMap::new();
        fallback.put_all([(resolved, 2)]);

        let mut lookup = LabelIndexMap::new();
        lookup.add(&fallback);
        assert!(!lookup.put_if_unknown(resolved, 8));
        assert!(lookup.put_if_unknown(fresh, 8));
        assert_eq!(lookup.find(&resolved), Some(2));
        assert_eq!(lookup.find(&fresh), Some(8));
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn chained_fallbacks() {
        let (known, fallback_only, unknown) = (Label::new(), Label::new(), Label::new());
        let mut fallback = LabelIndexMap::new();
        fallback.put_all([(known, 9), (fallback_only, 4)]);

        let mut lookup = LabelIndexMap::new();
        lookup.put_all([(known, 1)]);
        lookup.add(&fallback);

        assert_eq!(lookup.find(&known), Some(1));
        assert_eq!(lookup.find(&fallback_only), Some(4));
        assert_eq!(lookup.find(&unknown), None);
    }

    #[test]
    fn merge_with_does_not_overwrite() {
        let (a, b) = (Label::new(), Label::new());
        let mut first = LabelIndexMap::new();
        first.put_all([(a, 0)]);
        let mut second = LabelIndexMap::new();
        second.put_all([(a, 5), (b, 6)]);
        first.merge_with(&second);
        assert_eq!(first.find(&a), Some(0));
        assert_eq!(first.find(&b), Some(6));
    }

    #[test]
    fn ignoring_lookup() {
        let lookup = IgnoringLabelIndexLookup(0);
        assert_eq!(lookup.find(&Label::new()), lookup.find(&Label::new()));
    }
}
