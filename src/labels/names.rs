use super::LabelIndexLookup;
use crate::jvm::Label;
use std::collections::HashMap;

/// Resolves a label to a display name
///
/// Names are only ever used for rendering, never for deciding equality.
pub trait LabelNameLookup {
    fn find(&self, label: &Label) -> Option<String>;

    /// Try this lookup first, then `other`
    fn merge<O: LabelNameLookup>(self, other: O) -> MergedLabelNames<Self, O>
    where
        Self: Sized,
    {
        MergedLabelNames(self, other)
    }
}

impl<T: LabelNameLookup + ?Sized> LabelNameLookup for &T {
    fn find(&self, label: &Label) -> Option<String> {
        (**self).find(label)
    }
}

impl<T: LabelNameLookup + ?Sized> LabelNameLookup for Box<T> {
    fn find(&self, label: &Label) -> Option<String> {
        (**self).find(label)
    }
}

impl<T: LabelNameLookup> LabelNameLookup for Option<T> {
    fn find(&self, label: &Label) -> Option<String> {
        self.as_ref().and_then(|lookup| lookup.find(label))
    }
}

/// Explicit label names
#[derive(Clone, Debug, Default)]
pub struct LabelNameMap(HashMap<Label, String>);

impl LabelNameMap {
    pub fn new() -> LabelNameMap {
        LabelNameMap::default()
    }

    pub fn insert(&mut self, label: Label, name: impl Into<String>) -> &mut Self {
        self.0.insert(label, name.into());
        self
    }
}

impl LabelNameLookup for LabelNameMap {
    fn find(&self, label: &Label) -> Option<String> {
        self.0.get(label).cloned()
    }
}

/// Names derived from an index lookup (`L0`, `L1`, ...)
pub struct IndexedLabelNames<L>(pub L);

impl<L: LabelIndexLookup> LabelNameLookup for IndexedLabelNames<L> {
    fn find(&self, label: &Label) -> Option<String> {
        self.0.find(label).map(|index| format!("L{}", index))
    }
}

/// See [`LabelNameLookup::merge`]
pub struct MergedLabelNames<A, B>(A, B);

impl<A: LabelNameLookup, B: LabelNameLookup> LabelNameLookup for MergedLabelNames<A, B> {
    fn find(&self, label: &Label) -> Option<String> {
        self.0.find(label).or_else(|| self.1.find(label))
    }
}

/// Display name of the label, falling back to its raw identity
pub fn label_name(names: &dyn LabelNameLookup, label: &Label) -> String {
    names.find(label).unwrap_or_else(|| format!("{:?}", label))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::labels::LabelIndexMap;

    #[test]
    fn merge_prefers_receiver() {
        let (a, b, c) = (Label::new(), Label::new(), Label::new());
        let mut first = LabelNameMap::new();
        first.insert(a, "start");
        let mut indices = LabelIndexMap::new();
        indices.put_all([(a, 0), (b, 1)]);

        let names = first.merge(IndexedLabelNames(&indices));
        assert_eq!(names.find(&a).as_deref(), Some("start"));
        assert_eq!(names.find(&b).as_deref(), Some("L1"));
        assert_eq!(names.find(&c), None);
        assert_eq!(label_name(&names, &c), format!("L#{}", c.id()));
    }
}
