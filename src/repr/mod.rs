//! Textual representations of nodes, used in failure messages
//!
//! Every node kind has a full form (possibly several lines, like a disassembler would print it)
//! and a simplified single-line form (used in summaries and as the title of a node in a crumb
//! trail). Labels are rendered through a [`LabelNameLookup`] so that two structurally equal
//! instruction lists also render the same.

mod instructions;
mod nodes;

pub use instructions::*;

use crate::labels::LabelNameLookup;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

/// Node kind which can be rendered
pub trait Textify {
    /// Name of the node kind, as used in crumb trails (eg. `Method`)
    fn kind_name() -> &'static str
    where
        Self: Sized;

    /// Full representation
    fn textify(&self, names: &dyn LabelNameLookup) -> String;

    /// Single line representation
    fn textify_simplified(&self, names: &dyn LabelNameLookup) -> String {
        self.textify(names)
    }
}

type RenderFn = Rc<dyn Fn(&dyn Any, &dyn LabelNameLookup) -> Option<String>>;

/// Registry of representation overrides, keyed by node type
///
/// Node kinds without an override use their [`Textify`] implementation. Only exact type matches
/// are considered.
#[derive(Clone, Default)]
pub struct Representation {
    full: HashMap<TypeId, RenderFn>,
    simplified: HashMap<TypeId, RenderFn>,
}

impl Representation {
    pub fn new() -> Representation {
        Representation::default()
    }

    /// Override the full representation of a node kind
    pub fn register<T: 'static>(
        mut self,
        render: impl Fn(&T, &dyn LabelNameLookup) -> String + 'static,
    ) -> Representation {
        self.full.insert(TypeId::of::<T>(), erase(render));
        self
    }

    /// Override the simplified representation of a node kind
    pub fn register_simplified<T: 'static>(
        mut self,
        render: impl Fn(&T, &dyn LabelNameLookup) -> String + 'static,
    ) -> Representation {
        self.simplified.insert(TypeId::of::<T>(), erase(render));
        self
    }

    pub fn has_override<T: 'static>(&self) -> bool {
        let id = TypeId::of::<T>();
        self.full.contains_key(&id) || self.simplified.contains_key(&id)
    }

    pub fn to_string_of<T: Textify + 'static>(
        &self,
        node: &T,
        names: &dyn LabelNameLookup,
    ) -> String {
        self.full
            .get(&TypeId::of::<T>())
            .and_then(|render| render(node, names))
            .unwrap_or_else(|| node.textify(names))
    }

    pub fn to_simplified_string_of<T: Textify + 'static>(
        &self,
        node: &T,
        names: &dyn LabelNameLookup,
    ) -> String {
        self.simplified
            .get(&TypeId::of::<T>())
            .and_then(|render| render(node, names))
            .unwrap_or_else(|| node.textify_simplified(names))
    }

    /// Simplified representations of all elements, as `[a, b]`
    pub fn to_simplified_list<'n, T: Textify + 'static>(
        &self,
        nodes: impl IntoIterator<Item = &'n T>,
        names: &dyn LabelNameLookup,
    ) -> String {
        use itertools::Itertools;
        let elements = nodes
            .into_iter()
            .map(|node| self.to_simplified_string_of(node, names))
            .join(", ");
        format!("[{}]", elements)
    }
}

fn erase<T: 'static>(render: impl Fn(&T, &dyn LabelNameLookup) -> String + 'static) -> RenderFn {
    Rc::new(move |node: &dyn Any, names: &dyn LabelNameLookup| {
        node.downcast_ref::<T>().map(|node| render(node, names))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::model::FieldNode;
    use crate::labels::LabelNameMap;

    #[test]
    fn override_takes_precedence() {
        let field = FieldNode::new(0x0001, "x", "I");
        let names = LabelNameMap::new();

        let default = Representation::new();
        assert_eq!(default.to_simplified_string_of(&field, &names), "int x");

        let custom = Representation::new()
            .register_simplified(|field: &FieldNode, _| field.name.to_uppercase());
        assert!(custom.has_override::<FieldNode>());
        assert_eq!(custom.to_simplified_string_of(&field, &names), "X");
        assert_eq!(custom.to_string_of(&field, &names), default.to_string_of(&field, &names));
    }
}
