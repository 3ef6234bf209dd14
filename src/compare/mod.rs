//! Total orders over every node kind
//!
//! The collection assertions match elements of two lists by sorting both with the same order, so
//! these orders have to agree with structural equality: two nodes compare as `Equal` exactly when
//! asserting them equal under the same [`Context`] passes. That is why every comparator skips the
//! fields the context's options ignore, and resolves labels through the context.

mod annotations;
mod code;
mod members;

pub(crate) use annotations::sorted_values;
pub(crate) use members::{method_declarations, range_comparators, Entity};

use crate::assert::AssertOption;
use crate::context::Context;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Option and label aware ordering of a node kind
pub trait NodeOrd {
    /// Name used when a failure reports which comparator decided it
    fn comparator_name() -> &'static str
    where
        Self: Sized;

    fn node_cmp(&self, other: &Self, ctx: &Context<'_>) -> Ordering;
}

type CompareFn<T> = Rc<dyn Fn(&T, &T, &Context<'_>) -> Ordering>;

/// Named comparator value
///
/// This is what collection assertions sort and match with, and what callers pass to
/// `using_comparator` to replace structural equality altogether.
pub struct Comparator<T> {
    name: Cow<'static, str>,
    compare: CompareFn<T>,
}

impl<T: 'static> Comparator<T> {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        compare: impl Fn(&T, &T, &Context<'_>) -> Ordering + 'static,
    ) -> Comparator<T> {
        Comparator {
            name: name.into(),
            compare: Rc::new(compare),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compare(&self, a: &T, b: &T, ctx: &Context<'_>) -> Ordering {
        (self.compare)(a, b, ctx)
    }
}

impl<T: NodeOrd + 'static> Comparator<T> {
    /// The kind's own [`NodeOrd`]
    pub fn natural() -> Comparator<T> {
        Comparator::new(T::comparator_name(), |a: &T, b: &T, ctx: &Context<'_>| {
            a.node_cmp(b, ctx)
        })
    }

    /// The kind's own [`NodeOrd`], with every label equal to every other label
    pub fn ignoring_labels() -> Comparator<T> {
        let name = format!("{} (ignoring labels)", T::comparator_name());
        Comparator::new(name, |a: &T, b: &T, ctx: &Context<'_>| {
            a.node_cmp(b, &ctx.ignoring_labels())
        })
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Comparator<T> {
        Comparator {
            name: self.name.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Comparator").field(&self.name).finish()
    }
}

/// `Equal` if the option is set, otherwise the result of `compare`
pub fn unless(
    ctx: &Context<'_>,
    option: AssertOption,
    compare: impl FnOnce() -> Ordering,
) -> Ordering {
    if ctx.has_option(option) {
        Ordering::Equal
    } else {
        compare()
    }
}

/// Missing values sort before present ones
pub fn nulls_first<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    compare: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b),
    }
}

/// Shorter lists first, then element by element
pub fn compare_ordered_by<T>(
    a: &[T],
    b: &[T],
    mut compare: impl FnMut(&T, &T) -> Ordering,
) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b)
            .map(|(a, b)| compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Like [`compare_ordered_by`], after sorting both lists
///
/// Two lists compare equal exactly when they are permutations of each other.
pub fn compare_unordered_by<T>(
    a: &[T],
    b: &[T],
    mut compare: impl FnMut(&T, &T) -> Ordering,
) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    let mut a: Vec<&T> = a.iter().collect();
    let mut b: Vec<&T> = b.iter().collect();
    a.sort_by(|x, y| compare(*x, *y));
    b.sort_by(|x, y| compare(*x, *y));
    compare_ordered_by(&a, &b, |x, y| compare(*x, *y))
}

pub fn compare_ordered<T: NodeOrd>(a: &[T], b: &[T], ctx: &Context<'_>) -> Ordering {
    compare_ordered_by(a, b, |a, b| a.node_cmp(b, ctx))
}

pub fn compare_unordered<T: NodeOrd>(a: &[T], b: &[T], ctx: &Context<'_>) -> Ordering {
    compare_unordered_by(a, b, |a, b| a.node_cmp(b, ctx))
}

/// Missing lists first, then present lists in or out of order
pub fn compare_optional_list<T: NodeOrd>(
    a: Option<&[T]>,
    b: Option<&[T]>,
    ordered: bool,
    ctx: &Context<'_>,
) -> Ordering {
    nulls_first(a, b, |a, b| {
        if ordered {
            compare_ordered(a, b, ctx)
        } else {
            compare_unordered(a, b, ctx)
        }
    })
}

pub fn compare_optional<T: NodeOrd>(a: Option<&T>, b: Option<&T>, ctx: &Context<'_>) -> Ordering {
    nulls_first(a, b, |a, b| a.node_cmp(b, ctx))
}
