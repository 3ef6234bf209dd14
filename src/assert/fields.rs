use super::{contains_exactly_in_any_order, AssertOption, AssertionFailure, Crumbs, StructuralEq};
use crate::compare::{Comparator, NodeOrd};
use crate::context::Context;
use crate::repr::Textify;
use itertools::Itertools;

/// How a plain field value shows up in a failure message
pub trait ShowValue {
    fn show(&self) -> String;
}

impl ShowValue for String {
    fn show(&self) -> String {
        format!("{:?}", self)
    }
}

impl ShowValue for str {
    fn show(&self) -> String {
        format!("{:?}", self)
    }
}

macro_rules! show_with_display {
    ($($t:ty),*) => {
        $(
            impl ShowValue for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

show_with_display!(bool, u8, u16, u32, i32, usize);

/// Raw bytes, as hex
impl ShowValue for Vec<u8> {
    fn show(&self) -> String {
        format!("0x{}", self.iter().map(|byte| format!("{:02x}", byte)).join(""))
    }
}

impl<T: ShowValue> ShowValue for Option<T> {
    fn show(&self) -> String {
        match self {
            Some(value) => value.show(),
            None => String::from("null"),
        }
    }
}

impl<T: ShowValue> ShowValue for [T] {
    fn show(&self) -> String {
        format!("[{}]", self.iter().map(ShowValue::show).join(", "))
    }
}

pub(crate) fn mismatch(expected: &str, actual: &str) -> String {
    format!("expected: {}\n but was: {}", expected, actual)
}

/// Skip the check if the option is set
pub(crate) fn check_unless(
    ctx: &Context<'_>,
    option: AssertOption,
    check: impl FnOnce() -> Result<(), AssertionFailure>,
) -> Result<(), AssertionFailure> {
    if ctx.has_option(option) {
        Ok(())
    } else {
        check()
    }
}

/// Plain values, compared with `==`
pub(crate) fn check_value<V: PartialEq + ShowValue + ?Sized>(
    actual: &V,
    expected: &V,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    if actual == expected {
        Ok(())
    } else {
        Err(crumbs.fail(mismatch(&expected.show(), &actual.show())))
    }
}

/// Nodes without inner structure worth descending into, compared by their order
pub(crate) fn check_leaf<T: NodeOrd + Textify + 'static>(
    actual: &T,
    expected: &T,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    if actual.node_cmp(expected, ctx).is_eq() {
        Ok(())
    } else {
        Err(crumbs.fail(mismatch(&ctx.repr_of(expected), &ctx.repr_of(actual))))
    }
}

/// Like [`check_leaf`], naming the kind's comparator in the failure
pub(crate) fn check_leaf_using<T: NodeOrd + Textify + 'static>(
    actual: &T,
    expected: &T,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    check_leaf(actual, expected, ctx, crumbs).map_err(|failure| AssertionFailure {
        comparator: Some(T::comparator_name().to_owned()),
        ..failure
    })
}

/// Values which may be missing on either side
pub(crate) fn check_optional<T: StructuralEq>(
    actual: Option<&T>,
    expected: Option<&T>,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    match (actual, expected) {
        (None, None) => Ok(()),
        (Some(actual), Some(expected)) => actual.check_equal(expected, ctx, crumbs),
        (actual, expected) => {
            let show = |node: Option<&T>| match node {
                Some(node) => ctx.repr_of(node),
                None => String::from("null"),
            };
            Err(crumbs.fail(mismatch(&show(expected), &show(actual))))
        }
    }
}

/// Both lists if present, `None` if both are missing, and an error if only one is
pub(crate) fn present_pair<'l, T: Textify + 'static>(
    actual: Option<&'l [T]>,
    expected: Option<&'l [T]>,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<Option<(&'l [T], &'l [T])>, AssertionFailure> {
    match (actual, expected) {
        (None, None) => Ok(None),
        (Some(actual), Some(expected)) => Ok(Some((actual, expected))),
        (actual, expected) => Err(crumbs.fail(mismatch(
            &ctx.simplified_list_of(expected),
            &ctx.simplified_list_of(actual),
        ))),
    }
}

/// Lists which may be missing, compared in any order with the kind's natural order
pub(crate) fn check_any_order<T: StructuralEq>(
    actual: Option<&[T]>,
    expected: Option<&[T]>,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    contains_exactly_in_any_order(actual, expected, &Comparator::natural(), ctx, crumbs)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shown_values() {
        assert_eq!(String::from("a").show(), "\"a\"");
        assert_eq!(None::<String>.show(), "null");
        assert_eq!(Some(52u32).show(), "52");
        assert_eq!(vec![0xcau8, 0xfe].show(), "0xcafe");
        assert_eq!([1u16, 2][..].show(), "[1, 2]");
    }

    #[test]
    fn value_mismatch() {
        let crumbs = Crumbs::root("Field: int x").field("signature");
        let failure = check_value(&Some(String::from("TT;")), &None, &crumbs).unwrap_err();
        assert_eq!(failure.message, "expected: null\n but was: \"TT;\"");
        assert_eq!(failure.path(), "Field: int x > Has equal signature");
    }
}
