//! Assertions over lists of nodes

use super::fields::{mismatch, present_pair};
use super::{describe, AssertionFailure, Crumbs, StructuralEq};
use crate::compare::Comparator;
use crate::context::Context;
use crate::repr::Textify;
use indexmap::IndexMap;
use itertools::Itertools;
use std::cmp::Ordering;

/// Both lists hold the same elements under the comparator, in any order
///
/// Elements are matched up by sorting both sides and merging them, so every element finds at
/// most one partner. The ones left over are reported in their original order.
pub fn contains_exactly_in_any_order<T: Textify + 'static>(
    actual: Option<&[T]>,
    expected: Option<&[T]>,
    comparator: &Comparator<T>,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let (actual, expected) = match present_pair(actual, expected, ctx, crumbs)? {
        Some(pair) => pair,
        None => return Ok(()),
    };

    let sorted = |nodes: &[T]| {
        let mut indices: Vec<usize> = (0..nodes.len()).collect();
        indices.sort_by(|a, b| comparator.compare(&nodes[*a], &nodes[*b], ctx));
        indices
    };
    let (sorted_actual, sorted_expected) = (sorted(actual), sorted(expected));

    let mut not_found = vec![];
    let mut not_expected = vec![];
    let (mut i, mut j) = (0, 0);
    while i < sorted_actual.len() && j < sorted_expected.len() {
        let (a, e) = (sorted_actual[i], sorted_expected[j]);
        match comparator.compare(&actual[a], &expected[e], ctx) {
            Ordering::Less => {
                not_expected.push(a);
                i += 1;
            }
            Ordering::Greater => {
                not_found.push(e);
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    not_expected.extend_from_slice(&sorted_actual[i..]);
    not_found.extend_from_slice(&sorted_expected[j..]);

    if not_found.is_empty() && not_expected.is_empty() {
        return Ok(());
    }
    not_found.sort_unstable();
    not_expected.sort_unstable();

    let list = |nodes: &[T], indices: &[usize]| {
        let elements = indices
            .iter()
            .map(|index| ctx.simplified_repr_of(&nodes[*index]))
            .join(", ");
        format!("[{}]", elements)
    };
    let mut message = format!(
        "Expecting actual:\n  {}\nto contain exactly in any order:\n  {}",
        ctx.simplified_list_of(Some(actual)),
        ctx.simplified_list_of(Some(expected))
    );
    if !not_found.is_empty() {
        message.push_str(&format!("\nelements not found: {}", list(expected, &not_found)));
    }
    if !not_expected.is_empty() {
        message.push_str(&format!("\nelements not expected: {}", list(actual, &not_expected)));
    }
    Err(crumbs.fail_using(message, comparator.name()))
}

/// Pair up the elements of both lists by key, then check every pair for structural equality
///
/// Keys have to match up exactly (including how many elements share a key) before any pair is
/// checked. Elements sharing a key are paired in order of appearance.
pub fn contains_exactly_one_by_one<T: StructuralEq>(
    actual: Option<&[T]>,
    expected: Option<&[T]>,
    key: &dyn Fn(&T) -> String,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let (actual, expected) = match present_pair(actual, expected, ctx, crumbs)? {
        Some(pair) => pair,
        None => return Ok(()),
    };

    let group = |nodes: &[T]| {
        let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (index, node) in nodes.iter().enumerate() {
            groups.entry(key(node)).or_default().push(index);
        }
        groups
    };
    let (actual_groups, expected_groups) = (group(actual), group(expected));

    let surplus = |groups: &IndexMap<String, Vec<usize>>, others: &IndexMap<String, Vec<usize>>| {
        let mut keys = vec![];
        for (key, members) in groups {
            let other_count = others.get(key).map_or(0, Vec::len);
            for _ in other_count..members.len() {
                keys.push(format!("{:?}", key));
            }
        }
        keys
    };
    let not_found = surplus(&expected_groups, &actual_groups);
    let not_expected = surplus(&actual_groups, &expected_groups);
    log::debug!(
        "Paired up {} keys ({} not found, {} not expected)",
        actual_groups.len(),
        not_found.len(),
        not_expected.len()
    );

    if !not_found.is_empty() || !not_expected.is_empty() {
        let mut message = format!(
            "Expecting actual:\n  {}\nto contain exactly in any order:\n  {}",
            ctx.simplified_list_of(Some(actual)),
            ctx.simplified_list_of(Some(expected))
        );
        if !not_found.is_empty() {
            message.push_str(&format!("\nkeys not found: [{}]", not_found.join(", ")));
        }
        if !not_expected.is_empty() {
            message.push_str(&format!("\nkeys not expected: [{}]", not_expected.join(", ")));
        }
        return Err(crumbs.fail(message));
    }

    for (key, actual_members) in &actual_groups {
        let expected_members = expected_groups.get(key).map(Vec::as_slice).unwrap_or_default();
        for (a, e) in actual_members.iter().zip(expected_members) {
            let (a, e) = (&actual[*a], &expected[*e]);
            a.check_equal(e, ctx, &crumbs.push(describe(a, ctx)))?;
        }
    }
    Ok(())
}

/// Both lists hold structurally equal elements at the same positions
pub fn contains_exactly_in_order<T: StructuralEq>(
    actual: Option<&[T]>,
    expected: Option<&[T]>,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let (actual, expected) = match present_pair(actual, expected, ctx, crumbs)? {
        Some(pair) => pair,
        None => return Ok(()),
    };
    if actual.len() != expected.len() {
        let message = format!(
            "Expected {} elements but was {}\n{}",
            expected.len(),
            actual.len(),
            mismatch(
                &ctx.simplified_list_of(Some(expected)),
                &ctx.simplified_list_of(Some(actual))
            )
        );
        return Err(crumbs.fail(message));
    }
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        a.check_equal(e, ctx, &crumbs.push(format!("Element at index {}", index)))?;
    }
    Ok(())
}

/// Like [`contains_exactly_in_order`], but elements only have to be equal under the comparator
pub fn contains_exactly_in_order_using<T: Textify + 'static>(
    actual: Option<&[T]>,
    expected: Option<&[T]>,
    comparator: &Comparator<T>,
    ctx: &Context<'_>,
    crumbs: &Crumbs,
) -> Result<(), AssertionFailure> {
    let (actual, expected) = match present_pair(actual, expected, ctx, crumbs)? {
        Some(pair) => pair,
        None => return Ok(()),
    };
    let differs = actual.len() != expected.len()
        || actual
            .iter()
            .zip(expected)
            .any(|(a, e)| comparator.compare(a, e, ctx).is_ne());
    if differs {
        let message = mismatch(
            &ctx.simplified_list_of(Some(expected)),
            &ctx.simplified_list_of(Some(actual)),
        );
        return Err(crumbs.fail_using(message, comparator.name()));
    }
    Ok(())
}
