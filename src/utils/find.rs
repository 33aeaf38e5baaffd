//! Linear search over iterables.

/// Finds the first element of `iterable` that satisfies `predicate`.
///
/// Stops consuming the iterator at the first match, so infinite iterators are
/// fine as long as something matches.
pub fn find<I, P>(predicate: P, iterable: I) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iterable.into_iter().find(predicate)
}
