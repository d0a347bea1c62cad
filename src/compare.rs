//! Three-way comparators used to order the elements of the tree collections.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// The collections in this crate rely on `compare` being a strict weak ordering that is
/// consistent for the lifetime of the collection. Any closure of the form
/// `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use red_black_collections::compare::{Comparator, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let descending = |a: &u32, b: &u32| b.cmp(a);
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The comparator that orders values by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders key-value pairs by their keys alone using the wrapped key comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<C>(pub C);

impl<K, V, C> Comparator<(K, V)> for ByKey<C>
where
    C: Comparator<K>,
{
    fn compare(&self, left: &(K, V), right: &(K, V)) -> Ordering {
        self.0.compare(&left.0, &right.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ByKey, Comparator, Natural};
    use std::cmp::Ordering;

    #[test]
    fn test_natural() {
        assert_eq!(Natural.compare(&1, &1), Ordering::Equal);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_closure() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert_eq!(
            by_len.compare(&String::from("ab"), &String::from("cd")),
            Ordering::Equal,
        );
    }

    #[test]
    fn test_by_key_ignores_value() {
        let cmp = ByKey(Natural);
        assert_eq!(cmp.compare(&(1, "x"), &(1, "y")), Ordering::Equal);
        assert_eq!(cmp.compare(&(1, "z"), &(2, "a")), Ordering::Less);
    }
}
