use crate::compare::{Comparator, Natural};
use crate::error::InvariantViolation;
use crate::red_black_tree::tree::{Tree, TreeIntoIter, TreeIter};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, BitAnd};

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, a red node never has a red child, and every path from a node down to an
/// empty leaf passes through the same number of black nodes, which bounds the height of the tree
/// by `2 * log2(n + 1)`.
///
/// Elements are ordered by a `Comparator<T>` chosen at construction. The default comparator,
/// `Natural`, uses the `Ord` implementation of `T`. Two elements that compare equal are the same
/// element: inserting one replaces the other in place.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.get(&3), Some(&3));
/// assert!(!set.contains(&1));
/// ```
pub struct OrderedSet<T, C = Natural> {
    tree: Tree<T>,
    cmp: C,
}

impl<T> OrderedSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `OrderedSet<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let set: OrderedSet<u32> = OrderedSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> OrderedSet<T, C>
where
    C: Comparator<T>,
{
    /// Constructs a new, empty `OrderedSet<T, C>` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.min(), Some(&2));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        OrderedSet {
            tree: Tree::new(),
            cmp,
        }
    }

    /// Constructs a set ordered by `cmp` holding the values of `iter`. Later values replace
    /// earlier values that compare equal to them.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let set = OrderedSet::from_iter_with_comparator(vec![1, 2, 3, 4], |a: &u32, b: &u32| b.cmp(a));
    /// assert_eq!(set.to_vec(), vec![4, 3, 2, 1]);
    /// ```
    pub fn from_iter_with_comparator<I>(iter: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_comparator(cmp);
        set.extend(iter);
        set
    }

    /// Inserts a value into the set. If a value that compares equal already exists in the set, it
    /// is replaced in place and returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Option<T> {
        let cmp = &self.cmp;
        self.tree.insert(value, |a, b| cmp.compare(a, b))
    }

    /// Checks if a value that compares equal to `value` exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the set that compares equal to `value`. Returns `None`
    /// if no such value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(2);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let cmp = &self.cmp;
        self.tree.get(|stored| cmp.compare(value, stored))
    }

    pub(crate) fn get_by<F>(&self, mut probe: F) -> Option<&T>
    where
        F: FnMut(&C, &T) -> Ordering,
    {
        let cmp = &self.cmp;
        self.tree.get(|stored| probe(cmp, stored))
    }

    // The caller must not change how the value compares.
    pub(crate) fn get_by_mut<F>(&mut self, mut probe: F) -> Option<&mut T>
    where
        F: FnMut(&C, &T) -> Ordering,
    {
        let cmp = &self.cmp;
        self.tree.get_mut(|stored| probe(cmp, stored))
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let set: OrderedSet<u32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the set, removing all values. Clearing an empty set does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum value of the set under its comparator. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum value of the set under its comparator. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns an iterator over the set. The iterator will yield values in ascending order using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> OrderedSetIter<'_, T> {
        OrderedSetIter {
            tree_iter: self.tree.iter(),
        }
    }

    /// Returns the values of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let set: OrderedSet<u32> = vec![3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Checks every red black tree invariant and reports the first one that is broken.
    ///
    /// A set only becomes invalid when its comparator is not a consistent total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let set: OrderedSet<u32> = (0..100).collect();
    /// assert_eq!(set.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let cmp = &self.cmp;
        self.tree.validate(|a, b| cmp.compare(a, b))
    }

    /// Returns `true` if every red black tree invariant holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let set: OrderedSet<u32> = OrderedSet::new();
    /// assert!(set.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the union of two sets without modifying either. The result is ordered by a clone
    /// of `self`'s comparator and holds the values of `self` followed by the values of `other`,
    /// so `other`'s copy wins when two values compare equal. `&a + &b` is equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let n: OrderedSet<u32> = vec![1, 2].into_iter().collect();
    /// let m: OrderedSet<u32> = vec![2, 3].into_iter().collect();
    ///
    /// let union = n.union(&m);
    /// assert_eq!(union.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(n.len(), 2);
    /// assert_eq!(m.len(), 2);
    /// ```
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let mut ret = self.clone();
        ret.merge(other);
        ret
    }

    /// Inserts every value of `other` into `self`. `a += &b` is equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let mut n: OrderedSet<u32> = vec![1, 2].into_iter().collect();
    /// let m: OrderedSet<u32> = vec![2, 3].into_iter().collect();
    ///
    /// n.merge(&m);
    /// assert_eq!(n.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.extend(other.iter().cloned());
    }

    /// Returns the values of `self` that are also contained in `other`, ordered by a clone of
    /// `self`'s comparator. Neither set is modified. `&a & &b` is equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedSet;
    ///
    /// let n: OrderedSet<u32> = vec![1, 2, 3].into_iter().collect();
    /// let m: OrderedSet<u32> = vec![2, 3, 4].into_iter().collect();
    ///
    /// let intersection = n.intersection(&m);
    /// assert_eq!(intersection.to_vec(), vec![2, 3]);
    /// ```
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        Self::from_iter_with_comparator(
            self.iter().filter(|value| other.contains(value)).cloned(),
            self.cmp.clone(),
        )
    }
}

impl<T, C> Clone for OrderedSet<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        OrderedSet {
            tree: self.tree.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> fmt::Debug for OrderedSet<T, C>
where
    T: fmt::Debug,
    C: Comparator<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for OrderedSet<T, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

// Sets are equal when they have the same size and every value of one is contained in the other.
// This assumes both sets order their values consistently.
impl<T, C> PartialEq for OrderedSet<T, C>
where
    C: Comparator<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T, C> Extend<T> for OrderedSet<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for OrderedSet<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_iter_with_comparator(iter, C::default())
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type IntoIter = OrderedSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            tree_iter: self.tree.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C>
where
    T: 'a,
    C: Comparator<T>,
{
    type IntoIter = OrderedSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `OrderedSet<T, C>`.
///
/// This iterator traverses the elements of the set in ascending order and yields owned values.
pub struct OrderedSetIntoIter<T> {
    tree_iter: TreeIntoIter<T>,
}

impl<T> Iterator for OrderedSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIter<T> {}

/// An iterator for `OrderedSet<T, C>`.
///
/// This iterator traverses the elements of the set in ascending order and yields immutable
/// references.
pub struct OrderedSetIter<'a, T> {
    tree_iter: TreeIter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for OrderedSetIter<'a, T> {}

impl<T, C> Add for OrderedSet<T, C>
where
    C: Comparator<T>,
{
    type Output = OrderedSet<T, C>;

    fn add(mut self, other: OrderedSet<T, C>) -> OrderedSet<T, C> {
        self.extend(other);
        self
    }
}

impl<'a, 'b, T, C> Add<&'b OrderedSet<T, C>> for &'a OrderedSet<T, C>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    type Output = OrderedSet<T, C>;

    fn add(self, other: &'b OrderedSet<T, C>) -> OrderedSet<T, C> {
        self.union(other)
    }
}

impl<'a, T, C> AddAssign<&'a OrderedSet<T, C>> for OrderedSet<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    fn add_assign(&mut self, other: &'a OrderedSet<T, C>) {
        self.merge(other);
    }
}

impl<'a, 'b, T, C> BitAnd<&'b OrderedSet<T, C>> for &'a OrderedSet<T, C>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    type Output = OrderedSet<T, C>;

    fn bitand(self, other: &'b OrderedSet<T, C>) -> OrderedSet<T, C> {
        self.intersection(other)
    }
}

impl<T, C> Serialize for OrderedSet<T, C>
where
    T: Serialize,
    C: Comparator<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct OrderedSetVisitor<T, C> {
    marker: PhantomData<fn() -> OrderedSet<T, C>>,
}

impl<'de, T, C> Visitor<'de> for OrderedSetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = OrderedSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = OrderedSet::default();
        while let Some(value) = access.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

impl<'de, T, C> Deserialize<'de> for OrderedSet<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedSet;
    use serde_test::{assert_tokens, Token};

    fn set_of(values: &[u32]) -> OrderedSet<u32> {
        values.iter().cloned().collect()
    }

    #[test]
    fn test_len_empty() {
        let set: OrderedSet<u32> = OrderedSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let mut set = OrderedSet::new();
        assert!(set.is_empty());
        set.insert(1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: OrderedSet<u32> = OrderedSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = OrderedSet::new();
        assert_eq!(set.insert(1), None);
        assert!(set.contains(&1));
        assert!(set.is_balanced());
    }

    #[test]
    fn test_insert_replace() {
        let mut set = OrderedSet::new();
        set.insert(1);
        set.insert(2);
        assert_eq!(set.insert(1), Some(1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_insert_replaces_equal_value() {
        let mut set = OrderedSet::with_comparator(|a: &(u32, u32), b: &(u32, u32)| a.0.cmp(&b.0));
        set.insert((1, 100));
        assert_eq!(set.insert((1, 200)), Some((1, 100)));
        assert_eq!(set.get(&(1, 0)), Some(&(1, 200)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_contains_get() {
        let set = set_of(&[1, 2, 3]);
        assert!(set.contains(&2));
        assert!(!set.contains(&5));
        assert_eq!(set.get(&2), Some(&2));
        assert_eq!(set.get(&4), None);
    }

    #[test]
    fn test_min_max() {
        let set = set_of(&[1, 3, 5]);
        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_descending_comparator() {
        let set = OrderedSet::from_iter_with_comparator(vec![1, 2, 3, 4], |a: &u32, b: &u32| {
            b.cmp(a)
        });
        assert_eq!(set.to_vec(), vec![4, 3, 2, 1]);
        assert_eq!(set.min(), Some(&4));
        assert_eq!(set.max(), Some(&1));
        assert!(set.is_balanced());
    }

    #[test]
    fn test_clear() {
        let mut set = set_of(&[1, 2, 3, 4, 5]);
        set.clear();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert_eq!(set.get(&2), None);
        assert_eq!(set.to_vec(), Vec::<u32>::new());

        set.clear();
        assert!(set.is_empty());
        set.insert(7);
        assert_eq!(set.to_vec(), vec![7]);
    }

    #[test]
    fn test_union() {
        let n = set_of(&[1, 2, 3, 4, 5]);
        let m = set_of(&[3, 4, 5, 6, 7]);
        let union = &n + &m;

        assert_eq!(union.len(), 7);
        assert_eq!(union.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(union.is_balanced());

        assert_eq!(n.to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(m.to_vec(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_union_by_value() {
        let union = set_of(&[1, 3]) + set_of(&[2, 3]);
        assert_eq!(union.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_union_keeps_comparator() {
        let cmp = |a: &u32, b: &u32| b.cmp(a);
        let n = OrderedSet::from_iter_with_comparator(vec![1, 2], cmp);
        let m = OrderedSet::from_iter_with_comparator(vec![3], cmp);
        assert_eq!((&n + &m).to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_add_assign() {
        let mut n = set_of(&[1, 2]);
        let m = set_of(&[2, 3]);
        n += &m;
        assert_eq!(n.to_vec(), vec![1, 2, 3]);
        assert_eq!(m.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_intersection() {
        let n = set_of(&[1, 2, 3]);
        let m = set_of(&[2, 3, 4]);
        let intersection = &n & &m;
        assert_eq!(intersection.to_vec(), vec![2, 3]);
        assert_eq!(n.len(), 3);
        assert_eq!(m.len(), 3);

        assert!((&n & &set_of(&[])).is_empty());
    }

    #[test]
    fn test_set_algebra_keeps_payloads() {
        let by_id = |a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0);
        let n = OrderedSet::from_iter_with_comparator(vec![(1, 'a'), (2, 'a')], by_id);
        let m = OrderedSet::from_iter_with_comparator(vec![(1, 'b'), (3, 'b')], by_id);

        assert_eq!((&n + &m).to_vec(), vec![(1, 'b'), (2, 'a'), (3, 'b')]);
        assert_eq!(
            (n.clone() + m.clone()).to_vec(),
            vec![(1, 'b'), (2, 'a'), (3, 'b')],
        );

        let mut merged = n.clone();
        merged += &m;
        assert_eq!(merged.to_vec(), vec![(1, 'b'), (2, 'a'), (3, 'b')]);

        assert_eq!((&n & &m).to_vec(), vec![(1, 'a')]);
        assert_eq!((&m & &n).to_vec(), vec![(1, 'b')]);

        assert_eq!(n.to_vec(), vec![(1, 'a'), (2, 'a')]);
        assert_eq!(m.to_vec(), vec![(1, 'b'), (3, 'b')]);
    }

    #[test]
    fn test_eq() {
        let n = set_of(&[1, 2, 3]);
        assert_eq!(n, set_of(&[3, 2, 1]));
        assert_eq!(n, n.clone());
        assert_ne!(n, set_of(&[1, 2]));
        assert_ne!(set_of(&[1, 2]), n);
        assert_ne!(n, set_of(&[1, 2, 4]));
        assert_eq!(set_of(&[]), OrderedSet::new());
    }

    #[test]
    fn test_clone_is_independent() {
        let n = set_of(&[1, 2]);
        let mut m = n.clone();
        m.insert(3);
        assert_eq!(n.to_vec(), vec![1, 2]);
        assert_eq!(m.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", set_of(&[2, 1])), "{1, 2}");
    }

    #[test]
    fn test_into_iter() {
        let set = set_of(&[1, 5, 3]);
        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let set = set_of(&[1, 5, 3]);
        assert_eq!(set.iter().len(), 3);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&set).into_iter().count(), 3);
    }

    #[test]
    fn test_ser_de() {
        let set = set_of(&[2, 1, 3]);
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_ser_de_bincode() {
        let set = set_of(&[5, 4, 9, 1]);
        let bytes = bincode::serialize(&set).unwrap();
        let decoded: OrderedSet<u32> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, set);
        assert!(decoded.is_balanced());
    }
}
