use crate::compare::{ByKey, Comparator, Natural};
use crate::error::InvariantViolation;
use crate::red_black_tree::set::{OrderedSet, OrderedSetIntoIter, OrderedSetIter};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// An ordered map implemented using a red black tree.
///
/// The map stores its key-value pairs in an `OrderedSet<(K, V), ByKey<C>>` that orders pairs by
/// key alone, so inserting an existing key replaces its value. Lookups compare the requested key
/// directly against stored keys and never construct a placeholder value.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert(2, 200);
/// map.insert(1, 100);
/// map.insert(3, 300);
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get(&1), Some(&100));
/// assert_eq!(map.to_vec(), vec![(1, 100), (2, 200), (3, 300)]);
///
/// assert_eq!(map.insert(1, 101), Some(100));
/// assert_eq!(map.get(&1), Some(&101));
/// ```
pub struct OrderedMap<K, V, C = Natural> {
    set: OrderedSet<(K, V), ByKey<C>>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `OrderedMap<K, V>` ordered by `K`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let map: OrderedMap<u32, u32> = OrderedMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> OrderedMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Constructs a new, empty `OrderedMap<K, V, C>` whose keys are ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.to_vec(), vec![(2, "b"), (1, "a")]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        OrderedMap {
            set: OrderedSet::with_comparator(ByKey(cmp)),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.set.insert((key, value)).map(|pair| pair.1)
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.set
            .get_by(|cmp, pair| cmp.0.compare(key, &pair.0))
            .map(|pair| &pair.1)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        // only the value is handed out, so the key order cannot change
        self.set
            .get_by_mut(|cmp, pair| cmp.0.compare(key, &pair.0))
            .map(|pair| &mut pair.1)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let map: OrderedMap<u32, u32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(!map.contains_key(&1));
    /// ```
    pub fn clear(&mut self) {
        self.set.clear();
    }

    /// Returns the key-value pair with the minimum key of the map. Returns `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some((&1, &1)));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        self.set.min().map(|pair| (&pair.0, &pair.1))
    }

    /// Returns the key-value pair with the maximum key of the map. Returns `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some((&3, &3)));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        self.set.max().map(|pair| (&pair.0, &pair.1))
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs in ascending key
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> OrderedMapIter<'_, K, V> {
        OrderedMapIter {
            set_iter: self.set.iter(),
        }
    }

    /// Returns an iterator over the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values of the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.values().collect::<Vec<&&str>>(), vec![&"a", &"b"]);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns the key-value pairs of the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::OrderedMap;
    ///
    /// let map: OrderedMap<u32, &str> = vec![(2, "b"), (1, "a")].into_iter().collect();
    /// assert_eq!(map.to_vec(), vec![(1, "a"), (2, "b")]);
    /// ```
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.set.to_vec()
    }

    /// Checks every red black tree invariant of the underlying tree.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.set.validate()
    }

    /// Returns `true` if every red black tree invariant of the underlying tree holds.
    pub fn is_balanced(&self) -> bool {
        self.set.is_balanced()
    }
}

impl<K, V, C> Clone for OrderedMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        OrderedMap {
            set: self.set.clone(),
        }
    }
}

impl<K, V, C> fmt::Debug for OrderedMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Comparator<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Maps are equal when they have the same length and every key of one maps to an equal value in
// the other.
impl<K, V, C> PartialEq for OrderedMap<K, V, C>
where
    V: PartialEq,
    C: Comparator<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |other_value| value == other_value))
    }
}

impl<K, V, C> Default for OrderedMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C> Extend<(K, V)> for OrderedMap<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.set.extend(iter);
    }
}

impl<K, V, C> FromIterator<(K, V)> for OrderedMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type IntoIter = OrderedMapIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            set_iter: self.set.into_iter(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C>
where
    K: 'a,
    V: 'a,
    C: Comparator<K>,
{
    type IntoIter = OrderedMapIter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `OrderedMap<K, V, C>`.
///
/// This iterator traverses the elements of the map in ascending key order and yields owned
/// entries.
pub struct OrderedMapIntoIter<K, V> {
    set_iter: OrderedSetIntoIter<(K, V)>,
}

impl<K, V> Iterator for OrderedMapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.set_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.set_iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIntoIter<K, V> {}

/// An iterator for `OrderedMap<K, V, C>`.
///
/// This iterator traverses the elements of the map in ascending key order and yields immutable
/// references.
pub struct OrderedMapIter<'a, K, V> {
    set_iter: OrderedSetIter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for OrderedMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.set_iter.next().map(|pair| (&pair.0, &pair.1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.set_iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIter<'_, K, V> {}

impl<K, V, C> Serialize for OrderedMap<K, V, C>
where
    K: Serialize,
    V: Serialize,
    C: Comparator<K>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<K, V, C> {
    marker: PhantomData<fn() -> OrderedMap<K, V, C>>,
}

impl<'de, K, V, C> Visitor<'de> for OrderedMapVisitor<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Comparator<K> + Default,
{
    type Value = OrderedMap<K, V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = OrderedMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V, C> Deserialize<'de> for OrderedMap<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}
