use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use red_black_collections::red_black_tree::{OrderedMap, OrderedSet};
use std::collections::{BTreeMap, BTreeSet};

#[test]
fn int_test_ordered_set() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut set = OrderedSet::new();
    let mut expected = BTreeSet::new();
    for _ in 0..2_000 {
        let value = rng.gen_range(0..1_000u32);

        assert_eq!(set.insert(value).is_some(), !expected.insert(value));
        assert_eq!(set.validate(), Ok(()));
        assert_eq!(set.len(), expected.len());
    }

    assert_eq!(set.iter().len(), set.len());
    assert!(set.iter().eq(expected.iter()));
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());

    for value in 0..1_000 {
        assert_eq!(set.contains(&value), expected.contains(&value));
    }

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(!set.contains(&expected.iter().next().cloned().unwrap()));
    assert!(set.is_balanced());
}

#[test]
fn int_test_ordered_set_shuffled_inserts() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut values: Vec<u64> = (0..5_000).collect();
    values.shuffle(&mut rng);

    let set: OrderedSet<u64> = values.iter().cloned().collect();
    assert!(set.is_balanced());
    assert_eq!(set.to_vec(), (0..5_000).collect::<Vec<u64>>());
}

#[test]
fn int_test_ordered_set_algebra() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let left_values: Vec<u32> = (0..rng.gen_range(0..200))
            .map(|_| rng.gen_range(0..300))
            .collect();
        let right_values: Vec<u32> = (0..rng.gen_range(0..200))
            .map(|_| rng.gen_range(0..300))
            .collect();

        let left: OrderedSet<u32> = left_values.iter().cloned().collect();
        let right: OrderedSet<u32> = right_values.iter().cloned().collect();
        let left_expected: BTreeSet<u32> = left_values.iter().cloned().collect();
        let right_expected: BTreeSet<u32> = right_values.iter().cloned().collect();

        let union = &left + &right;
        assert!(union.is_balanced());
        assert_eq!(
            union.to_vec(),
            left_expected.union(&right_expected).cloned().collect::<Vec<u32>>(),
        );

        let intersection = &left & &right;
        assert!(intersection.is_balanced());
        assert_eq!(
            intersection.to_vec(),
            left_expected.intersection(&right_expected).cloned().collect::<Vec<u32>>(),
        );

        assert_eq!(left.to_vec(), left_expected.iter().cloned().collect::<Vec<u32>>());
        assert_eq!(right.to_vec(), right_expected.iter().cloned().collect::<Vec<u32>>());

        assert_eq!(left == right, left_expected == right_expected);
        assert_eq!(right == left, left_expected == right_expected);
        assert_eq!(left, left.clone());

        let mut merged = left.clone();
        merged += &right;
        assert_eq!(merged, union);
    }
}

#[test]
fn int_test_ordered_set_reverse_comparator() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut set = OrderedSet::with_comparator(|a: &i64, b: &i64| b.cmp(a));
    let mut expected = BTreeSet::new();
    for _ in 0..1_000 {
        let value = rng.gen_range(-500..500);
        set.insert(value);
        expected.insert(value);
    }

    assert!(set.is_balanced());
    assert_eq!(set.min(), expected.iter().next_back());
    assert_eq!(set.max(), expected.iter().next());
    assert!(set.iter().eq(expected.iter().rev()));
}

#[test]
fn int_test_ordered_map() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut map = OrderedMap::new();
    let mut expected = BTreeMap::new();
    for _ in 0..2_000 {
        let key = rng.gen_range(0..500u32);
        let value = rng.gen::<u64>();

        assert_eq!(map.insert(key, value), expected.insert(key, value));
        assert!(map.is_balanced());
    }

    assert_eq!(map.len(), expected.len());
    assert!(map.iter().eq(expected.iter()));

    for key in 0..500 {
        assert_eq!(map.get(&key), expected.get(&key));
        assert_eq!(map.contains_key(&key), expected.contains_key(&key));
    }

    for (key, value) in expected.iter_mut() {
        let new_value = rng.gen::<u64>();
        *map.get_mut(key).unwrap() = new_value;
        *value = new_value;
    }
    assert_eq!(
        map.into_iter().collect::<Vec<(u32, u64)>>(),
        expected.into_iter().collect::<Vec<(u32, u64)>>(),
    );
}
