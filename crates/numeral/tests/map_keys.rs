//! Wrapped and raw values are interchangeable as keys in the standard
//! hashed and ordered containers.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use numeral::Int32;
use numeral::Number;
use numeral::UInt64;

#[test]
fn hash_map_lookup_by_raw_key() {
	let mut map: HashMap<Int32, &str> = HashMap::new();
	map.insert(Number::new(1), "one");
	map.insert(Number::new(-7), "minus seven");

	assert_eq!(map.get(&1), Some(&"one"));
	assert_eq!(map.get(&-7), Some(&"minus seven"));
	assert_eq!(map.get(&2), None);

	assert_eq!(map.get(&Number::new(1)), Some(&"one"));
}

#[test]
fn btree_map_lookup_by_raw_key() {
	let mut map: BTreeMap<UInt64, u32> = BTreeMap::new();
	map.insert(Number::new(10), 1);
	map.insert(Number::new(u64::MAX), 2);

	assert_eq!(map.get(&10u64), Some(&1));
	assert_eq!(map.get(&u64::MAX), Some(&2));
	assert_eq!(map.get(&11u64), None);

	// Iteration order follows the raw ordering.
	let keys: Vec<u64> = map.keys().map(|k| k.value()).collect();
	assert_eq!(keys, [10, u64::MAX]);
}

#[test]
fn hash_set_membership_by_raw_key() {
	let mut set: HashSet<Int32> = HashSet::new();
	set.insert(Number::new(3));

	assert!(set.contains(&3));
	assert!(!set.contains(&4));
	assert!(set.contains(&Number::new(3)));
}

#[test]
fn wrapped_and_raw_keys_collide() {
	// Inserting under the wrapper and under an equal wrapper built from
	// the raw value must hit the same slot.
	let mut map: HashMap<Int32, &str> = HashMap::new();
	map.insert(Number::new(5), "first");
	let previous = map.insert(Number::from(5), "second");

	assert_eq!(previous, Some("first"));
	assert_eq!(map.len(), 1);
}
