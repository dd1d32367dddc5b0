use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::definition::PanelOptions;

fn def(name: &str, group: &str) -> PanelDefinition {
	PanelDefinition::build(name, group, PanelOptions::with_partial("path/to/partial"))
		.expect("valid definition")
		.0
}

fn names(store: &PanelGroups, group: &str) -> Vec<String> {
	store.all_in_group(group).iter().map(|d| d.name().to_string()).collect()
}

fn seeded() -> PanelGroups {
	let mut store = PanelGroups::new();
	for name in ["p1", "p2", "p3"] {
		store.insert("drawer", None, def(name, "drawer"));
	}
	store
}

#[test]
fn normalize_matches_position_table() {
	assert_eq!(normalize_position(None, 3), 3);
	assert_eq!(normalize_position(Some(0), 3), 0);
	assert_eq!(normalize_position(Some(1), 3), 0);
	assert_eq!(normalize_position(Some(2), 3), 1);
	assert_eq!(normalize_position(Some(4), 3), 3);
	assert_eq!(normalize_position(Some(100), 3), 3);
	assert_eq!(normalize_position(Some(5), 0), 0);
}

#[test]
fn appends_without_position() {
	assert_eq!(names(&seeded(), "drawer"), ["p1", "p2", "p3"]);
}

#[test]
fn inserts_at_positions() {
	let mut store = seeded();
	assert_eq!(store.insert("drawer", Some(2), def("p4", "drawer")), 1);
	assert_eq!(names(&store, "drawer"), ["p1", "p4", "p2", "p3"]);

	let mut store = seeded();
	store.insert("drawer", Some(0), def("p4", "drawer"));
	assert_eq!(names(&store, "drawer"), ["p4", "p1", "p2", "p3"]);

	let mut store = seeded();
	store.insert("drawer", Some(100), def("p4", "drawer"));
	assert_eq!(names(&store, "drawer"), ["p1", "p2", "p3", "p4"]);
}

#[test]
fn reading_unknown_group_does_not_create_it() {
	let store = seeded();
	assert!(store.all_in_group("main").is_empty());
	assert_eq!(store.group_names().collect::<Vec<_>>(), ["drawer"]);
}

#[test]
fn remove_drops_emptied_group() {
	let mut store = seeded();
	store.insert("main", None, def("preview", "main"));

	let (removed, index) = store.remove_by_name("preview").expect("present");
	assert_eq!(removed.name(), "preview");
	assert_eq!(index, 0);
	assert_eq!(store.group_names().collect::<Vec<_>>(), ["drawer"]);
	assert!(store.remove_by_name("preview").is_none());
}

#[test]
fn find_respects_group_filter() {
	let mut store = seeded();
	store.insert("main", None, def("preview", "main"));

	assert!(store.find_by_name("preview", None).is_some());
	assert!(store.find_by_name("preview", Some("main")).is_some());
	assert!(store.find_by_name("preview", Some("drawer")).is_none());
	assert_eq!(store.count_in(None), 4);
	assert_eq!(store.count_in(Some("main")), 1);
	assert_eq!(store.count_in(Some("nope")), 0);
}

proptest! {
	#[test]
	fn insert_lands_at_normalized_index(count in 0usize..8, position in proptest::option::of(0usize..12)) {
		let mut store = PanelGroups::new();
		for i in 0..count {
			store.insert("g", None, def(&format!("p{i}"), "g"));
		}
		let before = names(&store, "g");
		let index = store.insert("g", position, def("new", "g"));
		let after = names(&store, "g");

		prop_assert_eq!(index, normalize_position(position, count));
		prop_assert_eq!(&after[index], "new");
		let mut without: Vec<String> = after.clone();
		without.remove(index);
		prop_assert_eq!(without, before);
	}
}

#[test]
fn reposition_normalizes_after_detaching() {
	let mut store = seeded();
	assert_eq!(store.reposition("p1", Some(3)), Some(2));
	assert_eq!(names(&store, "drawer"), ["p2", "p3", "p1"]);
	assert_eq!(store.reposition("p1", Some(0)), Some(0));
	assert_eq!(names(&store, "drawer"), ["p1", "p2", "p3"]);
	assert_eq!(store.reposition("missing", Some(0)), None);
}
