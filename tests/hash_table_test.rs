// Integration tests for the linear-probing hash table

use algotrace::operations::hash_table;
use algotrace::snapshot::Timeline;
use algotrace::step::{Step, StepKind};
use algotrace::structures::hash_table::HashTable;

#[test]
fn test_collisions_probe_forward() {
    let mut table = HashTable::with_capacity(7);
    let mut steps: Vec<Step> = Vec::new();
    // 3, 10 and 17 all hash to slot 3
    for key in [3, 10, 17] {
        assert!(hash_table::insert(&mut table, key, key * 10, &mut steps));
    }

    let occupied: Vec<(usize, i64)> = table.entries().map(|(i, e)| (i, e.key)).collect();
    assert_eq!(occupied, vec![(3, 3), (4, 10), (5, 17)]);
    assert_eq!(table.collisions(), 3);
    assert!(steps.iter().any(|s| s.kind == StepKind::Compare));

    assert_eq!(hash_table::search(&table, 17, &mut ()), Some(170));
    assert_eq!(hash_table::search(&table, 24, &mut ()), None);
}

#[test]
fn test_same_key_overwrites_value() {
    let mut table = HashTable::with_capacity(5);
    hash_table::insert(&mut table, 4, 1, &mut ());
    hash_table::insert(&mut table, 4, 2, &mut ());
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(4), Some(2));
}

#[test]
fn test_full_table_rejects_new_key() {
    let mut table = HashTable::with_capacity(2);
    hash_table::insert(&mut table, 0, 0, &mut ());
    hash_table::insert(&mut table, 1, 10, &mut ());

    let before = table.clone();
    let mut steps: Vec<Step> = Vec::new();
    assert!(!hash_table::insert(&mut table, 2, 20, &mut steps));
    assert!(steps.last().is_some_and(|s| s.rejected));
    assert_eq!(table, before);
}

#[test]
fn test_rejected_insert_leaves_collision_count() {
    let mut table = HashTable::with_capacity(3);
    for key in [0, 1, 2] {
        hash_table::insert(&mut table, key, key, &mut ());
    }
    assert_eq!(table.collisions(), 0);

    let before = table.clone();
    assert!(!hash_table::insert(&mut table, 9, 90, &mut ()));
    assert_eq!(table, before);
    assert_eq!(hash_table::collision_stats(&table, &mut ()).collisions, 0);
}

#[test]
fn test_delete_then_clear() {
    let mut table = HashTable::with_capacity(11);
    for key in [5, 16, 8] {
        hash_table::insert(&mut table, key, -key, &mut ());
    }
    assert_eq!(hash_table::delete(&mut table, 8, &mut ()), Some(-8));
    assert_eq!(hash_table::delete(&mut table, 8, &mut ()), None);
    assert_eq!(hash_table::keys(&table, &mut ()), vec![5, 16]);

    assert_eq!(hash_table::clear(&mut table, &mut ()), 2);
    assert!(table.is_empty());
    assert_eq!(table.collisions(), 0);
}

#[test]
fn test_negative_keys_hash_by_magnitude() {
    let mut table = HashTable::with_capacity(10);
    hash_table::insert(&mut table, -13, 13, &mut ());
    assert_eq!(table.entries().next().map(|(i, _)| i), Some(3));
}

#[test]
fn test_stats_and_load_factor() {
    let mut table = HashTable::with_capacity(4);
    for key in [0, 4, 8] {
        hash_table::insert(&mut table, key, 1, &mut ());
    }
    let stats = hash_table::collision_stats(&table, &mut ());
    assert_eq!(stats.collisions, 3);
    assert!((stats.average_probes - 1.0).abs() < 1e-9);
    assert!((hash_table::load_factor(&table, &mut ()) - 0.75).abs() < 1e-9);
}

#[test]
fn test_timeline_captures_insert() {
    let initial = HashTable::with_capacity(5);
    let mut table = initial.clone();
    let mut timeline = Timeline::new(initial, usize::MAX);
    hash_table::insert(&mut table, 7, 70, &mut timeline);

    assert!(timeline.state_at(0).is_empty());
    assert_eq!(timeline.state_at(timeline.len()).get(7), Some(70));
}
