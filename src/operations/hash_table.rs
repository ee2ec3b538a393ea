//! Hash table operations with linear probing
//!
//! Positions on every step are slot indices. A probe sequence starts at
//! `|key| mod capacity` and walks forward (wrapping) for at most `capacity` slots.

use crate::step::{Recorder, Step, StepKind};
use crate::structures::hash_table::{Entry, HashTable};

/// Load factor from which inserts warn about crowding
pub const CROWDED_LOAD: f64 = 0.7;

/// Insert `key`, or overwrite its value if the key is already on its probe chain.
///
/// Returns `false` when every slot is taken by other keys. Collisions met on the way
/// are only added to the table's counter once the key has been placed or updated.
pub fn insert<R: Recorder<HashTable>>(
    table: &mut HashTable,
    key: i64,
    value: i64,
    rec: &mut R,
) -> bool {
    rec.record(
        table,
        Step::new(
            StepKind::Highlight,
            format!("Inserting key={}, value={}", key, value),
        ),
    );

    let load = table.load_factor();
    if load >= CROWDED_LOAD {
        rec.record(
            table,
            Step::new(
                StepKind::Highlight,
                format!("Load factor {:.2} >= {} (consider resizing)", load, CROWDED_LOAD),
            ),
        );
    }

    let capacity = table.capacity();
    let home = table.hash(key);
    rec.record(
        table,
        Step::at(
            StepKind::Active,
            vec![home],
            format!("Hash({}) = {} % {} = {}", key, key, capacity, home),
        ),
    );

    let mut index = home;
    let mut collisions = 0;
    for probes in 0..capacity {
        match &mut table.slots[index] {
            None => {
                table.slots[index] = Some(Entry { key, value });
                table.size += 1;
                table.collisions += collisions;
                let after = if probes > 0 {
                    format!(" after {} probes", probes)
                } else {
                    String::new()
                };
                rec.record(
                    table,
                    Step::at(
                        StepKind::Insert,
                        vec![index],
                        format!(
                            "✅ Inserted at index {}{}. Size: {}/{}",
                            index, after, table.size, capacity
                        ),
                    ),
                );
                return true;
            }
            Some(entry) if entry.key == key => {
                let old = std::mem::replace(&mut entry.value, value);
                let message = format!("✅ Updated key {}: {} -> {}", key, old, value);
                table.collisions += collisions;
                rec.record(table, Step::at(StepKind::Insert, vec![index], message));
                return true;
            }
            Some(entry) => {
                let occupant = entry.key;
                collisions += 1;
                rec.record(
                    table,
                    Step::at(
                        StepKind::Compare,
                        vec![index],
                        format!(
                            "Collision at index {} (occupied by key {}). Probing...",
                            index, occupant
                        ),
                    ),
                );
                index = (index + 1) % capacity;
            }
        }
    }

    rec.record(
        table,
        Step::reject(format!(
            "❌ Table is full ({}/{}). Cannot insert key {}",
            table.size, capacity, key
        )),
    );
    false
}

/// Look `key` up along its probe chain, stopping at the first empty slot
pub fn search<R: Recorder<HashTable>>(table: &HashTable, key: i64, rec: &mut R) -> Option<i64> {
    rec.record(
        table,
        Step::new(StepKind::Highlight, format!("Searching for key {}", key)),
    );
    let slot = probe(table, key, rec)?;
    let entry = table.slots[slot].as_ref()?;
    rec.record(
        table,
        Step::at(
            StepKind::Search,
            vec![slot],
            format!(
                "✅ Found key {} with value {} at index {}",
                key, entry.value, slot
            ),
        ),
    );
    Some(entry.value)
}

/// Clear the slot holding `key` and return its value.
///
/// The slot is left empty rather than marked, so keys that probed past it may no longer
/// be reachable.
pub fn delete<R: Recorder<HashTable>>(table: &mut HashTable, key: i64, rec: &mut R) -> Option<i64> {
    rec.record(
        table,
        Step::new(StepKind::Highlight, format!("Deleting key {}", key)),
    );
    let slot = probe(table, key, rec)?;
    let entry = table.slots[slot].take()?;
    table.size -= 1;
    rec.record(
        table,
        Step::at(
            StepKind::Delete,
            vec![slot],
            format!(
                "✅ Deleted key {} (value: {}). Size: {}/{}",
                key,
                entry.value,
                table.size,
                table.capacity()
            ),
        ),
    );
    Some(entry.value)
}

/// Shared probe walk for search and delete. Emits the hash step and one `compare` per
/// slot, and the terminal "not found" step on a miss.
fn probe<R: Recorder<HashTable>>(table: &HashTable, key: i64, rec: &mut R) -> Option<usize> {
    let capacity = table.capacity();
    let home = table.hash(key);
    rec.record(
        table,
        Step::at(
            StepKind::Active,
            vec![home],
            format!("Hash({}) = {}", key, home),
        ),
    );

    let mut index = home;
    for probes in 0..capacity {
        rec.record(
            table,
            Step::at(
                StepKind::Compare,
                vec![index],
                format!("Probe {}: Checking index {}", probes + 1, index),
            ),
        );
        match &table.slots[index] {
            None => {
                rec.record(
                    table,
                    Step::at(
                        StepKind::Highlight,
                        vec![index],
                        format!("❌ Key {} not found (empty slot at index {})", key, index),
                    ),
                );
                return None;
            }
            Some(entry) if entry.key == key => return Some(index),
            Some(_) => index = (index + 1) % capacity,
        }
    }

    rec.record(
        table,
        Step::new(
            StepKind::Highlight,
            format!("❌ Key {} not found after {} probes", key, capacity),
        ),
    );
    None
}

/// All keys in slot order
pub fn keys<R: Recorder<HashTable>>(table: &HashTable, rec: &mut R) -> Vec<i64> {
    rec.record(table, Step::new(StepKind::Highlight, "Retrieving all keys"));

    let mut keys = Vec::with_capacity(table.len());
    let mut slots = Vec::with_capacity(table.len());
    for (i, entry) in table.entries() {
        keys.push(entry.key);
        slots.push(i);
        rec.record(
            table,
            Step::at(
                StepKind::Active,
                vec![i],
                format!("Found key {} at index {}", entry.key, i),
            ),
        );
    }

    let listed: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    rec.record(
        table,
        Step::at(
            StepKind::Sorted,
            slots,
            format!("Keys: [{}] ({} total)", listed.join(", "), keys.len()),
        ),
    );
    keys
}

/// Report the load factor with a verdict: good below 0.5, moderate below 0.7, high after
pub fn load_factor<R: Recorder<HashTable>>(table: &HashTable, rec: &mut R) -> f64 {
    let load = table.load_factor();
    rec.record(
        table,
        Step::new(
            StepKind::Highlight,
            format!(
                "Load Factor: {:.2} ({}/{})",
                load,
                table.len(),
                table.capacity()
            ),
        ),
    );

    let verdict = if load < 0.5 {
        Step::new(StepKind::Sorted, "Good load factor (< 0.5)")
    } else if load < CROWDED_LOAD {
        Step::new(StepKind::Active, "Moderate load factor (0.5-0.7)")
    } else {
        Step::new(
            StepKind::Highlight,
            "High load factor (>= 0.7) - consider resizing",
        )
    };
    rec.record(table, verdict);
    load
}

/// Empty every slot and reset the counters. Returns how many entries were dropped.
pub fn clear<R: Recorder<HashTable>>(table: &mut HashTable, rec: &mut R) -> usize {
    let dropped = table.size;
    rec.record(
        table,
        Step::new(
            StepKind::Highlight,
            format!("Clearing hash table ({} entries)", dropped),
        ),
    );

    table.slots.iter_mut().for_each(|slot| *slot = None);
    table.size = 0;
    table.collisions = 0;
    rec.record(
        table,
        Step::new(
            StepKind::Delete,
            format!("✅ Cleared {} entries. Table reset.", dropped),
        ),
    );
    dropped
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionStats {
    pub collisions: usize,
    /// Collisions per stored entry
    pub average_probes: f64,
    pub load_factor: f64,
}

pub fn collision_stats<R: Recorder<HashTable>>(table: &HashTable, rec: &mut R) -> CollisionStats {
    let stats = CollisionStats {
        collisions: table.collisions(),
        average_probes: if table.is_empty() {
            0.0
        } else {
            table.collisions() as f64 / table.len() as f64
        },
        load_factor: table.load_factor(),
    };

    rec.record(table, Step::new(StepKind::Highlight, "Collision Statistics:"));
    rec.record(
        table,
        Step::new(
            StepKind::Active,
            format!("Total collisions: {}", stats.collisions),
        ),
    );
    rec.record(
        table,
        Step::new(
            StepKind::Active,
            format!("Average probes per insert: {:.2}", stats.average_probes),
        ),
    );
    rec.record(
        table,
        Step::new(
            StepKind::Sorted,
            format!("Load factor: {:.2}", stats.load_factor),
        ),
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(capacity: usize, keys: &[i64]) -> HashTable {
        let mut table = HashTable::with_capacity(capacity);
        for &k in keys {
            insert(&mut table, k, k * 10, &mut ());
        }
        table
    }

    #[test]
    fn test_collision_probes_forward() {
        let mut table = table(7, &[3]);
        let mut steps: Vec<Step> = Vec::new();
        assert!(insert(&mut table, 10, 100, &mut steps));

        assert_eq!(table.slots()[4].as_ref().unwrap().key, 10);
        assert_eq!(table.collisions(), 1);
        let compares = steps.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(compares, 1);
        assert!(steps.last().unwrap().message.contains("after 1 probes"));
    }

    #[test]
    fn test_existing_key_updates_in_place() {
        let mut table = table(5, &[2]);
        let mut steps: Vec<Step> = Vec::new();
        insert(&mut table, 2, 7, &mut steps);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(2), Some(7));
        assert_eq!(steps.last().unwrap().message, "✅ Updated key 2: 20 -> 7");
    }

    #[test]
    fn test_crowded_insert_warns() {
        let mut table = table(4, &[0, 1, 2]);
        let mut steps: Vec<Step> = Vec::new();
        insert(&mut table, 3, 30, &mut steps);
        assert!(steps[1].message.starts_with("Load factor 0.75"));
    }

    #[test]
    fn test_full_table_rejects() {
        let mut table = table(2, &[0, 1]);
        let mut steps: Vec<Step> = Vec::new();
        let before = table.clone();
        assert!(!insert(&mut table, 4, 40, &mut steps));
        assert!(steps.last().unwrap().rejected);
        assert_eq!(table, before);
    }

    #[test]
    fn test_search_and_delete() {
        let mut table = table(7, &[1, 8, 15]);
        assert_eq!(search(&table, 15, &mut ()), Some(150));
        assert_eq!(search(&table, 22, &mut ()), None);

        assert_eq!(delete(&mut table, 1, &mut ()), Some(10));
        assert_eq!(table.len(), 2);
        assert_eq!(delete(&mut table, 1, &mut ()), None);
    }

    #[test]
    fn test_delete_without_tombstone_hides_probed_keys() {
        // 1 and 8 share home slot 1; 8 lands in slot 2
        let mut table = table(7, &[1, 8]);
        delete(&mut table, 1, &mut ());
        assert_eq!(search(&table, 8, &mut ()), None);
        assert_eq!(table.slots()[2].as_ref().unwrap().key, 8);
    }

    #[test]
    fn test_keys_stats_and_clear() {
        let mut table = table(5, &[7, 2, 12]);
        assert_eq!(keys(&table, &mut ()), vec![7, 2, 12]);

        let stats = collision_stats(&table, &mut ());
        assert_eq!(stats.collisions, 3);
        assert!((stats.average_probes - 1.0).abs() < 1e-9);

        let mut steps: Vec<Step> = Vec::new();
        load_factor(&table, &mut steps);
        assert_eq!(steps[1].kind, StepKind::Active);

        assert_eq!(clear(&mut table, &mut ()), 3);
        assert!(table.is_empty());
        assert_eq!(table.collisions(), 0);
    }

    #[test]
    fn test_update_counts_collisions_on_its_chain() {
        // 2 sits in slot 2, 7 probed past it into slot 3
        let mut table = table(5, &[2, 7]);
        assert_eq!(table.collisions(), 1);
        insert(&mut table, 7, 1, &mut ());
        assert_eq!(table.collisions(), 2);
        assert_eq!(table.get(7), Some(1));
    }
}
