//! Fixed-capacity hash table resolved by linear probing
//!
//! The table never grows. Deletion clears the slot outright (no tombstone), so a key
//! that was pushed past the cleared slot by an earlier collision can become unreachable.

/// An occupied slot
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: i64,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashTable {
    pub(crate) slots: Vec<Option<Entry>>,
    pub(crate) size: usize,
    pub(crate) collisions: usize,
}

impl HashTable {
    /// Empty table; a capacity of zero is bumped to one
    pub fn with_capacity(capacity: usize) -> Self {
        HashTable {
            slots: vec![None; capacity.max(1)],
            size: 0,
            collisions: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Collisions seen by inserts since the table was created or cleared
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn slots(&self) -> &[Option<Entry>] {
        &self.slots
    }

    /// Home slot of `key`: `|key| mod capacity`
    pub fn hash(&self, key: i64) -> usize {
        (key.unsigned_abs() % self.capacity() as u64) as usize
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Occupied entries in slot order
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (i, e)))
    }

    /// Direct lookup without emitting steps
    pub fn get(&self, key: i64) -> Option<i64> {
        let start = self.hash(key);
        for offset in 0..self.capacity() {
            match &self.slots[(start + offset) % self.capacity()] {
                None => return None,
                Some(entry) if entry.key == key => return Some(entry.value),
                Some(_) => {}
            }
        }
        None
    }
}
