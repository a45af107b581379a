// Copyright 2025 Stoolap Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Open-addressing i64 -> i64 hash map
// - Flat `[key, value, key, value, ...]` storage, one pair per slot
// - Key 0 marks an empty pair; a real key 0 lives out of band (has_free_key/free_val)
// - Golden-ratio multiply + XOR fold for the home pair, linear probing by pair
// - Doubling rehash once occupied pairs reach floor(capacity * fill_factor)
// - Backward-shift deletion (no tombstones), so every probe stops at the first empty pair
//
// Not thread-safe: mutation requires `&mut self`, wrap in a lock to share.

mod hash;
mod iter;

pub use iter::{Items, Keys};

use std::fmt;

use crate::core::{MapConfig, Result};
use self::hash::{array_size, home_ptr, slots_fit, threshold, FREE_KEY};

/// Capacity produced by `MapConfig::default()`
const DEFAULT_CAPACITY: usize = 32;

#[cold]
#[inline(never)]
fn capacity_overflow(capacity: usize) -> ! {
    panic!("IntIntMap capacity overflow while growing past {} pairs", capacity);
}

/// Hash map from `i64` keys to `i64` values.
///
/// Every key, including `0`, is an ordinary key: misses are reported as
/// `None`, so a stored value of `0` is never confused with absence.
///
/// # Example
/// ```
/// use intintmap::IntIntMap;
///
/// let mut map = IntIntMap::new(10, 0.6).unwrap();
/// map.put(0, 12345);
/// map.put(61, 68);
/// assert_eq!(map.get(61), Some(68));
/// assert_eq!(map.get(0), Some(12345));
/// assert_eq!(map.get(62), None);
/// ```
#[derive(Clone)]
pub struct IntIntMap {
    /// Key/value pairs; `data[2 * i]` is a key, `data[2 * i + 1]` its value
    data: Box<[i64]>,
    fill_factor: f64,
    /// Occupied-pair count that triggers a rehash
    threshold: usize,
    /// `capacity - 1`, masks a mixed hash down to a pair index
    mask: usize,
    /// `2 * capacity - 1`, wraps a flat slot offset
    mask2: usize,
    has_free_key: bool,
    free_val: i64,
    /// Table entries plus one if the free key is set
    size: usize,
}

impl Default for IntIntMap {
    fn default() -> Self {
        Self::allocate(DEFAULT_CAPACITY, MapConfig::default().fill_factor)
    }
}

impl IntIntMap {
    /// Creates a map sized to hold `size_hint` entries before its first rehash.
    ///
    /// Returns [`Error::InvalidFillFactor`](crate::Error::InvalidFillFactor) unless
    /// `0 < fill_factor < 1`.
    pub fn new(size_hint: usize, fill_factor: f64) -> Result<Self> {
        Self::with_config(&MapConfig {
            size_hint,
            fill_factor,
        })
    }

    /// Creates a map from a [`MapConfig`]
    pub fn with_config(config: &MapConfig) -> Result<Self> {
        config.validate()?;
        let capacity = array_size(config.size_hint, config.fill_factor)?;
        Ok(Self::allocate(capacity, config.fill_factor))
    }

    fn allocate(capacity: usize, fill_factor: f64) -> Self {
        Self {
            data: vec![FREE_KEY; 2 * capacity].into_boxed_slice(),
            fill_factor,
            threshold: threshold(capacity, fill_factor),
            mask: capacity - 1,
            mask2: 2 * capacity - 1,
            has_free_key: false,
            free_val: 0,
            size: 0,
        }
    }

    /// Number of entries, including key 0 if present
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of key/value pairs the table can hold (always a power of two)
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Occupied-pair count at which the next insertion doubles the table
    #[inline(always)]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline(always)]
    pub fn fill_factor(&self) -> f64 {
        self.fill_factor
    }

    /// Fraction of table pairs in use. Key 0 is stored outside the table
    /// and does not count.
    pub fn load_factor(&self) -> f64 {
        self.occupied() as f64 / self.capacity() as f64
    }

    #[inline(always)]
    fn occupied(&self) -> usize {
        self.size - usize::from(self.has_free_key)
    }

    /// Follows the probe run of a non-zero `key`.
    /// `Ok(ptr)` is the flat offset of the matching key slot, `Err(ptr)` the
    /// first empty pair, which is where the key would be inserted.
    #[inline(always)]
    fn find(&self, key: i64) -> std::result::Result<usize, usize> {
        debug_assert_ne!(key, FREE_KEY);

        let mask2 = self.mask2;
        let mut ptr = home_ptr(key, self.mask);

        loop {
            // SAFETY: ptr is always masked with mask2 == data.len() - 1.
            let k = unsafe { *self.data.get_unchecked(ptr) };

            if k == key {
                return Ok(ptr);
            }
            if k == FREE_KEY {
                return Err(ptr);
            }

            ptr = (ptr + 2) & mask2;
        }
    }

    /// Returns the value stored under `key`, or `None` if it is absent
    #[inline]
    pub fn get(&self, key: i64) -> Option<i64> {
        if key == FREE_KEY {
            return self.has_free_key.then_some(self.free_val);
        }

        self.find(key).ok().map(|ptr| self.data[ptr + 1])
    }

    #[inline]
    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` under `key`, returning the previous value if the key
    /// was already present. May rehash the whole table.
    #[inline]
    pub fn put(&mut self, key: i64, value: i64) -> Option<i64> {
        if key == FREE_KEY {
            let old = self.has_free_key.then_some(self.free_val);
            if !self.has_free_key {
                self.has_free_key = true;
                self.size += 1;
            }
            self.free_val = value;
            return old;
        }

        match self.find(key) {
            Ok(ptr) => Some(std::mem::replace(&mut self.data[ptr + 1], value)),
            Err(ptr) => {
                self.data[ptr] = key;
                self.data[ptr + 1] = value;
                self.size += 1;

                if self.occupied() >= self.threshold {
                    self.rehash();
                }
                None
            }
        }
    }

    /// Removes `key`, returning its value if it was present
    pub fn del(&mut self, key: i64) -> Option<i64> {
        if key == FREE_KEY {
            if !self.has_free_key {
                return None;
            }
            self.has_free_key = false;
            self.size -= 1;
            return Some(std::mem::take(&mut self.free_val));
        }

        let ptr = self.find(key).ok()?;
        let value = self.data[ptr + 1];
        self.shift_keys(ptr);
        self.size -= 1;
        Some(value)
    }

    /// Backward-shift deletion. `gap` is the key slot being vacated; every
    /// later pair in the same run that may legally sit at the gap moves back
    /// into it, and the last gap left over is cleared.
    fn shift_keys(&mut self, mut gap: usize) {
        let mask2 = self.mask2;
        let mut ptr = gap;

        loop {
            ptr = (ptr + 2) & mask2;
            let key = self.data[ptr];

            if key == FREE_KEY {
                break;
            }

            let home = home_ptr(key, self.mask);

            // The entry may move only if the gap lies in [home, ptr), cyclically
            let movable = if home <= ptr {
                gap >= home && gap < ptr
            } else {
                gap >= home || gap < ptr
            };

            if movable {
                self.data[gap] = key;
                self.data[gap + 1] = self.data[ptr + 1];
                gap = ptr;
            }
        }

        self.data[gap] = FREE_KEY;
        self.data[gap + 1] = 0;
    }

    /// Doubles the capacity and re-homes every table pair. The free key is untouched.
    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let occupied = self.occupied();

        // One doubling is enough unless the fill factor is so small that
        // the doubled threshold still rounds down to the current occupancy
        let mut new_capacity = old_capacity;
        loop {
            new_capacity = match new_capacity.checked_mul(2) {
                Some(cap) if slots_fit(cap) => cap,
                _ => capacity_overflow(old_capacity),
            };
            if threshold(new_capacity, self.fill_factor) > occupied {
                break;
            }
        }

        let old = std::mem::replace(
            &mut self.data,
            vec![FREE_KEY; 2 * new_capacity].into_boxed_slice(),
        );
        self.mask = new_capacity - 1;
        self.mask2 = 2 * new_capacity - 1;
        self.threshold = threshold(new_capacity, self.fill_factor);

        for pair in old.chunks_exact(2) {
            let key = pair[0];
            if key == FREE_KEY {
                continue;
            }
            // Keys are unique, so the probe always ends on an empty pair
            let ptr = self.find(key).unwrap_or_else(|empty| empty);
            self.data[ptr] = key;
            self.data[ptr + 1] = pair[1];
        }

        tracing::debug!(
            old_capacity,
            new_capacity,
            size = self.size,
            threshold = self.threshold,
            "rehashed int-int map"
        );
    }

    /// Removes every entry. Capacity is kept.
    pub fn clear(&mut self) {
        tracing::trace!(capacity = self.capacity(), size = self.size, "clearing int-int map");
        self.data.fill(FREE_KEY);
        self.has_free_key = false;
        self.free_val = 0;
        self.size = 0;
    }

    /// Lazily iterates over all keys in slot order (key 0 first if present)
    #[inline]
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.items())
    }

    /// Lazily iterates over all `(key, value)` pairs in slot order
    /// (key 0 first if present)
    #[inline]
    pub fn items(&self) -> Items<'_> {
        Items::new(
            &self.data,
            self.has_free_key.then_some(self.free_val),
            self.size,
        )
    }
}

impl fmt::Debug for IntIntMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items()).finish()
    }
}

impl PartialEq for IntIntMap {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.items().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for IntIntMap {}

impl Extend<(i64, i64)> for IntIntMap {
    fn extend<I: IntoIterator<Item = (i64, i64)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl FromIterator<(i64, i64)> for IntIntMap {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a IntIntMap {
    type Item = (i64, i64);
    type IntoIter = Items<'a>;

    fn into_iter(self) -> Items<'a> {
        self.items()
    }
}
