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


//! Key mixing and capacity arithmetic
//!
//! Keys are spread with a golden-ratio multiply followed by an XOR fold of
//! the high bits (`h ^ (h >> 16)`), so that small sequential keys do not
//! pile up in neighbouring pairs once masked down to the table size.

use crate::core::{Error, Result};

/// Golden-ratio derived multiplier (2^32 / phi)
pub(crate) const INT_PHI: i64 = 0x9E37_79B9;

/// Key value that marks an empty pair. Key 0 itself is stored out of band.
pub(crate) const FREE_KEY: i64 = 0;

/// Smallest table capacity, in pairs
pub(crate) const MIN_CAPACITY: usize = 2;

/// Multiplicative mix with wraparound, then fold the high half-word down.
#[inline(always)]
pub(crate) fn phi_mix(key: i64) -> i64 {
    let h = key.wrapping_mul(INT_PHI);
    h ^ (h >> 16)
}

/// Flat offset of the key slot of `key`'s home pair.
/// `mask` is `capacity - 1`, so the result is always even and below `2 * capacity`.
#[inline(always)]
pub(crate) fn home_ptr(key: i64, mask: usize) -> usize {
    ((phi_mix(key) as usize) & mask) << 1
}

/// Capacity in pairs for a map expected to hold `size_hint` entries:
/// the next power of two at or above `ceil(size_hint / fill_factor)`, minimum 2.
pub(crate) fn array_size(size_hint: usize, fill_factor: f64) -> Result<usize> {
    let wanted = (size_hint as f64 / fill_factor).ceil();
    if wanted >= usize::MAX as f64 {
        return Err(Error::capacity_overflow(size_hint));
    }

    (wanted as usize)
        .max(MIN_CAPACITY)
        .checked_next_power_of_two()
        .filter(|&cap| slots_fit(cap))
        .ok_or_else(|| Error::capacity_overflow(size_hint))
}

/// Whether `2 * capacity` i64 slots can be allocated at all.
#[inline]
pub(crate) fn slots_fit(capacity: usize) -> bool {
    capacity
        .checked_mul(2 * std::mem::size_of::<i64>())
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

/// Occupied-pair count at which the table grows: `floor(capacity * fill_factor)`
#[inline]
pub(crate) fn threshold(capacity: usize, fill_factor: f64) -> usize {
    (capacity as f64 * fill_factor).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi_mix_known_values() {
        assert_eq!(phi_mix(0), 0);
        assert_eq!(phi_mix(1), 0x9E37_E78E);
        assert_eq!(phi_mix(-1), 0x9E37_E78F);
        assert_eq!(phi_mix(2), 0x1_3C6F_CF1C);
    }

    #[test]
    fn test_phi_mix_wraps_on_overflow() {
        // Must not panic in debug builds
        let _ = phi_mix(i64::MAX);
        let _ = phi_mix(i64::MIN);
    }

    #[test]
    fn test_home_ptr_is_even_and_in_range() {
        let mask = 31;
        assert_eq!(home_ptr(1, mask), 14 * 2);
        assert_eq!(home_ptr(-1, mask), 15 * 2);
        assert_eq!(home_ptr(61, mask), 13 * 2);
        assert_eq!(home_ptr(62, mask), 2);

        for key in (-10_000i64..10_000).step_by(7) {
            let ptr = home_ptr(key, mask);
            assert_eq!(ptr % 2, 0);
            assert!(ptr < 64);
        }
    }

    #[test]
    fn test_sequential_keys_spread() {
        // 16 sequential keys in a 32-pair table should land in many distinct pairs
        let mut homes: Vec<usize> = (1i64..=16).map(|k| home_ptr(k, 31)).collect();
        homes.sort_unstable();
        homes.dedup();
        assert!(homes.len() >= 10, "only {} distinct homes", homes.len());
    }

    #[test]
    fn test_array_size() {
        assert_eq!(array_size(10, 0.6), Ok(32));
        assert_eq!(array_size(0, 0.6), Ok(2));
        assert_eq!(array_size(1, 0.5), Ok(2));
        assert_eq!(array_size(3, 0.5), Ok(8));
        assert_eq!(array_size(2048, 0.6), Ok(4096));
        assert_eq!(array_size(64, 0.5), Ok(128));
    }

    #[test]
    fn test_array_size_overflow() {
        assert_eq!(
            array_size(usize::MAX, 0.5),
            Err(Error::capacity_overflow(usize::MAX))
        );
        assert!(array_size(usize::MAX / 4, 0.9).is_err());
    }

    #[test]
    fn test_threshold() {
        assert_eq!(threshold(32, 0.6), 19);
        assert_eq!(threshold(2, 0.6), 1);
        assert_eq!(threshold(2, 0.1), 0);
        assert_eq!(threshold(4096, 0.75), 3072);
    }
}
