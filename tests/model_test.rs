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


//! Randomized operation sequences checked against std::collections::HashMap
//!
//! Narrow key ranges force long probe runs, wrap-around at the table end,
//! and many deletions inside shared runs.

use std::collections::HashMap;

use intintmap::IntIntMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_same(map: &IntIntMap, model: &HashMap<i64, i64>) {
    assert_eq!(map.size(), model.len());
    for (&key, &value) in model {
        assert_eq!(map.get(key), Some(value), "key {}", key);
    }

    let mut items: Vec<(i64, i64)> = map.items().collect();
    let mut expected: Vec<(i64, i64)> = model.iter().map(|(&k, &v)| (k, v)).collect();
    items.sort_unstable();
    expected.sort_unstable();
    assert_eq!(items, expected);
}

fn run_sequence(seed: u64, size_hint: usize, fill_factor: f64, key_range: i64, ops: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = IntIntMap::new(size_hint, fill_factor).unwrap();
    let mut model = HashMap::new();

    for step in 0..ops {
        let key = rng.random_range(-key_range..=key_range);
        match rng.random_range(0..10) {
            0..=4 => {
                let value = rng.random_range(-3..=3);
                assert_eq!(map.put(key, value), model.insert(key, value), "put {}", key);
            }
            5..=7 => {
                assert_eq!(map.del(key), model.remove(&key), "del {}", key);
            }
            _ => {
                assert_eq!(map.get(key), model.get(&key).copied(), "get {}", key);
            }
        }
        assert_eq!(map.size(), model.len(), "size after step {}", step);

        if step % 500 == 0 {
            assert_same(&map, &model);
        }
    }
    assert_same(&map, &model);
}

#[test]
fn test_model_small_key_range() {
    for seed in 0..8 {
        run_sequence(seed, 0, 0.6, 40, 5_000);
    }
}

#[test]
fn test_model_high_fill_factor() {
    for seed in 100..104 {
        run_sequence(seed, 8, 0.95, 200, 10_000);
    }
}

#[test]
fn test_model_low_fill_factor() {
    run_sequence(7, 1, 0.05, 500, 5_000);
}

#[test]
fn test_model_wide_keys() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut map = IntIntMap::default();
    let mut model = HashMap::new();

    for _ in 0..20_000 {
        let key: i64 = rng.random();
        let value: i64 = rng.random();
        assert_eq!(map.put(key, value), model.insert(key, value));
    }
    let keys: Vec<i64> = model.keys().copied().collect();
    for key in keys.iter().step_by(3) {
        assert_eq!(map.del(*key), model.remove(key));
    }
    assert_same(&map, &model);
}
