#![no_main]

use std::collections::HashMap;

use arbitrary::{Arbitrary, Unstructured};
use intintmap::IntIntMap;
use libfuzzer_sys::fuzz_target;

/// Map operations
#[derive(Debug, Arbitrary, Clone)]
enum MapOp {
    /// Insert or overwrite a key
    Put { key: i16, value: i64 },

    /// Remove a key
    Del { key: i16 },

    /// Look up a key
    Get { key: i16 },

    /// Insert a full-width key
    PutWide { key: i64, value: i64 },

    /// Drop everything
    Clear,

    /// Walk every item and cross-check
    Scan,
}

/// A map shape plus the operations to run against it
#[derive(Debug, Arbitrary)]
struct Scenario {
    size_hint: u8,
    /// Mapped onto (0, 1)
    fill_factor: u8,
    ops: Vec<MapOp>,
}

impl Scenario {
    fn execute(&self) {
        let fill_factor = (f64::from(self.fill_factor) + 1.0) / 257.0;
        let Ok(mut map) = IntIntMap::new(usize::from(self.size_hint), fill_factor) else {
            return;
        };
        let mut model: HashMap<i64, i64> = HashMap::new();

        for op in &self.ops {
            match *op {
                MapOp::Put { key, value } => {
                    let key = i64::from(key);
                    assert_eq!(map.put(key, value), model.insert(key, value));
                }
                MapOp::PutWide { key, value } => {
                    assert_eq!(map.put(key, value), model.insert(key, value));
                }
                MapOp::Del { key } => {
                    let key = i64::from(key);
                    assert_eq!(map.del(key), model.remove(&key));
                }
                MapOp::Get { key } => {
                    let key = i64::from(key);
                    assert_eq!(map.get(key), model.get(&key).copied());
                }
                MapOp::Clear => {
                    map.clear();
                    model.clear();
                }
                MapOp::Scan => {
                    assert_eq!(map.items().count(), model.len());
                    for (key, value) in map.items() {
                        assert_eq!(model.get(&key), Some(&value));
                    }
                }
            }
            assert_eq!(map.size(), model.len());
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok(scenario) = Scenario::arbitrary(&mut unstructured) {
        scenario.execute();
    }
});
