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


//! # intintmap - Fast i64 to i64 hash map
//!
//! A fixed-type associative container for workloads that keep tens to
//! hundreds of millions of integer-keyed entries in memory. Entries live
//! unboxed in one flat `[key, value, ...]` array.
//!
//! ## Key Features
//!
//! - **Open addressing** - Linear probing over key/value pairs that share a cache line
//! - **Golden-ratio mixing** - Sequential and strided keys spread across the table
//! - **Tombstone-free deletion** - Backward-shift compaction keeps probe runs short
//! - **Key 0 is a normal key** - Stored out of band, misses are `None`
//!
//! ## Quick Start
//!
//! ```rust
//! use intintmap::{IntIntMap, MapConfig};
//!
//! let mut map = IntIntMap::with_config(&MapConfig::new().with_size_hint(1024)).unwrap();
//!
//! assert_eq!(map.put(42, 7), None);
//! assert_eq!(map.put(42, 8), Some(7));
//! assert_eq!(map.get(42), Some(8));
//! assert_eq!(map.del(42), Some(8));
//! assert!(map.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Configuration ([`MapConfig`]) and errors ([`Error`])
//! - [`map`] - The map itself ([`IntIntMap`]) and its iterators
//!
//! The map is not synchronized. Share it across threads behind a lock.

pub mod core;
pub mod map;

pub use crate::core::{Error, MapConfig, Result, DEFAULT_FILL_FACTOR, DEFAULT_SIZE_HINT};
pub use map::{IntIntMap, Items, Keys};
