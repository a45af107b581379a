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


//! Map configuration
//!

use super::error::{Error, Result};

/// Default initial size hint, in entries
pub const DEFAULT_SIZE_HINT: usize = 16;

/// Default fill factor
pub const DEFAULT_FILL_FACTOR: f64 = 0.6;

/// Construction parameters for an [`IntIntMap`](crate::IntIntMap)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Number of entries the map should hold before its first rehash
    /// Default: 16
    pub size_hint: usize,

    /// Ratio of occupied pairs to capacity that triggers growth, in (0, 1)
    /// Default: 0.6
    pub fill_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size_hint: DEFAULT_SIZE_HINT,
            fill_factor: DEFAULT_FILL_FACTOR,
        }
    }
}

impl MapConfig {
    /// Creates a new MapConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a MapConfig that trades longer probe runs for less memory
    pub fn dense() -> Self {
        Self {
            fill_factor: 0.75,
            ..Self::default()
        }
    }

    /// Creates a MapConfig that keeps probe runs short at the cost of memory
    pub fn sparse() -> Self {
        Self {
            fill_factor: 0.5,
            ..Self::default()
        }
    }

    /// Builder method to set the size hint
    pub fn with_size_hint(mut self, size_hint: usize) -> Self {
        self.size_hint = size_hint;
        self
    }

    /// Builder method to set the fill factor
    pub fn with_fill_factor(mut self, fill_factor: f64) -> Self {
        self.fill_factor = fill_factor;
        self
    }

    /// Checks that the fill factor lies strictly between 0 and 1
    pub fn validate(&self) -> Result<()> {
        if self.fill_factor > 0.0 && self.fill_factor < 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidFillFactor(self.fill_factor))
        }
    }
}
