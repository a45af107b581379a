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


//! Error types for intintmap
//!
//! The map itself never fails once built; only construction is fallible.

use thiserror::Error;

/// Result type alias for intintmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while building an [`IntIntMap`](crate::IntIntMap)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Fill factor is NaN, infinite, or outside the open interval (0, 1)
    #[error("fill factor must be in (0, 1), got {0}")]
    InvalidFillFactor(f64),

    /// The requested size hint needs more slots than `usize` can address
    #[error("capacity overflow for size hint {size_hint}")]
    CapacityOverflow { size_hint: usize },
}

impl Error {
    /// Create a capacity overflow error
    pub fn capacity_overflow(size_hint: usize) -> Self {
        Error::CapacityOverflow { size_hint }
    }

    /// Returns true if the error came from an invalid configuration value
    /// rather than from sizing limits
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Error::InvalidFillFactor(_))
    }
}
