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


//! Borrowing iterators over an [`IntIntMap`](super::IntIntMap)
//!
//! Both iterators yield the free key first (if it is set), then the table
//! pairs in physical slot order.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use super::hash::FREE_KEY;

/// Iterator over `(key, value)` pairs, created by [`IntIntMap::items`](super::IntIntMap::items)
#[derive(Clone)]
pub struct Items<'a> {
    free_val: Option<i64>,
    pairs: ChunksExact<'a, i64>,
    remaining: usize,
}

impl<'a> Items<'a> {
    pub(crate) fn new(data: &'a [i64], free_val: Option<i64>, len: usize) -> Self {
        Self {
            free_val,
            pairs: data.chunks_exact(2),
            remaining: len,
        }
    }
}

impl Iterator for Items<'_> {
    type Item = (i64, i64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.free_val.take() {
            self.remaining -= 1;
            return Some((FREE_KEY, value));
        }

        for pair in self.pairs.by_ref() {
            if pair[0] != FREE_KEY {
                self.remaining -= 1;
                return Some((pair[0], pair[1]));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Items<'_> {}

impl FusedIterator for Items<'_> {}

/// Iterator over keys, created by [`IntIntMap::keys`](super::IntIntMap::keys)
#[derive(Clone)]
pub struct Keys<'a> {
    inner: Items<'a>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(inner: Items<'a>) -> Self {
        Self { inner }
    }
}

impl Iterator for Keys<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}
