// Copyright 2025 Chisomo Makombo Sakala
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

//! Binary search backed by a durable target -> index cache.
//!
//! The cache is consulted before any search work and written once per
//! distinct target. [`JsonFileCache`] performs an unguarded read-modify-write
//! of its file on every miss: two processes searching for the same uncached
//! target may both compute it, and the last writer wins. Only a single writer
//! at a time is supported.

use crate::error::CacheError;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Index returned when the target is absent.
pub const NOT_FOUND: i64 = -1;

/// Storage for previously computed search results.
pub trait SearchCache {
  fn get(&mut self, target: i64) -> Result<Option<i64>, CacheError>;
  fn put(&mut self, target: i64, index: i64) -> Result<(), CacheError>;
}

/// Process-local cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
  entries: HashMap<i64, i64>,
}

impl SearchCache for MemoryCache {
  fn get(&mut self, target: i64) -> Result<Option<i64>, CacheError> {
    Ok(self.entries.get(&target).copied())
  }

  fn put(&mut self, target: i64, index: i64) -> Result<(), CacheError> {
    self.entries.insert(target, index);
    Ok(())
  }
}

/// Cache persisted as a JSON object mapping targets to indices.
///
/// A missing file is an empty cache.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
  path: PathBuf,
}

impl JsonFileCache {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  fn read_all(&self) -> Result<BTreeMap<i64, i64>, CacheError> {
    let text = match fs::read_to_string(&self.path) {
      Ok(text) => text,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
      Err(source) => {
        return Err(CacheError::Read {
          path: self.path.clone(),
          source,
        });
      }
    };
    serde_json::from_str(&text).map_err(|source| CacheError::Parse {
      path: self.path.clone(),
      source,
    })
  }
}

impl SearchCache for JsonFileCache {
  fn get(&mut self, target: i64) -> Result<Option<i64>, CacheError> {
    Ok(self.read_all()?.get(&target).copied())
  }

  fn put(&mut self, target: i64, index: i64) -> Result<(), CacheError> {
    let mut entries = self.read_all()?;
    entries.insert(target, index);
    let json = serde_json::to_string_pretty(&entries).map_err(CacheError::Serialize)?;
    fs::write(&self.path, json).map_err(|source| CacheError::Write {
      path: self.path.clone(),
      source,
    })
  }
}

/// Binary search over sorted data, memoized through a [`SearchCache`].
#[derive(Debug)]
pub struct CachedSearch<C> {
  cache: C,
  searches: u64,
}

impl<C: SearchCache> CachedSearch<C> {
  pub fn new(cache: C) -> Self {
    Self { cache, searches: 0 }
  }

  /// Returns the index of `target` in `sorted`, or [`NOT_FOUND`].
  ///
  /// `sorted` must be in non-decreasing order. A cached answer is returned
  /// without searching; otherwise the result is computed and cached.
  pub fn find(&mut self, sorted: &[i64], target: i64) -> Result<i64, CacheError> {
    if let Some(index) = self.cache.get(target)? {
      tracing::debug!(target, index, "Cache hit");
      return Ok(index);
    }

    self.searches += 1;
    let index = binary_search(sorted, target);
    tracing::debug!(target, index, "Cache miss, searched");
    self.cache.put(target, index)?;
    Ok(index)
  }

  /// How many lookups actually ran a binary search.
  pub fn searches(&self) -> u64 {
    self.searches
  }
}

/// Leftmost index of `target` in `sorted`, or [`NOT_FOUND`].
pub fn binary_search(sorted: &[i64], target: i64) -> i64 {
  let index = sorted.partition_point(|&v| v < target);
  match sorted.get(index) {
    Some(&v) if v == target => index as i64,
    _ => NOT_FOUND,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn binary_search_finds_leftmost_match() {
    let data = [1, 3, 3, 3, 7, 9];
    assert_eq!(binary_search(&data, 3), 1);
    assert_eq!(binary_search(&data, 9), 5);
    assert_eq!(binary_search(&data, 4), NOT_FOUND);
    assert_eq!(binary_search(&[], 4), NOT_FOUND);
  }

  #[test]
  fn second_lookup_is_served_from_cache() {
    let data = [2, 4, 6, 8];
    let mut search = CachedSearch::new(MemoryCache::default());

    assert_eq!(search.find(&data, 6).unwrap(), 2);
    assert_eq!(search.find(&data, 6).unwrap(), 2);
    assert_eq!(search.searches(), 1);

    assert_eq!(search.find(&data, 5).unwrap(), NOT_FOUND);
    assert_eq!(search.find(&data, 5).unwrap(), NOT_FOUND);
    assert_eq!(search.searches(), 2);
  }

  #[test]
  fn file_cache_survives_a_new_searcher() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    let data = [10, 20, 30];

    let mut first = CachedSearch::new(JsonFileCache::new(&path));
    assert_eq!(first.find(&data, 20).unwrap(), 1);
    assert_eq!(first.searches(), 1);

    // The stored answer wins even over different data.
    let mut second = CachedSearch::new(JsonFileCache::new(&path));
    assert_eq!(second.find(&[], 20).unwrap(), 1);
    assert_eq!(second.searches(), 0);
  }

  #[test]
  fn malformed_cache_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.json");
    fs::write(&path, "not json").unwrap();

    let mut search = CachedSearch::new(JsonFileCache::new(&path));
    let err = search.find(&[1], 1).unwrap_err();
    assert!(matches!(err, CacheError::Parse { .. }));
  }
}
