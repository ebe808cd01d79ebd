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

/// Operation tallies for a single top-level sort call.
///
/// A fresh `Counters` is created at the start of every `Algorithm::sort`
/// and threaded by `&mut` through recursive or multi-pass helpers, so no
/// count ever outlives the call that produced it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counters {
  comparisons: u64,
  swaps: u64,
}

impl Counters {
  /// Counts one comparison and returns `a < b`.
  #[inline]
  pub(crate) fn less(&mut self, a: i64, b: i64) -> bool {
    self.comparisons += 1;
    a < b
  }

  /// Counts one comparison and returns `a <= b`.
  #[inline]
  pub(crate) fn less_eq(&mut self, a: i64, b: i64) -> bool {
    self.comparisons += 1;
    a <= b
  }

  /// Counts one comparison and returns `a > b`.
  #[inline]
  pub(crate) fn greater(&mut self, a: i64, b: i64) -> bool {
    self.comparisons += 1;
    a > b
  }

  /// Counts one element write or exchange.
  #[inline]
  pub(crate) fn record_move(&mut self) {
    self.swaps += 1;
  }

  pub(crate) fn comparisons(&self) -> u64 {
    self.comparisons
  }

  pub(crate) fn swaps(&self) -> u64 {
    self.swaps
  }
}

/// The sorted data plus the operation counts of one sort invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
  sorted: Vec<i64>,
  comparisons: u64,
  swaps: u64,
}

impl SortOutcome {
  pub(crate) fn new(sorted: Vec<i64>, counters: Counters) -> Self {
    Self {
      sorted,
      comparisons: counters.comparisons(),
      swaps: counters.swaps(),
    }
  }

  pub fn sorted(&self) -> &[i64] {
    &self.sorted
  }

  pub fn comparisons(&self) -> u64 {
    self.comparisons
  }

  pub fn swaps(&self) -> u64 {
    self.swaps
  }

  /// Consumes the outcome, handing the sorted data to the caller.
  pub fn into_sorted(self) -> Vec<i64> {
    self.sorted
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counters_tally_comparisons_and_moves() {
    let mut counters = Counters::default();
    assert!(counters.less(1, 2));
    assert!(!counters.greater(1, 2));
    assert!(counters.less_eq(2, 2));
    counters.record_move();

    assert_eq!(counters.comparisons(), 3);
    assert_eq!(counters.swaps(), 1);
  }

  #[test]
  fn outcome_exposes_counts() {
    let mut counters = Counters::default();
    counters.record_move();
    let outcome = SortOutcome::new(vec![1, 2], counters);

    assert_eq!(outcome.sorted(), &[1, 2]);
    assert_eq!(outcome.comparisons(), 0);
    assert_eq!(outcome.swaps(), 1);
    assert_eq!(outcome.into_sorted(), vec![1, 2]);
  }
}
