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
use super::Counters;
use super::insertion;
use super::merge;

/// Fixed run length of the simplified tim sort.
const MIN_RUN: usize = 32;

/// Simplified tim sort: insertion-sort fixed runs of [`MIN_RUN`] elements,
/// then merge neighbouring runs bottom-up, doubling the width each round.
///
/// There is no natural run detection and no galloping. A trailing run with
/// no partner at some width still goes through the merge, which writes it
/// back and counts each of those writes.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  for run in arr.chunks_mut(MIN_RUN) {
    insertion::sort(run, counters);
  }

  let mut width = MIN_RUN;
  while width < arr.len() {
    for pair in arr.chunks_mut(2 * width) {
      let mid = width.min(pair.len());
      merge::merge(pair, mid, counters);
    }
    width *= 2;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_input_is_plain_insertion_sort() {
    let mut arr = vec![5, 3, 8, 1];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![1, 3, 5, 8]);
    assert_eq!(counters.comparisons(), 5);
    assert_eq!(counters.swaps(), 6);
  }

  #[test]
  fn two_reversed_runs_then_one_merge() {
    let mut arr: Vec<i64> = (0..64).rev().collect();
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    // Each run: 496 comparisons, 496 shifts, 31 placements.
    // Merge: 32 comparisons, 64 writes.
    assert_eq!(arr, (0..64).collect::<Vec<i64>>());
    assert_eq!(counters.comparisons(), 2 * 496 + 32);
    assert_eq!(counters.swaps(), 2 * (496 + 31) + 64);
  }

  #[test]
  fn lone_trailing_run_is_copied_back() {
    let mut arr: Vec<i64> = (0..96).rev().collect();
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    // Three runs of 496 comparisons and 527 moves. Width 32 merges the first
    // pair (32 comparisons, 64 writes) and copies the lone run back (32
    // writes). Width 64 merges everything (32 comparisons, 96 writes).
    assert_eq!(arr, (0..96).collect::<Vec<i64>>());
    assert_eq!(counters.comparisons(), 3 * 496 + 32 + 32);
    assert_eq!(counters.swaps(), 3 * 527 + 64 + 32 + 96);
  }

  #[test]
  fn sorted_input_still_pays_for_every_merge_write() {
    let mut arr: Vec<i64> = (0..96).collect();
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    // Insertion: 31 comparisons per run, no moves. Merges: 32 and 64
    // comparisons; 64 + 32 + 96 writes.
    assert_eq!(arr, (0..96).collect::<Vec<i64>>());
    assert_eq!(counters.comparisons(), 3 * 31 + 32 + 64);
    assert_eq!(counters.swaps(), 192);
  }
}
