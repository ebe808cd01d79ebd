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

/// Top-down merge sort.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  if arr.len() > 1 {
    let mid = arr.len() / 2;
    sort(&mut arr[..mid], counters);
    sort(&mut arr[mid..], counters);
    merge(arr, mid, counters);
  }
}

/// Merges the sorted halves `arr[..mid]` and `arr[mid..]` in place.
///
/// Every element written back counts as a move, whichever half it came from.
pub(super) fn merge(arr: &mut [i64], mid: usize, counters: &mut Counters) {
  let left = arr[..mid].to_vec();
  let right = arr[mid..].to_vec();
  let (mut i, mut j) = (0, 0);

  for slot in arr.iter_mut() {
    let take_left = if i < left.len() && j < right.len() {
      counters.less_eq(left[i], right[j])
    } else {
      i < left.len()
    };

    if take_left {
      *slot = left[i];
      i += 1;
    } else {
      *slot = right[j];
      j += 1;
    }
    counters.record_move();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pinned_counts_for_small_input() {
    let mut arr = vec![5, 3, 8, 1];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![1, 3, 5, 8]);
    assert_eq!(counters.comparisons(), 5);
    assert_eq!(counters.swaps(), 8);
  }

  #[test]
  fn merge_is_stable_on_ties() {
    let mut arr = vec![1, 4, 1, 4];
    let mut counters = Counters::default();
    merge(&mut arr, 2, &mut counters);

    assert_eq!(arr, vec![1, 1, 4, 4]);
    assert_eq!(counters.comparisons(), 3);
    assert_eq!(counters.swaps(), 4);
  }
}
