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

/// Quick sort with a Lomuto partition around the last element.
///
/// Recurses into the smaller side and loops on the larger one, which bounds
/// the stack depth on already sorted input. The per-partition counts do not
/// depend on the order the partitions are visited in.
pub(super) fn sort(mut arr: &mut [i64], counters: &mut Counters) {
  while arr.len() > 1 {
    let pivot = partition(arr, counters);
    let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
    let right = &mut right[1..];

    if left.len() < right.len() {
      sort(left, counters);
      arr = right;
    } else {
      sort(right, counters);
      arr = left;
    }
  }
}

fn partition(arr: &mut [i64], counters: &mut Counters) -> usize {
  let high = arr.len() - 1;
  let pivot = arr[high];
  let mut store = 0;

  for j in 0..high {
    if counters.less(arr[j], pivot) {
      arr.swap(store, j);
      counters.record_move();
      store += 1;
    }
  }

  arr.swap(store, high);
  counters.record_move();
  store
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
    assert_eq!(counters.swaps(), 3);
  }

  #[test]
  fn sorted_input_is_quadratic_but_does_not_overflow_the_stack() {
    let mut arr: Vec<i64> = (0..5_000).collect();
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    let n = 5_000u64;
    assert_eq!(counters.comparisons(), n * (n - 1) / 2);
    assert!(arr.windows(2).all(|w| w[0] <= w[1]));
  }
}
