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

/// Insertion sort over the whole slice.
///
/// Tim sort reuses this on each fixed-size run.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  for i in 1..arr.len() {
    let key = arr[i];
    let mut j = i;
    while j > 0 && counters.greater(arr[j - 1], key) {
      arr[j] = arr[j - 1];
      counters.record_move();
      j -= 1;
    }
    if j != i {
      arr[j] = key;
      counters.record_move();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_shifts_and_placements() {
    let mut arr = vec![5, 3, 8, 1];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![1, 3, 5, 8]);
    assert_eq!(counters.comparisons(), 5);
    assert_eq!(counters.swaps(), 6);
  }

  #[test]
  fn reversed_input_is_quadratic() {
    let mut arr: Vec<i64> = (0..10).rev().collect();
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(counters.comparisons(), 45);
    assert_eq!(counters.swaps(), 45 + 9);
  }
}
