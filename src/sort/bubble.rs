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

/// Classic bubble sort: always runs all `n` passes.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  passes(arr, counters, false);
}

/// Bubble sort that stops after the first pass without an exchange.
pub(super) fn sort_optimized(arr: &mut [i64], counters: &mut Counters) {
  passes(arr, counters, true);
}

fn passes(arr: &mut [i64], counters: &mut Counters, stop_when_settled: bool) {
  let n = arr.len();
  for i in 0..n {
    let mut exchanged = false;
    for j in 0..n - i - 1 {
      if counters.greater(arr[j], arr[j + 1]) {
        arr.swap(j, j + 1);
        counters.record_move();
        exchanged = true;
      }
    }
    if stop_when_settled && !exchanged {
      break;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classic_inspects_every_pair() {
    let mut arr = vec![5, 3, 8, 1];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![1, 3, 5, 8]);
    assert_eq!(counters.comparisons(), 6);
    assert_eq!(counters.swaps(), 4);
  }

  #[test]
  fn optimized_stops_on_a_settled_pass() {
    let mut arr: Vec<i64> = (0..10).collect();
    let mut counters = Counters::default();
    sort_optimized(&mut arr, &mut counters);

    assert_eq!(counters.comparisons(), 9);
    assert_eq!(counters.swaps(), 0);
  }

  #[test]
  fn optimized_matches_classic_swaps() {
    let data = vec![2, 1, 3, 4, 5, 6];
    let mut classic = data.clone();
    let mut optimized = data;
    let mut classic_counts = Counters::default();
    let mut optimized_counts = Counters::default();
    sort(&mut classic, &mut classic_counts);
    sort_optimized(&mut optimized, &mut optimized_counts);

    assert_eq!(classic, optimized);
    assert_eq!(classic_counts.swaps(), optimized_counts.swaps());
    assert_eq!(optimized_counts.comparisons(), 9);
    assert_eq!(classic_counts.comparisons(), 15);
  }
}
