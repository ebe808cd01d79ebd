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

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  let n = arr.len();
  let mut gap = n / 2;
  while gap > 0 {
    for i in gap..n {
      let held = arr[i];
      let mut j = i;
      while j >= gap && counters.greater(arr[j - gap], held) {
        arr[j] = arr[j - gap];
        counters.record_move();
        j -= gap;
      }
      if j != i {
        arr[j] = held;
        counters.record_move();
      }
    }
    gap /= 2;
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
    assert_eq!(counters.comparisons(), 7);
    assert_eq!(counters.swaps(), 7);
  }
}
