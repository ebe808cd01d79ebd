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

pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  let n = arr.len();
  for i in 0..n {
    let mut min_index = i;
    for j in i + 1..n {
      if counters.less(arr[j], arr[min_index]) {
        min_index = j;
      }
    }
    if min_index != i {
      arr.swap(i, min_index);
      counters.record_move();
    }
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
    assert_eq!(counters.comparisons(), 6);
    assert_eq!(counters.swaps(), 2);
  }

  #[test]
  fn duplicates_do_not_swap() {
    let mut arr = vec![2, 2, 2];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(counters.comparisons(), 3);
    assert_eq!(counters.swaps(), 0);
  }
}
