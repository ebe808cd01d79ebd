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

/// Counting sort for values in `0..=max`. Callers validate the range first.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  let Some(&max) = arr.iter().max() else {
    return;
  };

  let mut tally = vec![0usize; max as usize + 1];
  for &value in arr.iter() {
    tally[value as usize] += 1;
  }

  let mut slot = 0;
  for (value, &count) in tally.iter().enumerate() {
    for _ in 0..count {
      arr[slot] = value as i64;
      slot += 1;
      counters.record_move();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_write_per_element() {
    let mut arr = vec![5, 3, 8, 1, 3, 0];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![0, 1, 3, 3, 5, 8]);
    assert_eq!(counters.comparisons(), 0);
    assert_eq!(counters.swaps(), 6);
  }
}
