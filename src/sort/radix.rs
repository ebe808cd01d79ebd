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

/// LSD radix sort in base 10 for non-negative values.
///
/// Each pass places every element into its digit bucket exactly once; the
/// number of passes is the number of decimal digits of the maximum.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  let Some(&max) = arr.iter().max() else {
    return;
  };

  let mut output = vec![0; arr.len()];
  let mut exp: i64 = 1;
  while max / exp > 0 {
    let mut buckets = [0usize; 10];
    for &value in arr.iter() {
      buckets[digit(value, exp)] += 1;
    }
    for d in 1..10 {
      buckets[d] += buckets[d - 1];
    }
    for &value in arr.iter().rev() {
      let d = digit(value, exp);
      buckets[d] -= 1;
      output[buckets[d]] = value;
      counters.record_move();
    }
    arr.copy_from_slice(&output);

    match exp.checked_mul(10) {
      Some(next) => exp = next,
      None => break,
    }
  }
}

fn digit(value: i64, exp: i64) -> usize {
  ((value / exp) % 10) as usize
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn three_digit_maximum_takes_three_passes() {
    let mut arr = vec![170, 45, 75, 90, 802, 24, 2, 66];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    assert_eq!(counters.comparisons(), 0);
    assert_eq!(counters.swaps(), 24);
  }

  #[test]
  fn all_zeros_need_no_pass() {
    let mut arr = vec![0, 0, 0];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![0, 0, 0]);
    assert_eq!(counters.swaps(), 0);
  }

  #[test]
  fn largest_values_do_not_overflow() {
    let mut arr = vec![i64::MAX, 0, i64::MAX - 1];
    let mut counters = Counters::default();
    sort(&mut arr, &mut counters);

    assert_eq!(arr, vec![0, i64::MAX - 1, i64::MAX]);
    assert_eq!(counters.swaps(), 3 * 19);
  }
}
