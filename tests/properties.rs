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
use proptest::prelude::*;
use sortlab::benchmark;
use sortlab::sort::Algorithm;

fn sorted_copy(data: &[i64]) -> Vec<i64> {
  let mut expected = data.to_vec();
  expected.sort_unstable();
  expected
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  /// Every algorithm returns a non-decreasing permutation of its input.
  #[test]
  fn prop_sorts_are_permutations(data in prop::collection::vec(0_i64..10_000, 0..300)) {
    let expected = sorted_copy(&data);
    for algorithm in Algorithm::ALL {
      let outcome = algorithm.sort(&data).unwrap();
      prop_assert_eq!(outcome.sorted(), expected.as_slice(), "{}", algorithm);
    }
  }

  /// Comparison sorts also handle negative values.
  #[test]
  fn prop_comparison_sorts_handle_negatives(data in prop::collection::vec(-1_000_i64..1_000, 0..200)) {
    let expected = sorted_copy(&data);
    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_comparison_based()) {
      let outcome = algorithm.sort(&data).unwrap();
      prop_assert_eq!(outcome.sorted(), expected.as_slice(), "{}", algorithm);
    }
  }

  /// Counts depend only on the input.
  #[test]
  fn prop_counts_are_deterministic(data in prop::collection::vec(0_i64..500, 0..200)) {
    for algorithm in Algorithm::ALL {
      let first = algorithm.sort(&data).unwrap();
      let second = algorithm.sort(&data).unwrap();
      prop_assert_eq!(first.comparisons(), second.comparisons(), "{}", algorithm);
      prop_assert_eq!(first.swaps(), second.swaps(), "{}", algorithm);
    }
  }

  /// Sorting sorted data changes nothing and, for the exchange-based sorts,
  /// moves nothing.
  #[test]
  fn prop_sorted_input_is_idempotent(data in prop::collection::vec(0_i64..1_000, 0..200)) {
    let sorted = sorted_copy(&data);
    for algorithm in Algorithm::ALL {
      let outcome = algorithm.sort(&sorted).unwrap();
      prop_assert_eq!(outcome.sorted(), sorted.as_slice(), "{}", algorithm);
    }
    for algorithm in [
      Algorithm::Bubble,
      Algorithm::BubbleOptimized,
      Algorithm::Insertion,
      Algorithm::Selection,
      Algorithm::Shell,
    ] {
      prop_assert_eq!(algorithm.sort(&sorted).unwrap().swaps(), 0, "{}", algorithm);
    }
  }

  /// Bubble and insertion sort move exactly once per inversion, plus one
  /// placement per displaced key for insertion sort.
  #[test]
  fn prop_bubble_swaps_count_inversions(data in prop::collection::vec(0_i64..50, 0..100)) {
    let inversions = (0..data.len())
      .flat_map(|i| (i + 1..data.len()).map(move |j| (i, j)))
      .filter(|&(i, j)| data[i] > data[j])
      .count() as u64;

    prop_assert_eq!(Algorithm::Bubble.sort(&data).unwrap().swaps(), inversions);
    prop_assert_eq!(Algorithm::BubbleOptimized.sort(&data).unwrap().swaps(), inversions);
    prop_assert!(Algorithm::Insertion.sort(&data).unwrap().swaps() >= inversions);
  }

  /// Averages over deterministic counts equal the single-run counts.
  #[test]
  fn prop_benchmark_averages_match_single_run(
    data in prop::collection::vec(0_i64..1_000, 0..100),
    repetitions in 1_u32..4,
  ) {
    for algorithm in Algorithm::ALL {
      let single = algorithm.sort(&data).unwrap();
      let result = benchmark::run(algorithm, &data, repetitions).unwrap();
      prop_assert_eq!(result.avg_comparisons, single.comparisons() as f64);
      prop_assert_eq!(result.avg_swaps, single.swaps() as f64);
    }
  }
}

#[test]
fn selection_sort_fixture() {
  let outcome = Algorithm::Selection.sort(&[5, 3, 8, 1]).unwrap();
  assert_eq!(outcome.sorted(), &[1, 3, 5, 8]);
  assert_eq!(outcome.comparisons(), 6);
  assert_eq!(outcome.swaps(), 2);
}

#[test]
fn radix_sort_fixture() {
  let outcome = Algorithm::Radix
    .sort(&[170, 45, 75, 90, 802, 24, 2, 66])
    .unwrap();
  assert_eq!(outcome.sorted(), &[2, 24, 45, 66, 75, 90, 170, 802]);
  assert_eq!(outcome.comparisons(), 0);
  assert_eq!(outcome.swaps(), 24);
}
