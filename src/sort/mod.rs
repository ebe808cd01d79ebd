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

//! Instrumented sort strategies.
//!
//! Every [`Algorithm`] sorts a private copy of its input and reports how many
//! comparisons and element movements it performed. The accounting rules are
//! shared by all variants so the counts are comparable:
//!
//! * a *comparison* is one evaluation of `<`, `<=` or `>` between two elements;
//! * a *swap* is one write of an element into the working sequence, whether an
//!   in-place exchange, a shift, or a copy back from a merge/bucket buffer.
//!
//! Insertion and shell sort only count the final placement of the held key
//! when it actually moved, so an already sorted input costs zero swaps.
//!
//! Counting and radix sort perform no element comparisons and reject negative
//! values with [`SortError::NegativeValue`].

mod bubble;
mod counting;
mod heap;
mod insertion;
mod merge;
mod outcome;
mod quick;
mod radix;
mod selection;
mod shell;
mod tim;

pub use outcome::SortOutcome;
use outcome::Counters;

use crate::error::SortError;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Largest tally table counting sort will allocate (values `0..LIMIT`).
pub const COUNTING_RANGE_LIMIT: usize = 1 << 26;

/// The fixed set of instrumented sort strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
  Bubble,
  BubbleOptimized,
  Insertion,
  Selection,
  Quick,
  Merge,
  Heap,
  Shell,
  Counting,
  Radix,
  Tim,
}

impl Algorithm {
  /// All strategies, in menu order.
  pub const ALL: [Algorithm; 11] = [
    Algorithm::Bubble,
    Algorithm::BubbleOptimized,
    Algorithm::Insertion,
    Algorithm::Selection,
    Algorithm::Quick,
    Algorithm::Merge,
    Algorithm::Heap,
    Algorithm::Shell,
    Algorithm::Counting,
    Algorithm::Radix,
    Algorithm::Tim,
  ];

  /// Display name, used as the metrics label.
  pub fn name(self) -> &'static str {
    match self {
      Algorithm::Bubble => "BubbleSort",
      Algorithm::BubbleOptimized => "BubbleSortOptimized",
      Algorithm::Insertion => "InsertionSort",
      Algorithm::Selection => "SelectionSort",
      Algorithm::Quick => "QuickSort",
      Algorithm::Merge => "MergeSort",
      Algorithm::Heap => "HeapSort",
      Algorithm::Shell => "ShellSort",
      Algorithm::Counting => "CountingSort",
      Algorithm::Radix => "RadixSort",
      Algorithm::Tim => "TimSort",
    }
  }

  /// Snake-case identifier, used for result file names.
  pub fn file_stem(self) -> &'static str {
    match self {
      Algorithm::Bubble => "bubble_sort",
      Algorithm::BubbleOptimized => "bubble_sort_optimized",
      Algorithm::Insertion => "insertion_sort",
      Algorithm::Selection => "selection_sort",
      Algorithm::Quick => "quick_sort",
      Algorithm::Merge => "merge_sort",
      Algorithm::Heap => "heap_sort",
      Algorithm::Shell => "shell_sort",
      Algorithm::Counting => "counting_sort",
      Algorithm::Radix => "radix_sort",
      Algorithm::Tim => "tim_sort",
    }
  }

  /// Looks up a strategy by its 1-based position in [`Algorithm::ALL`].
  pub fn from_menu_index(index: usize) -> Option<Self> {
    index
      .checked_sub(1)
      .and_then(|i| Self::ALL.get(i))
      .copied()
  }

  /// Whether the strategy orders elements by comparing them.
  pub fn is_comparison_based(self) -> bool {
    !matches!(self, Algorithm::Counting | Algorithm::Radix)
  }

  /// Sorts a copy of `data`, returning it with the operation counts.
  ///
  /// `data` is never modified. Empty input yields an empty outcome with zero
  /// counts for every variant.
  ///
  /// # Errors
  ///
  /// Counting and radix sort return [`SortError::NegativeValue`] if any value
  /// is negative. Counting sort returns [`SortError::RangeTooLarge`] if the
  /// maximum value would need more than [`COUNTING_RANGE_LIMIT`] tally slots.
  pub fn sort(self, data: &[i64]) -> Result<SortOutcome, SortError> {
    if !self.is_comparison_based() {
      self.check_tally_input(data)?;
    }

    let mut arr = data.to_vec();
    let mut counters = Counters::default();

    match self {
      Algorithm::Bubble => bubble::sort(&mut arr, &mut counters),
      Algorithm::BubbleOptimized => bubble::sort_optimized(&mut arr, &mut counters),
      Algorithm::Insertion => insertion::sort(&mut arr, &mut counters),
      Algorithm::Selection => selection::sort(&mut arr, &mut counters),
      Algorithm::Quick => quick::sort(&mut arr, &mut counters),
      Algorithm::Merge => merge::sort(&mut arr, &mut counters),
      Algorithm::Heap => heap::sort(&mut arr, &mut counters),
      Algorithm::Shell => shell::sort(&mut arr, &mut counters),
      Algorithm::Counting => counting::sort(&mut arr, &mut counters),
      Algorithm::Radix => radix::sort(&mut arr, &mut counters),
      Algorithm::Tim => tim::sort(&mut arr, &mut counters),
    }

    Ok(SortOutcome::new(arr, counters))
  }

  fn check_tally_input(self, data: &[i64]) -> Result<(), SortError> {
    if let Some(&value) = data.iter().find(|&&v| v < 0) {
      return Err(SortError::NegativeValue {
        algorithm: self,
        value,
      });
    }

    if self == Algorithm::Counting {
      if let Some(&max) = data.iter().max() {
        if max as u64 >= COUNTING_RANGE_LIMIT as u64 {
          return Err(SortError::RangeTooLarge {
            algorithm: self,
            max,
            limit: COUNTING_RANGE_LIMIT,
          });
        }
      }
    }

    Ok(())
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
