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

/// In-place heap sort over a max-heap.
pub(super) fn sort(arr: &mut [i64], counters: &mut Counters) {
  let n = arr.len();
  for root in (0..n / 2).rev() {
    sift_down(arr, n, root, counters);
  }
  for end in (1..n).rev() {
    arr.swap(0, end);
    counters.record_move();
    sift_down(arr, end, 0, counters);
  }
}

fn sift_down(arr: &mut [i64], heap_len: usize, mut root: usize, counters: &mut Counters) {
  loop {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = left + 1;

    if left < heap_len && counters.greater(arr[left], arr[largest]) {
      largest = left;
    }
    if right < heap_len && counters.greater(arr[right], arr[largest]) {
      largest = right;
    }
    if largest == root {
      return;
    }

    arr.swap(root, largest);
    counters.record_move();
    root = largest;
  }
}
