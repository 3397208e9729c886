//! Lazy k-subset enumeration.
//!
//! [`combinations`] walks index subsets in lexicographic order, so for seven
//! cards and `k = 5` the first subset is `[0, 1, 2, 3, 4]` and the last is
//! `[2, 3, 4, 5, 6]`.

use crate::errors::HandError;

/// Number of ways to choose `k` items out of `n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Iterator over all `k`-element subsets of a slice.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

/// Creates a lazy iterator over every `k`-subset of `items`.
///
/// Fails when `k` exceeds the number of items, or when `items` is empty and
/// `k > 0`. Choosing zero items yields exactly one empty subset.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Result<Combinations<'_, T>, HandError> {
    if k > items.len() {
        return Err(HandError::InvalidCombination {
            n: items.len(),
            k,
        });
    }
    Ok(Combinations {
        items,
        indices: (0..k).collect(),
        done: false,
    })
}

impl<T: Clone> Combinations<'_, T> {
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();
        // rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            self.done = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.items[i].clone()).collect();
        self.advance();
        Some(subset)
    }
}
