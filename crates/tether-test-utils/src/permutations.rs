// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns every permutation of `0..n`, in lexicographic order.
///
/// Intended for exhaustive tests over small inputs; there are `n!` of them.
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut out = vec![current.clone()];

    // Narayana's next-permutation.
    loop {
        let Some(pivot) = (1..current.len())
            .rev()
            .find(|&i| current[i - 1] < current[i])
            .map(|i| i - 1)
        else {
            return out;
        };

        let successor = (pivot + 1..current.len())
            .rev()
            .find(|&i| current[i] > current[pivot])
            .unwrap_or(pivot + 1);

        current.swap(pivot, successor);
        current[pivot + 1..].reverse();
        out.push(current.clone());
    }
}

/// Reorders `items` so that `result[i] == items[permutation[i]]`.
///
/// # Panics
///
/// Panics if `permutation` and `items` differ in length or an index is out of range.
pub fn apply_permutation<T: Clone>(items: &[T], permutation: &[usize]) -> Vec<T> {
    assert_eq!(
        items.len(),
        permutation.len(),
        "permutation length mismatch"
    );

    permutation.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_permutations_counts() {
        assert_eq!(index_permutations(0).len(), 1);
        assert_eq!(index_permutations(1).len(), 1);
        assert_eq!(index_permutations(3).len(), 6);
        assert_eq!(index_permutations(5).len(), 120);
    }

    #[test]
    fn test_index_permutations_order() {
        let perms = index_permutations(3);

        assert_eq!(
            perms,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_apply_permutation() {
        let items = ['a', 'b', 'c'];

        assert_eq!(apply_permutation(&items, &[2, 0, 1]), vec!['c', 'a', 'b']);
    }
}
