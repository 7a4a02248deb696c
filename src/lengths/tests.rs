use std::{collections::BinaryHeap, cmp::Reverse};

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{compute_lengths, calculate_minimum_redundancy};

/// Weighted cost of a Huffman code built with an explicit priority queue: the sum
/// of the weights of all the internal nodes.
fn heap_huffman_cost(freqs: &[u64]) -> u128 {
    let mut heap: BinaryHeap<Reverse<u128>> = freqs.iter().map(|&f| Reverse(f as u128)).collect();
    let mut cost = 0;

    while heap.len() > 1 {
        let Reverse(a) = heap.pop().unwrap();
        let Reverse(b) = heap.pop().unwrap();
        cost += a + b;
        heap.push(Reverse(a + b));
    }

    cost
}

fn weighted_cost(freqs: &[u64], lengths: &[u64]) -> u128 {
    freqs.iter().zip(lengths).map(|(&f, &l)| f as u128 * l as u128).sum()
}

/// Checks Kraft's equality exactly, scaling every term by 2^max_len.
fn assert_kraft_equality(lengths: &[u64]) {
    let max_len = *lengths.iter().max().unwrap();
    assert!(max_len < 127, "lengths too long to check exactly: {max_len}");

    let sum: u128 = lengths.iter().map(|&l| 1u128 << (max_len - l)).sum();
    assert_eq!(sum, 1u128 << max_len, "Kraft equality does not hold for {:?}", lengths);
}

fn assert_non_increasing(lengths: &[u64]) {
    for w in lengths.windows(2) {
        assert!(w[0] >= w[1], "lengths are not non-increasing: {:?}", lengths);
    }
}

fn random_frequencies(rng: &mut StdRng, n: usize, max: u64) -> Vec<u64> {
    let mut v: Vec<u64> = (0..n).map(|_| rng.gen_range(0..=max)).collect();
    v.sort_unstable();
    v
}

fn entropy(freqs: &[u64]) -> f64 {
    let total: u64 = freqs.iter().sum();
    freqs.iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

#[test]
fn test_empty_alphabet() {
    assert_eq!(compute_lengths(Vec::<u64>::new()), Vec::<u64>::new());
}

#[test]
fn test_single_symbol() {
    assert_eq!(compute_lengths(vec![42u64]), vec![0]);
    assert_eq!(compute_lengths(vec![0u64]), vec![0]);
}

#[test]
fn test_two_symbols() {
    assert_eq!(compute_lengths(vec![5u64, 7]), vec![1, 1]);
}

#[test]
fn test_four_equal_symbols() {
    assert_eq!(compute_lengths(vec![1u64, 1, 1, 1]), vec![2, 2, 2, 2]);
}

#[test]
fn test_three_symbols() {
    let lengths = compute_lengths(vec![1u64, 2, 3]);

    assert_eq!(lengths, vec![2, 2, 1]);
    assert_kraft_equality(&lengths);
}

#[test]
fn test_tie_prefers_leaf() {
    // After combining 1 + 1 the internal node weighs 2, as does the next leaf: the
    // leaf must be taken first, which keeps the tree balanced.
    let lengths = compute_lengths(vec![1u64, 1, 2, 2]);

    assert_eq!(lengths, vec![2, 2, 2, 2]);
}

#[test]
fn test_skewed_distribution() {
    let freqs = vec![1u64, 1, 2, 4, 8, 16];
    let lengths = compute_lengths(freqs.clone());

    assert_eq!(lengths, vec![5, 5, 4, 3, 2, 1]);
    assert_eq!(weighted_cost(&freqs, &lengths), heap_huffman_cost(&freqs));
}

#[test]
fn test_fibonacci_gives_deepest_tree() {
    let mut freqs = vec![1u64, 1];
    while freqs.len() < 40 {
        let l = freqs.len();
        freqs.push(freqs[l - 1] + freqs[l - 2]);
    }

    let lengths = compute_lengths(freqs.clone());

    assert_eq!(lengths[0], 39);
    assert_eq!(lengths[39], 1);
    assert_kraft_equality(&lengths);
    assert_non_increasing(&lengths);
}

#[test]
fn test_zero_frequencies() {
    let freqs = vec![0u64, 0, 0, 5, 9];
    let lengths = compute_lengths(freqs.clone());

    assert_kraft_equality(&lengths);
    assert_non_increasing(&lengths);
    assert_eq!(weighted_cost(&freqs, &lengths), heap_huffman_cost(&freqs));
}

#[test]
fn test_in_place_slice() {
    let mut a = [1u64, 1, 1, 1, 1, 1, 1, 1];
    calculate_minimum_redundancy(&mut a);

    assert_eq!(a, [3; 8]);
}

#[test]
fn test_other_element_types() {
    assert_eq!(compute_lengths(vec![1u32, 2, 3]), vec![2, 2, 1]);
    assert_eq!(compute_lengths(vec![1usize, 1, 1, 1]), vec![2, 2, 2, 2]);
    assert_eq!(compute_lengths(vec![3i64, 3, 3, 10]), vec![3, 3, 2, 1]);
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let freqs = random_frequencies(&mut rng, 500, 10_000);

    assert_eq!(compute_lengths(freqs.clone()), compute_lengths(freqs));
}

#[test]
fn test_random_inputs_are_optimal() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let n = rng.gen_range(2..300);
        let max = if rng.gen_bool(0.5) { 10 } else { 1_000_000 };
        let freqs = random_frequencies(&mut rng, n, max);

        let lengths = compute_lengths(freqs.clone());

        assert_eq!(lengths.len(), n);
        assert_kraft_equality(&lengths);
        assert_non_increasing(&lengths);
        assert_eq!(weighted_cost(&freqs, &lengths), heap_huffman_cost(&freqs), "suboptimal code for {:?}", freqs);
    }
}

#[test]
fn test_average_length_within_entropy_bound() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let n = rng.gen_range(2..200);
        let mut freqs = random_frequencies(&mut rng, n, 5_000);
        // The bound needs a positive total.
        let last = freqs.len() - 1;
        freqs[last] += 1;

        let total: u64 = freqs.iter().sum();
        let lengths = compute_lengths(freqs.clone());
        let average = weighted_cost(&freqs, &lengths) as f64 / total as f64;
        let h = entropy(&freqs);

        assert!(average >= h - 1e-9, "average {average} below entropy {h}");
        assert!(average < h + 1.0, "average {average} not below entropy + 1 ({h})");
    }
}

#[test]
fn test_large_uniform_alphabet() {
    let n = 1 << 12;
    let lengths = compute_lengths(vec![7u64; n]);

    assert!(lengths.iter().all(|&l| l == 12));
}
