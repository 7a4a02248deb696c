#[cfg(test)]
mod tests;

use num_traits::PrimInt;

/// Computes the minimum-redundancy codeword lengths of a non-decreasing sequence of
/// frequencies, consuming it and returning the same storage filled with the lengths.
///
/// Position `i` of the result is the length of the codeword of the symbol whose
/// frequency was at position `i`. Callers needing the frequencies afterwards must
/// keep their own copy.
///
/// # Arguments
///
/// * `frequencies` - The symbol frequencies, non-negative and non-decreasing
///
/// # Examples
///
/// ```
/// use inplace_codes::lengths::compute_lengths;
///
/// assert_eq!(compute_lengths(vec![1u64, 1, 1, 1]), vec![2, 2, 2, 2]);
/// ```
pub fn compute_lengths<T: PrimInt>(mut frequencies: Vec<T>) -> Vec<T> {
    calculate_minimum_redundancy(&mut frequencies);
    frequencies
}

/// In-place version of [`compute_lengths`]: overwrites `a` with the codeword lengths.
///
/// The slice goes through three views of the same storage: combined weights and
/// parent pointers after the first pass, internal node depths after the second,
/// and leaf depths (the codeword lengths) after the third.
/// No other memory is used besides a handful of cursors.
///
/// The element type must be able to hold the sum of all the frequencies and any
/// index below `a.len()`. The input must be non-negative and non-decreasing; the
/// result on any other input is unspecified.
pub fn calculate_minimum_redundancy<T: PrimInt>(a: &mut [T]) {
    let n = a.len();

    if n == 0 {
        return;
    }
    if n == 1 {
        a[0] = T::zero();
        return;
    }

    assert!(T::from(n).is_some(), "{n} symbols cannot be indexed by the element type");

    link_parents(a);
    internal_depths(a);
    leaf_depths(a);
}

/// First pass, left to right. Builds the internal nodes of the Huffman tree in
/// creation order: slot `next` receives the weight of the `next`-th internal node,
/// and an internal node is replaced by the index of its parent once it is consumed.
///
/// On return `a[n - 2]` holds the weight of the root and `a[0..n - 2]` the parent
/// pointers, each pointing to a higher slot.
fn link_parents<T: PrimInt>(a: &mut [T]) {
    let n = a.len();
    debug_assert!(n >= 2);

    a[0] = a[0] + a[1];
    let mut root = 0;
    let mut leaf = 2;

    for next in 1..n - 1 {
        // First item of the pair. An internal node wins only on strict inequality.
        if leaf >= n || a[root] < a[leaf] {
            a[next] = a[root];
            a[root] = from_index(next);
            root += 1;
        } else {
            a[next] = a[leaf];
            leaf += 1;
        }

        // Second item. The node being built cannot pair with itself.
        if leaf >= n || (root < next && a[root] < a[leaf]) {
            a[next] = a[next] + a[root];
            a[root] = from_index(next);
            root += 1;
        } else {
            a[next] = a[next] + a[leaf];
            leaf += 1;
        }
    }
}

/// Second pass, right to left. Replaces each parent pointer with the depth of the
/// internal node; the root sits at depth zero.
fn internal_depths<T: PrimInt>(a: &mut [T]) {
    let n = a.len();
    debug_assert!(n >= 2);

    a[n - 2] = T::zero();
    for next in (0..n - 2).rev() {
        let parent = to_index(a[next]);
        debug_assert!(parent > next, "parent pointer {parent} of node {next} is not ahead of it");
        a[next] = a[parent] + T::one();
    }
}

/// Third pass, right to left. Walks the tree level by level: at each depth the
/// slots not taken by internal nodes are leaves, and every internal node opens two
/// slots on the next level. Leaves are written from the end of the array so that
/// the least frequent symbols get the deepest leaves.
fn leaf_depths<T: PrimInt>(a: &mut [T]) {
    let n = a.len();
    debug_assert!(n >= 2);

    let mut available: usize = 1;
    let mut used: usize = 0;
    let mut depth = T::zero();
    // Both cursors count the slots still to the left, so that zero means exhausted.
    let mut internal = n - 1;
    let mut next = n;

    while available > 0 {
        while internal > 0 && a[internal - 1] == depth {
            used += 1;
            internal -= 1;
        }
        while available > used {
            next -= 1;
            a[next] = depth;
            available -= 1;
        }
        available = 2 * used;
        depth = depth + T::one();
        used = 0;
    }

    debug_assert_eq!(next, 0, "leaf placement did not cover every symbol");
}

#[inline(always)]
fn from_index<T: PrimInt>(i: usize) -> T {
    T::from(i).expect("index checked against the element type")
}

#[inline(always)]
fn to_index<T: PrimInt>(x: T) -> usize {
    x.to_usize().expect("parent pointer is a valid index")
}
