use std::io::{self, Write};

/// Non-decreasing symbol counts shaped like a Zipf distribution: the `i`-th most
/// frequent of `n` symbols gets `i^-exponent / n^-exponent`, truncated, so the
/// rarest symbol gets a count of one.
///
/// Counts are yielded from the rarest symbol to the most frequent one, the order
/// expected by the length calculator.
#[derive(Clone, Debug)]
pub struct ZipfCounts {
    exponent: f64,
    scale: f64,
    rank: u64,
}

impl ZipfCounts {
    /// # Arguments
    ///
    /// * `n` - The number of symbols
    /// * `exponent` - The exponent of the distribution; single precision, like the
    ///   values it is usually read from
    pub fn new(n: u64, exponent: f32) -> Self {
        let exponent = exponent as f64;
        Self {
            exponent,
            scale: (-exponent * (n as f64).ln()).exp(),
            rank: n,
        }
    }
}

impl Iterator for ZipfCounts {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rank == 0 {
            return None;
        }

        let count = (-self.exponent * (self.rank as f64).ln()).exp() / self.scale;
        self.rank -= 1;

        Some(count as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let r = self.rank as usize;
        (r, Some(r))
    }
}

/// Writes a frequency stream for `n` Zipf-distributed symbols: the count, then one
/// value per line.
pub fn write_zipf_stream<W: Write>(w: &mut W, n: u64, exponent: f32) -> io::Result<()> {
    writeln!(w, "{}", n)?;
    for count in ZipfCounts::new(n, exponent) {
        writeln!(w, "{}", count)?;
    }

    Ok(())
}

#[test]
fn test_counts_are_non_decreasing_from_one() {
    let counts: Vec<u64> = ZipfCounts::new(1000, 1.1).collect();

    assert_eq!(counts.len(), 1000);
    assert_eq!(counts[0], 1);
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    assert!(counts[999] > 1000);
}

#[test]
fn test_zero_exponent_is_uniform() {
    let counts: Vec<u64> = ZipfCounts::new(5, 0.0).collect();

    assert_eq!(counts, vec![1; 5]);
}

#[test]
fn test_empty_distribution() {
    assert_eq!(ZipfCounts::new(0, 2.0).count(), 0);
}

#[test]
fn test_stream_layout() {
    let mut out = Vec::new();
    write_zipf_stream(&mut out, 3, 0.0).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "3\n1\n1\n1\n");
}
