use std::{collections::BTreeMap, io::{self, BufRead, Write}};

use crate::error::{Error, Result};

/// Turns `count value` pairs into a dense, normalized distribution over the values.
#[derive(Default, Debug)]
pub struct CountNormalizer {
    counts: BTreeMap<i64, i64>,
    total: f64,
}

impl CountNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `count` occurrences of `value`; repeated values accumulate.
    pub fn push(&mut self, count: i64, value: i64) {
        *self.counts.entry(value).or_insert(0) += count;
        self.total += count as f64;
    }

    /// Reads one `count value` pair per line; blank lines are skipped.
    pub fn read<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();

            let (count, value) = match (fields.next(), fields.next()) {
                (None, _) => continue,
                (Some(c), Some(v)) => (c, v),
                (Some(c), None) => return Err(Error::Malformed { line: i + 1, token: c.to_owned() }),
            };

            let count = count.parse().map_err(|_| Error::Malformed { line: i + 1, token: count.to_owned() })?;
            let value = value.parse().map_err(|_| Error::Malformed { line: i + 1, token: value.to_owned() })?;
            self.push(count, value);
        }

        Ok(())
    }

    /// Returns `(value, fraction)` for every integer from `min(-1, smallest value)` up
    /// to the largest value; values never seen get a zero fraction.
    pub fn rows(&self) -> Vec<(i64, f64)> {
        let (Some((&lo, _)), Some((&hi, _))) = (self.counts.first_key_value(), self.counts.last_key_value()) else {
            return Vec::new();
        };

        (lo.min(-1)..=hi)
            .map(|v| {
                let c = self.counts.get(&v).copied().unwrap_or(0);
                let frac = if self.total != 0.0 { c as f64 / self.total } else { 0.0 };
                (v, frac)
            })
            .collect()
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (v, frac) in self.rows() {
            writeln!(w, "{} {:.6}", v, frac)?;
        }

        Ok(())
    }
}

#[test]
fn test_dense_normalized_rows() {
    let mut normalizer = CountNormalizer::new();
    normalizer.read("2 0\n6 2\n".as_bytes()).unwrap();

    let mut out = Vec::new();
    normalizer.write(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "-1 0.000000\n0 0.250000\n1 0.000000\n2 0.750000\n");
}

#[test]
fn test_negative_values_extend_range() {
    let mut normalizer = CountNormalizer::new();
    normalizer.push(1, -3);
    normalizer.push(1, 1);
    normalizer.push(2, 1);

    let rows = normalizer.rows();

    assert_eq!(rows.first().unwrap().0, -3);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows.last().unwrap(), &(1, 0.75));
}

#[test]
fn test_empty_input() {
    let mut normalizer = CountNormalizer::new();
    normalizer.read("\n\n".as_bytes()).unwrap();

    assert!(normalizer.rows().is_empty());
}

#[test]
fn test_rejects_incomplete_pair() {
    let mut normalizer = CountNormalizer::new();

    assert!(matches!(normalizer.read("3 1\n4\n".as_bytes()), Err(Error::Malformed { line: 2, .. })));
}
