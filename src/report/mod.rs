
use std::io::{self, Write};

use serde::Serialize;

/// Codeword lengths of a minimum-redundancy code next to the frequencies they were
/// computed from, with the entropy figures derived from them.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CodeReport {
    pub frequencies: Vec<u64>,
    pub lengths: Vec<u64>,
    pub total_frequency: u64,
    /// Sum of `frequency * length` over all the symbols.
    pub total_bits: u128,
    /// In bits per symbol.
    pub entropy: f64,
    pub average_length: f64,
    /// Percentage by which the average length exceeds the entropy; `None` when the
    /// entropy is zero.
    pub inefficiency: Option<f64>,
}

impl CodeReport {
    /// # Arguments
    ///
    /// * `frequencies` - The original frequencies
    /// * `lengths` - The codeword lengths, position by position
    pub fn new(frequencies: Vec<u64>, lengths: Vec<u64>) -> Self {
        assert_eq!(frequencies.len(), lengths.len(), "every frequency needs a codeword length");

        let total_frequency: u64 = frequencies.iter().sum();
        let total_bits = frequencies.iter()
            .zip(lengths.iter())
            .map(|(&f, &l)| f as u128 * l as u128)
            .sum();

        let entropy = entropy(&frequencies, total_frequency);
        let average_length = if total_frequency > 0 { total_bits as f64 / total_frequency as f64 } else { 0.0 };
        let inefficiency = if entropy > 0.0 { Some(100.0 * average_length / entropy - 100.0) } else { None };

        Self { frequencies, lengths, total_frequency, total_bits, entropy, average_length, inefficiency }
    }

    /// Writes the textual report: one line per symbol when there are at most
    /// `list_limit` of them, then the summary lines.
    pub fn render<W: Write>(&self, w: &mut W, list_limit: usize) -> io::Result<()> {
        if self.frequencies.len() <= list_limit {
            for (i, (f, l)) in self.frequencies.iter().zip(self.lengths.iter()).enumerate() {
                writeln!(w, "f_{:02} = {:4}, |c_{:02}| = {:2}", i, f, i, l)?;
            }
        }

        writeln!(w, "entropy                 = {:5.2} bits per symbol", self.entropy)?;
        writeln!(w, "minimum-redundancy code = {:5.2} bits per symbol", self.average_length)?;
        if let Some(inefficiency) = self.inefficiency {
            writeln!(w, "inefficiency            = {:5.2}%", inefficiency)?;
        }

        Ok(())
    }
}

/// Shannon entropy in bits per symbol; zero frequencies contribute nothing.
pub fn entropy(frequencies: &[u64], total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let mut ent = 0.0;
    for &f in frequencies.iter().filter(|&&f| f > 0) {
        let prob = f as f64 / total as f64;
        ent -= prob * prob.log2();
    }

    ent
}
