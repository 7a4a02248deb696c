#[cfg(test)]
mod tests;

use std::io::BufRead;

use crate::{error::{Error, Result}, properties::Limits};

/// A validated, non-decreasing sequence of symbol frequencies with a positive total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    frequencies: Vec<u64>,
    total: u64,
}

impl FrequencyTable {
    /// Reads and validates a frequency stream: a count followed by that many
    /// frequencies.
    ///
    /// # Arguments
    ///
    /// * `reader` - The textual stream
    /// * `limits` - The limits the declared count is checked against
    pub fn read<R: BufRead>(reader: R, limits: &Limits) -> Result<Self> {
        Self::validate(parse_stream(reader, limits)?)
    }

    /// Checks that the values are non-negative, non-decreasing, and sum to a
    /// positive total that fits in 64 bits.
    pub fn validate(values: Vec<i64>) -> Result<Self> {
        let mut total: u64 = 0;
        let mut previous = 0;

        for (index, &value) in values.iter().enumerate() {
            if value < 0 || value < previous {
                return Err(Error::OrderingViolation { index, value, previous });
            }
            previous = value;

            total = total.checked_add(value as u64).ok_or(Error::TotalOverflow { index })?;
        }

        if total == 0 {
            return Err(Error::ZeroTotal);
        }

        let frequencies = values.into_iter().map(|v| v as u64).collect();

        Ok(Self { frequencies, total })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    #[inline(always)]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline(always)]
    pub fn frequencies(&self) -> &[u64] {
        &self.frequencies
    }

    /// Returns a fresh working copy for the length calculator, which overwrites it.
    pub fn working_copy(&self) -> Result<Vec<u64>> {
        let count = self.frequencies.len();
        let mut copy = Vec::new();
        copy.try_reserve_exact(count).map_err(|_| Error::AllocationFailure { count })?;
        copy.extend_from_slice(&self.frequencies);

        Ok(copy)
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.frequencies
    }
}

/// Parses the count line and the frequencies following it, without checking their
/// order.
///
/// The count is an upper bound: a stream ending early yields fewer values. Values
/// past the declared count are ignored.
pub fn parse_stream<R: BufRead>(reader: R, limits: &Limits) -> Result<Vec<i64>> {
    let mut tokens = Tokens::new(reader);

    let count = match tokens.next_token()? {
        Some(line) => tokens.parse_current(line)?,
        None => return Err(Error::Malformed { line: 1, token: String::new() }),
    };

    if count <= 0 || count as u64 > limits.max_symbols as u64 {
        return Err(Error::InvalidCount { count, limit: limits.max_symbols });
    }
    let count = count as usize;

    let mut values = Vec::new();
    values.try_reserve_exact(count).map_err(|_| Error::AllocationFailure { count })?;

    while values.len() < count {
        match tokens.next_token()? {
            Some(line) => values.push(tokens.parse_current(line)?),
            None => break,
        }
    }

    Ok(values)
}

/// Whitespace-separated tokens of a stream, tagged with their one-based line number.
/// Tokens are sliced out of the current line on demand.
struct Tokens<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
    start: usize,
    end: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self { reader, line: 0, buf: Vec::new(), start: 0, end: 0 }
    }

    /// Advances to the next token and returns its line number.
    fn next_token(&mut self) -> Result<Option<usize>> {
        loop {
            let rest = &self.buf[self.end..];
            if let Some(skip) = rest.iter().position(|b| !b.is_ascii_whitespace()) {
                self.start = self.end + skip;
                let len = self.buf[self.start..].iter().position(|b| b.is_ascii_whitespace()).unwrap_or(self.buf.len() - self.start);
                self.end = self.start + len;
                return Ok(Some(self.line));
            }

            self.buf.clear();
            self.start = 0;
            self.end = 0;
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
        }
    }

    /// Parses the token returned by the last call to `next_token`.
    fn parse_current(&self, line: usize) -> Result<i64> {
        let token = &self.buf[self.start..self.end];

        std::str::from_utf8(token)
            .ok()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| Error::Malformed { line, token: String::from_utf8_lossy(token).into_owned() })
    }
}
