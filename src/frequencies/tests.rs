use crate::{error::Error, properties::Limits};

use super::{FrequencyTable, parse_stream};

fn read(input: &str) -> Result<FrequencyTable, Error> {
    FrequencyTable::read(input.as_bytes(), &Limits::default())
}

#[test]
fn test_reads_one_frequency_per_line() {
    let table = read("4\n1\n2\n2\n9\n").unwrap();

    assert_eq!(table.frequencies(), &[1, 2, 2, 9]);
    assert_eq!(table.total(), 14);
    assert_eq!(table.len(), 4);
}

#[test]
fn test_accepts_any_whitespace() {
    let table = read("  3 1\n\n 2   3  \n").unwrap();

    assert_eq!(table.into_inner(), vec![1, 2, 3]);
}

#[test]
fn test_short_stream_truncates_count() {
    let table = read("10\n1\n5\n").unwrap();

    assert_eq!(table.frequencies(), &[1, 5]);
}

#[test]
fn test_values_past_count_are_ignored() {
    let values = parse_stream("2\n1\n2\n0\n".as_bytes(), &Limits::default()).unwrap();

    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_rejects_non_positive_count() {
    assert!(matches!(read("0\n"), Err(Error::InvalidCount { count: 0, .. })));
    assert!(matches!(read("-3\n1\n"), Err(Error::InvalidCount { count: -3, .. })));
}

#[test]
fn test_rejects_count_above_limit() {
    let limits = Limits { max_symbols: 3, ..Default::default() };
    let result = FrequencyTable::read("4\n1\n1\n1\n1\n".as_bytes(), &limits);

    assert!(matches!(result, Err(Error::InvalidCount { count: 4, limit: 3 })));
}

#[test]
fn test_rejects_missing_count() {
    assert!(matches!(read(""), Err(Error::Malformed { line: 1, .. })));
}

#[test]
fn test_rejects_malformed_token() {
    match read("3\n1\nabc\n4\n") {
        Err(Error::Malformed { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_rejects_decreasing_frequencies() {
    assert!(matches!(
        read("3\n1\n5\n4\n"),
        Err(Error::OrderingViolation { index: 2, value: 4, previous: 5 })
    ));
}

#[test]
fn test_rejects_negative_frequency() {
    assert!(matches!(
        read("2\n-1\n4\n"),
        Err(Error::OrderingViolation { index: 0, value: -1, .. })
    ));
}

#[test]
fn test_rejects_zero_total() {
    assert!(matches!(read("3\n0\n0\n0\n"), Err(Error::ZeroTotal)));
    // Truncated to nothing.
    assert!(matches!(read("5\n"), Err(Error::ZeroTotal)));
}

#[test]
fn test_rejects_overflowing_total() {
    let values = vec![i64::MAX, i64::MAX, i64::MAX];

    assert!(matches!(FrequencyTable::validate(values), Err(Error::TotalOverflow { index: 2 })));
}

#[test]
fn test_working_copy_is_independent() {
    let table = read("2\n3\n4\n").unwrap();
    let mut copy = table.working_copy().unwrap();
    assert_eq!(copy, vec![3, 4]);
    copy[0] = 99;

    assert_eq!(table.frequencies(), &[3, 4]);
}

#[test]
fn test_invalid_utf8_token_is_malformed() {
    match FrequencyTable::read(&b"2\n1\n\xff\n"[..], &Limits::default()) {
        Err(Error::Malformed { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "\u{fffd}");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_single_line_stream_stops_at_count() {
    // Tokens past the count are never parsed, even when malformed.
    let values = parse_stream("3 1 2 3 4 x y".as_bytes(), &Limits::default()).unwrap();

    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_tokens_report_their_line() {
    match read("2 1\n\n  \t 7 oops\n") {
        Err(Error::Malformed { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "oops");
        }
        other => panic!("unexpected result {:?}", other),
    }
}
