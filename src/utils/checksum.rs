use std::io::{self, Read};

/// Sums every byte above 32 (that is, neither a control character nor a space).
/// The result does not depend on the order of the bytes.
pub fn checksum<R: Read>(reader: R) -> io::Result<u64> {
    let mut check = 0u64;

    for b in io::BufReader::new(reader).bytes() {
        let b = b?;
        if b > 32 {
            check += b as u64;
        }
    }

    Ok(check)
}

#[test]
fn test_skips_blanks_and_controls() {
    assert_eq!(checksum("ab c\n\t\r".as_bytes()).unwrap(), 97 + 98 + 99);
    assert_eq!(checksum(&b""[..]).unwrap(), 0);
}

#[test]
fn test_permutation_invariant() {
    let a = checksum("line one\nline two\n".as_bytes()).unwrap();
    let b = checksum("line two\nline one\n".as_bytes()).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_counts_high_bytes() {
    assert_eq!(checksum(&[0xffu8, 0x80, 0x20][..]).unwrap(), 255 + 128);
}
