use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Marks the start of a page record in a crawler dump.
pub const PAGE_COOKIE: &str = "==P=>>>>=i===<<<<=T===>=A===<=!Junghoo!==>";

const URL_PREFIX: &str = "URL: ";
const PROGRESS_EVERY: i64 = 1_000_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Index of the last page written, -1 if none.
    pub pages: i64,
    pub seen: u64,
    pub output: u64,
}

/// Turns a crawler dump into one line per page, `url<TAB>link<TAB>link...`.
///
/// Each page record is the cookie line, a `URL: ` line and three header lines,
/// followed by the links found in the page, one per line. Pages whose URL is a
/// `robots.txt`, contains blanks or control characters, or is not an `http` URL are
/// dropped together with their links. Only `http` links without blanks are kept.
/// Warnings and progress go to stderr.
///
/// # Arguments
///
/// * `reader` - The crawler dump
/// * `out` - Where the adjacency lines are written
pub fn extract_links<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<LinkStats> {
    let mut stats = LinkStats { pages: -1, ..Default::default() };
    let mut skip = false;

    while let Some(line) = next_line(&mut reader)? {
        if line == PAGE_COOKIE.as_bytes() {
            let record = next_line(&mut reader)?.unwrap_or(line);
            let Some(url) = record.strip_prefix(URL_PREFIX.as_bytes()) else {
                return Err(Error::MissingUrl { page: stats.pages, found: String::from_utf8_lossy(&record).into_owned() });
            };
            let shown = String::from_utf8_lossy(&record);

            skip = url.ends_with(b"robots.txt");

            if let Some(c) = url.iter().find(|&&c| c <= 32) {
                eprintln!("Control or space character ({}) in URL {} at page {}--skipping this entry.", c, shown, stats.pages);
                skip = true;
            }

            if !url.get(..4).is_some_and(|p| p.eq_ignore_ascii_case(b"http")) {
                eprintln!("URL {} at page {} does not start with \"http\"--skipping this entry.", shown, stats.pages);
                skip = true;
            }

            if !skip {
                if stats.pages >= 0 && stats.pages % PROGRESS_EVERY == 0 {
                    eprintln!("Pages: {} Links seen: {} Links output: {}", stats.pages, stats.seen, stats.output);
                }
                if stats.pages != -1 {
                    out.write_all(b"\n")?;
                }
                stats.pages += 1;
                write_lower_protocol(out, url)?;
            }

            // Three header lines, the last of which must be empty.
            let mut third = None;
            for _ in 0..3 {
                third = next_line(&mut reader)?;
            }
            if third.is_some_and(|l| !l.is_empty()) {
                eprintln!("Warning at page {}, {}: out of sync on the third skipped line.", stats.pages, shown);
            }
        } else if !skip {
            stats.seen += 1;

            if line.iter().any(|&c| c <= 32) {
                continue;
            }

            if line.starts_with(b"http") {
                stats.output += 1;
                out.write_all(b"\t")?;
                write_lower_protocol(out, &line)?;
            }
        }
    }

    out.write_all(b"\n")?;
    eprintln!("Pages: {} Links seen: {} Links output: {}", stats.pages, stats.seen, stats.output);

    Ok(stats)
}

/// Reads the next line as raw bytes, without its `\n` or `\r\n` terminator.
fn next_line<R: BufRead>(reader: &mut R) -> Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    Ok(Some(buf))
}

/// Writes `url` with its leading run of letters, i.e. the protocol, lower-cased.
fn write_lower_protocol<W: Write>(out: &mut W, url: &[u8]) -> Result<()> {
    let end = url.iter().position(|c| !c.is_ascii_alphabetic()).unwrap_or(url.len());
    out.write_all(&url[..end].to_ascii_lowercase())?;
    out.write_all(&url[end..])?;
    Ok(())
}

#[cfg(test)]
fn page(url: &str, links: &[&str]) -> String {
    let mut s = format!("{PAGE_COOKIE}\nURL: {url}\nDate: 1999\nLength: 10\n\n");
    for l in links {
        s.push_str(l);
        s.push('\n');
    }
    s
}

#[test]
fn test_pages_become_adjacency_lines() {
    let dump = page("HTTP://a.org/", &["http://b.org/", "mailto:x@y", "HTTP://c.org/x"])
        + &page("http://b.org/", &["http://a.org/"]);
    let mut out = Vec::new();

    let stats = extract_links(dump.as_bytes(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "http://a.org/\thttp://b.org/\nhttp://b.org/\thttp://a.org/\n");
    assert_eq!(stats, LinkStats { pages: 1, seen: 4, output: 2 });
}

#[test]
fn test_skipped_pages_drop_their_links() {
    let dump = page("http://a.org/robots.txt", &["http://x.org/"])
        + &page("ftp://a.org/", &["http://y.org/"])
        + &page("http://a.org/with space", &["http://z.org/"])
        + &page("http://ok.org/", &["http://w.org/", "http://bad link/", "http://v.org/\r"]);
    let mut out = Vec::new();

    let stats = extract_links(dump.as_bytes(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "http://ok.org/\thttp://w.org/\thttp://v.org/\n");
    assert_eq!(stats.pages, 0);
    assert_eq!(stats.seen, 3);
}

#[test]
fn test_missing_url_stops_extraction() {
    let dump = format!("{PAGE_COOKIE}\nDate: 1999\n");

    let result = extract_links(dump.as_bytes(), &mut Vec::new());

    assert!(matches!(result, Err(Error::MissingUrl { page: -1, found }) if found == "Date: 1999"));
}

#[test]
fn test_lower_protocol() {
    let mut out = Vec::new();
    write_lower_protocol(&mut out, b"HtTp://Example.ORG/").unwrap();
    write_lower_protocol(&mut out, b"").unwrap();

    assert_eq!(out, b"http://Example.ORG/");
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let mut dump = page("http://a.org/", &["http://b.org/"]).into_bytes();
    dump.extend_from_slice(b"http://c.org/caf\xe9\n");
    let mut second = page("http://d.org/~", &["http://e.org/"]).into_bytes();
    let tilde = second.iter().position(|&b| b == b'~').unwrap();
    second[tilde] = 0xc0;
    dump.extend_from_slice(&second);
    let mut out = Vec::new();

    let stats = extract_links(dump.as_slice(), &mut out).unwrap();

    assert_eq!(out, b"http://a.org/\thttp://b.org/\thttp://c.org/caf\xe9\nhttp://d.org/\xc0\thttp://e.org/\n");
    assert_eq!(stats, LinkStats { pages: 1, seen: 3, output: 3 });
}

#[test]
fn test_crlf_dump() {
    let dump = page("http://a.org/", &["http://b.org/"]).replace('\n', "\r\n");
    let mut out = Vec::new();

    extract_links(dump.as_bytes(), &mut out).unwrap();

    assert_eq!(out, b"http://a.org/\thttp://b.org/\n");
}
